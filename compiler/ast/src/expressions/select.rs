// Copyright (C) 2024-2026 Aleo Systems Inc.
// This file is part of the FTL library.

// The FTL library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The FTL library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the FTL library. If not, see <https://www.gnu.org/licenses/>.

use crate::{simple_node_impl, Expression, Identifier, Node, NumberLiteral, Pattern};
use ftl_span::Span;

/// Pattern-level branching: `{ $count -> [one] ... *[other] ... }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectExpression {
    /// The value branched on.
    pub selector: Box<Expression>,
    /// The variants, in source order. Non-empty, with exactly one default.
    pub variants: Vec<Variant>,
    pub span: Option<Span>,
}

simple_node_impl!(SelectExpression);

/// One branch of a [`SelectExpression`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variant {
    /// The key in `[ ]` brackets.
    pub key: VariantKey,
    /// The branch's value pattern.
    pub value: Pattern,
    /// Whether this variant was marked as the default with `*`.
    pub default: bool,
    pub span: Option<Span>,
}

simple_node_impl!(Variant);

/// A variant key: an identifier or a number literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VariantKey {
    Identifier(Identifier),
    NumberLiteral(NumberLiteral),
}

impl Node for VariantKey {
    fn span(&self) -> Option<Span> {
        match self {
            VariantKey::Identifier(n) => n.span(),
            VariantKey::NumberLiteral(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        match self {
            VariantKey::Identifier(n) => n.set_span(span),
            VariantKey::NumberLiteral(n) => n.set_span(span),
        }
    }
}
