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

use crate::{Node, Placeable};
use ftl_span::Span;

mod call;
pub use call::*;

mod literals;
pub use literals::*;

mod references;
pub use references::*;

mod select;
pub use select::*;

/// An expression inside a placeable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    /// A double-quoted literal, e.g. `"abc"`, with escapes expanded.
    StringLiteral(StringLiteral),
    /// A number literal, e.g. `-3.14`.
    NumberLiteral(NumberLiteral),
    /// A reference to an externally provided variable, e.g. `$name`.
    VariableReference(VariableReference),
    /// A reference to a term, e.g. `-brand-name.gender(case: "nominative")`.
    TermReference(TermReference),
    /// A reference to another message, e.g. `menu-save.title`.
    MessageReference(MessageReference),
    /// A call to a runtime-provided function, e.g. `NUMBER($n)`.
    FunctionReference(FunctionReference),
    /// A placeable nested inside another placeable.
    Placeable(Box<Placeable>),
    /// Pattern-level branching on a selector value.
    SelectExpression(SelectExpression),
}

impl Node for Expression {
    fn span(&self) -> Option<Span> {
        use Expression::*;
        match self {
            StringLiteral(n) => n.span(),
            NumberLiteral(n) => n.span(),
            VariableReference(n) => n.span(),
            TermReference(n) => n.span(),
            MessageReference(n) => n.span(),
            FunctionReference(n) => n.span(),
            Placeable(n) => n.span(),
            SelectExpression(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Expression::*;
        match self {
            StringLiteral(n) => n.set_span(span),
            NumberLiteral(n) => n.set_span(span),
            VariableReference(n) => n.set_span(span),
            TermReference(n) => n.set_span(span),
            MessageReference(n) => n.set_span(span),
            FunctionReference(n) => n.set_span(span),
            Placeable(n) => n.set_span(span),
            SelectExpression(n) => n.set_span(span),
        }
    }
}
