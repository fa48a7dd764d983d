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

use crate::{simple_node_impl, Expression, Node};
use ftl_span::Span;

/// The value of a message, term, attribute, or variant: a non-empty
/// sequence of text runs and placeables.
///
/// Multiline values are stored dedented: the common indent of the
/// continuation lines has been stripped, and trailing whitespace has been
/// trimmed from the end of the whole pattern (blank lines inside the
/// pattern are preserved).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// The elements in source order. No two adjacent text elements, and no
    /// empty ones.
    pub elements: Vec<PatternElement>,
    pub span: Option<Span>,
}

simple_node_impl!(Pattern);

/// One element of a [`Pattern`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternElement {
    /// A verbatim run of text.
    TextElement(TextElement),
    /// An expression in `{ }` braces.
    Placeable(Placeable),
}

impl Node for PatternElement {
    fn span(&self) -> Option<Span> {
        match self {
            PatternElement::TextElement(n) => n.span(),
            PatternElement::Placeable(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        match self {
            PatternElement::TextElement(n) => n.set_span(span),
            PatternElement::Placeable(n) => n.set_span(span),
        }
    }
}

/// A verbatim run of pattern text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextElement {
    /// The text. Escape sequences do not apply here; only `{` and `}` are
    /// special in pattern text.
    pub value: String,
    pub span: Option<Span>,
}

simple_node_impl!(TextElement);

/// An expression wrapped in `{ }` inside a pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeable {
    /// The wrapped expression.
    pub expression: Expression,
    pub span: Option<Span>,
}

simple_node_impl!(Placeable);
