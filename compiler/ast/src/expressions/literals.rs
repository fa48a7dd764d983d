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

use crate::{simple_node_impl, Node};
use ftl_span::Span;

/// A double-quoted string literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringLiteral {
    /// The processed value, after escape expansion. Escapes which would
    /// produce unpaired surrogates expand to U+FFFD.
    pub value: String,
    pub span: Option<Span>,
}

simple_node_impl!(StringLiteral);

/// A number literal: optional `-`, digits, optional `.` and more digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberLiteral {
    /// The raw lexical form, e.g. `-3.14`. Consumers reparse as needed.
    pub value: String,
    pub span: Option<Span>,
}

simple_node_impl!(NumberLiteral);

impl NumberLiteral {
    /// The number of digits after the decimal point; 0 when there is none.
    pub fn precision(&self) -> usize {
        match self.value.find('.') {
            Some(dot) => self.value.len() - dot - 1,
            None => 0,
        }
    }
}

/// A literal value in a named-argument position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    String(StringLiteral),
    Number(NumberLiteral),
}

impl Node for Literal {
    fn span(&self) -> Option<Span> {
        match self {
            Literal::String(n) => n.span(),
            Literal::Number(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        match self {
            Literal::String(n) => n.set_span(span),
            Literal::Number(n) => n.set_span(span),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision() {
        let whole = NumberLiteral { value: "42".to_string(), span: None };
        assert_eq!(whole.precision(), 0);

        let fractional = NumberLiteral { value: "-0.075".to_string(), span: None };
        assert_eq!(fractional.precision(), 3);
    }
}
