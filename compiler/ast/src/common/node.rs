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

use ftl_span::Span;

/// A node in the AST.
///
/// Spans are optional: a parser configured without span attachment leaves
/// `span()` as [`None`] on every node, and the two modes agree on all other
/// fields.
pub trait Node: std::fmt::Debug + Clone + PartialEq + Eq + serde::Serialize {
    /// Returns the span of the node, if spans were attached.
    fn span(&self) -> Option<Span>;

    /// Sets the span of the node.
    fn set_span(&mut self, span: Span);
}

#[macro_export]
macro_rules! simple_node_impl {
    ($ty:ty) => {
        impl $crate::Node for $ty {
            fn span(&self) -> Option<ftl_span::Span> {
                self.span
            }

            fn set_span(&mut self, span: ftl_span::Span) {
                self.span = Some(span);
            }
        }
    };
}
