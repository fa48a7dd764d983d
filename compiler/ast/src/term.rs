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

use crate::{simple_node_impl, Attribute, Comment, Identifier, Pattern};
use ftl_span::Span;

/// A term: `-brand-name = Firefox`.
///
/// The identifier is stored without the `-` sigil. Unlike messages, terms
/// always have a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Term {
    /// The term identifier, without the leading `-`.
    pub id: Identifier,
    /// The value pattern.
    pub value: Pattern,
    /// The attributes, in source order. May be empty.
    pub attributes: Vec<Attribute>,
    /// The comment attached from the line directly above, if any.
    pub comment: Option<Comment>,
    /// A span covering the entry, including any attached comment.
    pub span: Option<Span>,
}

simple_node_impl!(Term);
