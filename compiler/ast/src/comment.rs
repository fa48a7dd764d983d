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

use crate::simple_node_impl;
use ftl_span::Span;

/// A `#` comment.
///
/// When a level-0 comment sits directly above a message or term with no
/// blank line between, the parser moves it into that entry's `comment`
/// field instead of the resource body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    /// The comment text, lines joined by `\n`, without the `# ` markers.
    pub content: String,
    pub span: Option<Span>,
}

simple_node_impl!(Comment);

/// A `##` group comment. Always stands alone in the resource body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupComment {
    /// The comment text, lines joined by `\n`, without the `## ` markers.
    pub content: String,
    pub span: Option<Span>,
}

simple_node_impl!(GroupComment);

/// A `###` resource comment. Always stands alone in the resource body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceComment {
    /// The comment text, lines joined by `\n`, without the `### ` markers.
    pub content: String,
    pub span: Option<Span>,
}

simple_node_impl!(ResourceComment);
