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
use ftl_errors::ParserError;
use ftl_span::Span;

/// An unparseable region of the source.
///
/// The content runs from where the failing entry began to the start of the
/// next line that could begin an entry, so it may end with blank lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Junk {
    /// The raw source slice that failed to parse.
    pub content: String,
    /// The parse failures recorded for this region. Never empty.
    pub annotations: Vec<Annotation>,
    pub span: Option<Span>,
}

simple_node_impl!(Junk);

/// A parse failure attached to a [`Junk`] entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    /// The catalog code, e.g. `E0003`.
    pub code: String,
    /// The positional arguments the message was rendered with.
    pub arguments: Vec<String>,
    /// The rendered human-readable message.
    pub message: String,
    /// A zero-width span at the position the error was detected.
    pub span: Option<Span>,
}

simple_node_impl!(Annotation);

impl From<ParserError> for Annotation {
    fn from(error: ParserError) -> Self {
        Self { code: error.code, arguments: error.args, message: error.message, span: None }
    }
}
