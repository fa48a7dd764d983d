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

use crate::stream::ParserStream;

use ftl_span::{BytePos, Span};

/// Stores the stream over one source text plus parse-time configuration.
pub(crate) struct ParserContext<'a> {
    /// The double-cursor character stream.
    pub(crate) stream: ParserStream<'a>,
    /// Whether parsed nodes get spans attached.
    with_spans: bool,
}

impl<'a> ParserContext<'a> {
    /// Returns a new [`ParserContext`] over the given source text.
    pub fn new(source: &'a str, with_spans: bool) -> Self {
        Self { stream: ParserStream::new(source), with_spans }
    }

    /// The byte offset of the primary cursor.
    pub fn index(&self) -> usize {
        self.stream.index()
    }

    /// Builds the span `[start, end)` when span attachment is enabled.
    pub fn make_span(&self, start: usize, end: usize) -> Option<Span> {
        self.with_spans.then(|| Span::new(BytePos::from_usize(start), BytePos::from_usize(end)))
    }

    /// Builds the span from `start` to the primary cursor when span
    /// attachment is enabled.
    pub fn span_from(&self, start: usize) -> Option<Span> {
        self.make_span(start, self.stream.index())
    }
}
