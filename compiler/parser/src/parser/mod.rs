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

//! The recursive-descent parser over the character stream.
//!
//! Parse routines return `Result` and propagate failures with `?` up to the
//! entry boundary, where [`ParserContext::parse_entry_or_junk`] converts
//! them into [`Junk`](ftl_ast::Junk) entries. Nothing escapes the resource
//! loop.

use ftl_ast::Resource;

mod context;
pub(crate) use context::*;

mod expression;
mod pattern;
mod resource;

/// The FTL parser and its parse-time configuration.
#[derive(Clone, Copy, Debug)]
pub struct Parser {
    with_spans: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self { with_spans: true }
    }
}

impl Parser {
    /// Creates a parser which attaches spans to every node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with span attachment switched as given.
    ///
    /// Both settings produce identical trees on all non-span fields.
    pub fn with_spans(with_spans: bool) -> Self {
        Self { with_spans }
    }

    /// Parses `source` into a [`Resource`].
    ///
    /// Never fails: regions that cannot be parsed become `Junk` entries in
    /// the resource body, each carrying an error annotation.
    pub fn parse(&self, source: &str) -> Resource {
        tracing::debug!(len = source.len(), with_spans = self.with_spans, "parsing resource");
        let mut context = ParserContext::new(source, self.with_spans);
        context.parse_resource()
    }
}
