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

//! The parser to convert Fluent FTL source text into a [`Resource`] AST.
//!
//! Parsing always succeeds: syntax errors are recovered at entry
//! granularity, and the failed regions appear in the resource body as
//! `Junk` entries carrying an error annotation each.
//!
//! ```
//! let resource = ftl_parser::parse("hello = Hello, {$name}!\n");
//! assert_eq!(resource.body.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub(crate) mod stream;

pub mod parser;
pub use parser::*;

use ftl_ast::Resource;

/// Parses `source` with spans attached to every node.
pub fn parse(source: &str) -> Resource {
    Parser::new().parse(source)
}

/// Parses `source` without span attachment.
pub fn parse_without_spans(source: &str) -> Resource {
    Parser::with_spans(false).parse(source)
}
