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

//! Errors of the FTL parser.
//!
//! Each error in the catalog carries a stable numeric code (`E0003`), the
//! positional arguments its message template was rendered with, and the
//! rendered human-readable message. The parser converts these triples into
//! `Annotation` nodes on `Junk` entries; it never surfaces them to callers
//! as `Err` values of the top-level parse operation.

#![forbid(unsafe_code)]

pub mod common;
pub use self::common::*;

pub mod errors;
pub use self::errors::*;

/// A result type for parse routines, defaulting the error to [`ParserError`].
pub type Result<T, E = ParserError> = core::result::Result<T, E>;
