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

use std::fmt;

/// An identifier: `[A-Za-z][A-Za-z0-9_-]*`.
///
/// Term identifiers are stored without their leading `-` sigil and variable
/// references without their `$`; both sigils are syntax, not name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The name as written, e.g. `brand-name`.
    pub name: String,
    /// A span locating where the identifier occurred in the source.
    pub span: Option<Span>,
}

simple_node_impl!(Identifier);

impl Identifier {
    /// Constructs an identifier with `name` and no span.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), span: None }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
