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

use crate::{simple_node_impl, Identifier, Pattern};
use ftl_span::Span;

/// An attribute of a message or term: `.placeholder = Your name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute identifier, without the leading `.`.
    pub id: Identifier,
    /// The value pattern. Attributes always have one.
    pub value: Pattern,
    /// A span starting at the `.` sigil.
    pub span: Option<Span>,
}

simple_node_impl!(Attribute);
