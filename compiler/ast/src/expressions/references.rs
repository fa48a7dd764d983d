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

use crate::{simple_node_impl, CallArguments, Identifier};
use ftl_span::Span;

/// A reference to an externally provided variable: `$user-name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableReference {
    /// The variable name, without the `$` sigil.
    pub id: Identifier,
    pub span: Option<Span>,
}

simple_node_impl!(VariableReference);

/// A reference to another message, optionally to one of its attributes:
/// `menu-save` or `menu-save.title`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageReference {
    pub id: Identifier,
    /// The attribute name after the `.`, if any.
    pub attribute: Option<Identifier>,
    pub span: Option<Span>,
}

simple_node_impl!(MessageReference);

/// A reference to a term, optionally parameterized:
/// `-brand-name` or `-brand-name.gender` or `-brand-name(case: "dative")`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermReference {
    /// The term name, without the `-` sigil.
    pub id: Identifier,
    /// The attribute name after the `.`, if any.
    pub attribute: Option<Identifier>,
    /// The parameterization arguments, if any.
    pub arguments: Option<CallArguments>,
    pub span: Option<Span>,
}

simple_node_impl!(TermReference);

/// A call to a runtime-provided function: `NUMBER($ratio, style: "percent")`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionReference {
    /// The function name; always matches `[A-Z][A-Z0-9_-]*`.
    pub id: Identifier,
    pub arguments: CallArguments,
    pub span: Option<Span>,
}

simple_node_impl!(FunctionReference);
