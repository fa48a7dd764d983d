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

use crate::{simple_node_impl, Expression, Identifier, Literal};
use ftl_span::Span;

/// The arguments of a function reference or parameterized term reference.
///
/// Positional arguments always precede named ones, and named-argument names
/// are unique; the parser rejects anything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallArguments {
    /// The positional arguments, in source order.
    pub positional: Vec<Expression>,
    /// The named arguments, in source order.
    pub named: Vec<NamedArgument>,
    pub span: Option<Span>,
}

simple_node_impl!(CallArguments);

/// A named argument: `style: "percent"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedArgument {
    /// The argument name.
    pub name: Identifier,
    /// The argument value; only literals are allowed here.
    pub value: Literal,
    pub span: Option<Span>,
}

simple_node_impl!(NamedArgument);
