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

use crate::{simple_node_impl, Comment, GroupComment, Junk, Message, Node, ResourceComment, Term};
use ftl_span::Span;

/// A parsed FTL file: an ordered list of entries in source order.
///
/// Parsing never fails; regions which could not be parsed appear in the
/// body as [`Junk`] entries carrying their error annotations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resource {
    /// The entries, in the order they appear in the source.
    pub body: Vec<Entry>,
    /// The span covering the whole source text.
    pub span: Option<Span>,
}

simple_node_impl!(Resource);

impl Resource {
    /// Serializes the resource into a JSON string in the reference schema.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Converts the resource into a JSON value in the reference schema.
    pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// A top-level entry of a resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// A `key = value` message.
    Message(Message),
    /// A `-key = value` term.
    Term(Term),
    /// A standalone `#` comment.
    Comment(Comment),
    /// A `##` group comment.
    GroupComment(GroupComment),
    /// A `###` resource comment.
    ResourceComment(ResourceComment),
    /// An unparseable region plus the error that caused it.
    Junk(Junk),
}

impl Node for Entry {
    fn span(&self) -> Option<Span> {
        match self {
            Entry::Message(n) => n.span(),
            Entry::Term(n) => n.span(),
            Entry::Comment(n) => n.span(),
            Entry::GroupComment(n) => n.span(),
            Entry::ResourceComment(n) => n.span(),
            Entry::Junk(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        match self {
            Entry::Message(n) => n.set_span(span),
            Entry::Term(n) => n.set_span(span),
            Entry::Comment(n) => n.set_span(span),
            Entry::GroupComment(n) => n.set_span(span),
            Entry::ResourceComment(n) => n.set_span(span),
            Entry::Junk(n) => n.set_span(span),
        }
    }
}
