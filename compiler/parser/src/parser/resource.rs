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

use super::*;

use ftl_ast::*;
use ftl_errors::{ParserError, Result};
use ftl_span::Span;

impl ParserContext<'_> {
    /// Parses a full resource, converting unparseable regions into [`Junk`]
    /// entries.
    pub(crate) fn parse_resource(&mut self) -> Resource {
        let resource_start = self.index();
        self.stream.skip_blank_block();

        let mut body = Vec::new();
        let mut last_comment: Option<Comment> = None;

        while self.stream.current().is_some() {
            let entry = self.parse_entry_or_junk();
            let blank_lines = self.stream.skip_blank_block();

            // A level-0 comment may belong to the message or term directly
            // below it. Stash it until the next entry is known: junk,
            // blank-line separation, and EOF all leave it standalone.
            let entry = match entry {
                Entry::Comment(comment)
                    if blank_lines.is_empty() && self.stream.current().is_some() =>
                {
                    last_comment = Some(comment);
                    continue;
                }
                entry => entry,
            };

            let entry = match (last_comment.take(), entry) {
                (Some(comment), Entry::Message(mut message)) => {
                    Self::attach_comment(&mut message.span, &comment);
                    message.comment = Some(comment);
                    Entry::Message(message)
                }
                (Some(comment), Entry::Term(mut term)) => {
                    Self::attach_comment(&mut term.span, &comment);
                    term.comment = Some(comment);
                    Entry::Term(term)
                }
                (Some(comment), entry) => {
                    body.push(Entry::Comment(comment));
                    entry
                }
                (None, entry) => entry,
            };

            body.push(entry);
        }

        Resource { body, span: self.span_from(resource_start) }
    }

    /// Extends an entry span backwards to cover the comment attached to it.
    fn attach_comment(entry_span: &mut Option<Span>, comment: &Comment) {
        if let (Some(span), Some(comment_span)) = (entry_span.as_mut(), comment.span) {
            span.lo = comment_span.lo;
        }
    }

    /// Parses one entry, converting any parse failure into a [`Junk`] entry
    /// spanning from the entry start to the next entry-start line.
    fn parse_entry_or_junk(&mut self) -> Entry {
        let entry_start = self.index();

        let parsed = match self.parse_entry() {
            Ok(entry) => self.stream.expect_line_end().map(|()| entry),
            Err(error) => Err(error),
        };

        match parsed {
            Ok(entry) => entry,
            Err(error) => {
                let error_index = self.index();
                self.stream.skip_to_next_entry_start(entry_start);
                let next_entry_start = self.index();
                tracing::trace!(code = %error.code, offset = next_entry_start, "recovered from parse error");

                // The error position must fall inside the junk span.
                let error_index = error_index.min(next_entry_start);
                let annotation = Annotation {
                    span: self.make_span(error_index, error_index),
                    ..Annotation::from(error)
                };

                Entry::Junk(Junk {
                    content: self.stream.source()[entry_start..next_entry_start].to_string(),
                    annotations: vec![annotation],
                    span: self.make_span(entry_start, next_entry_start),
                })
            }
        }
    }

    /// Dispatches on the first character of an entry.
    fn parse_entry(&mut self) -> Result<Entry> {
        match self.stream.current() {
            Some('#') => self.parse_comment(),
            Some('-') => self.parse_term().map(Entry::Term),
            _ if self.stream.is_identifier_start() => self.parse_message().map(Entry::Message),
            _ => Err(ParserError::expected_entry_start()),
        }
    }

    /// Parses a `#`, `##`, or `###` comment, consuming continuation lines
    /// of the same level.
    fn parse_comment(&mut self) -> Result<Entry> {
        let start = self.index();
        let mut level: Option<usize> = None;
        let mut content = String::new();

        loop {
            // The first line may open with up to three `#`s and fixes the
            // level; continuation lines carry exactly `level + 1` of them.
            let limit = level.map_or(3, |level| level + 1);
            let mut count = 0;
            while self.stream.current() == Some('#') && count < limit {
                self.stream.advance();
                count += 1;
            }
            if level.is_none() {
                level = Some(count.saturating_sub(1));
            }

            if self.stream.current() != Some('\n') {
                self.stream.expect_char(' ')?;
                while let Some(ch) = self.stream.take_char(|ch| ch != '\n') {
                    content.push(ch);
                }
            }

            if self.stream.is_next_line_comment(level.unwrap_or(0)) {
                content.push('\n');
                self.stream.advance();
            } else {
                break;
            }
        }

        let span = self.span_from(start);
        let entry = match level {
            Some(0) => Entry::Comment(Comment { content, span }),
            Some(1) => Entry::GroupComment(GroupComment { content, span }),
            _ => Entry::ResourceComment(ResourceComment { content, span }),
        };
        Ok(entry)
    }

    /// Returns a [`Message`] AST node if the next lines represent a message.
    fn parse_message(&mut self) -> Result<Message> {
        let start = self.index();
        let id = self.parse_identifier()?;

        self.stream.skip_blank_inline();
        self.stream.expect_char('=')?;

        let value = self.maybe_parse_pattern()?;
        let attributes = self.parse_attributes()?;

        if value.is_none() && attributes.is_empty() {
            return Err(ParserError::expected_message_value_or_attributes(&id.name));
        }

        Ok(Message { id, value, attributes, comment: None, span: self.span_from(start) })
    }

    /// Returns a [`Term`] AST node if the next lines represent a term.
    fn parse_term(&mut self) -> Result<Term> {
        let start = self.index();
        self.stream.expect_char('-')?;
        let id = self.parse_identifier()?;

        self.stream.skip_blank_inline();
        self.stream.expect_char('=')?;

        let value = match self.maybe_parse_pattern()? {
            Some(value) => value,
            None => return Err(ParserError::expected_term_value(&id.name)),
        };
        let attributes = self.parse_attributes()?;

        Ok(Term { id, value, attributes, comment: None, span: self.span_from(start) })
    }

    /// Parses the attributes following a message or term value, one per
    /// line.
    fn parse_attributes(&mut self) -> Result<Vec<Attribute>> {
        let mut attributes = Vec::new();

        self.stream.peek_blank();
        while self.stream.is_attribute_start() {
            self.stream.skip_to_peek();
            attributes.push(self.parse_attribute()?);
            self.stream.peek_blank();
        }
        self.stream.reset_peek(0);

        Ok(attributes)
    }

    /// Returns an [`Attribute`] AST node: `.id = value`.
    fn parse_attribute(&mut self) -> Result<Attribute> {
        let start = self.index();
        self.stream.expect_char('.')?;
        let id = self.parse_identifier()?;

        self.stream.skip_blank_inline();
        self.stream.expect_char('=')?;

        let value = self.maybe_parse_pattern()?.ok_or_else(ParserError::expected_value)?;

        Ok(Attribute { id, value, span: self.span_from(start) })
    }

    /// Returns an [`Identifier`] AST node: `[A-Za-z][A-Za-z0-9_-]*`.
    pub(super) fn parse_identifier(&mut self) -> Result<Identifier> {
        let start = self.index();
        let mut name = String::new();
        name.push(self.stream.take_id_start()?);
        while let Some(ch) = self.stream.take_id_char() {
            name.push(ch);
        }
        Ok(Identifier { name, span: self.span_from(start) })
    }
}
