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
use ftl_span::BytePos;

/// A pending pattern element plus the bookkeeping dedentation needs.
///
/// `Indent` parts hold the blank lines and leading spaces between two
/// continuation lines; the common-indent suffix is stripped from them
/// before they merge into the surrounding text.
enum PatternPart {
    Text { value: String, start: usize, end: usize },
    Placeable(Placeable),
    Indent { value: String, start: usize, end: usize },
}

impl ParserContext<'_> {
    /// Parses a pattern if one starts here: inline right after the `=`, or
    /// as a block beginning on the next line.
    pub(super) fn maybe_parse_pattern(&mut self) -> Result<Option<Pattern>> {
        self.stream.peek_blank_inline();
        if self.stream.is_value_start() {
            self.stream.skip_to_peek();
            return self.parse_pattern(false).map(Some);
        }

        self.stream.peek_blank_block();
        if self.stream.is_value_continuation() {
            self.stream.skip_to_peek();
            return self.parse_pattern(true).map(Some);
        }

        Ok(None)
    }

    /// Parses pattern elements until a line that is not a valid
    /// continuation.
    fn parse_pattern(&mut self, is_block: bool) -> Result<Pattern> {
        let pattern_start = self.index();
        let mut parts: Vec<PatternPart> = Vec::new();
        // The minimum indent across continuation lines.
        let mut common_indent = usize::MAX;

        if is_block {
            // A block pattern starts on a new line; its first line's indent
            // joins the dedentation measurement.
            let blank_start = self.index();
            let first_indent = self.stream.skip_blank_inline();
            common_indent = first_indent.len();
            parts.push(PatternPart::Indent {
                value: first_indent.to_string(),
                start: blank_start,
                end: self.index(),
            });
        }

        while let Some(ch) = self.stream.current() {
            match ch {
                '\n' => {
                    let blank_start = self.index();
                    let blank_lines = self.stream.peek_blank_block();
                    if !self.stream.is_value_continuation() {
                        self.stream.reset_peek(0);
                        break;
                    }
                    self.stream.skip_to_peek();
                    let indent = self.stream.skip_blank_inline();
                    common_indent = common_indent.min(indent.len());
                    let mut value = blank_lines;
                    value.push_str(indent);
                    parts.push(PatternPart::Indent { value, start: blank_start, end: self.index() });
                }
                '{' => parts.push(PatternPart::Placeable(self.parse_placeable()?)),
                '}' => return Err(ParserError::unbalanced_closing_brace()),
                _ => parts.push(self.parse_text_part()),
            }
        }

        let elements = self.dedent(parts, common_indent);
        Ok(Pattern { elements, span: self.span_from(pattern_start) })
    }

    /// Accumulates raw text up to the next `{`, `}`, or line end.
    fn parse_text_part(&mut self) -> PatternPart {
        let start = self.index();
        let mut value = String::new();
        while let Some(ch) = self.stream.current() {
            if ch == '{' || ch == '}' || ch == '\n' {
                break;
            }
            value.push(ch);
            self.stream.advance();
        }
        PatternPart::Text { value, start, end: self.index() }
    }

    /// Strips the common indent from continuation lines, folds adjacent
    /// text runs into single [`TextElement`]s, and trims trailing
    /// whitespace from the end of the whole pattern. Blank lines inside the
    /// pattern survive; the trim is anchored at end of string, never at
    /// line ends.
    fn dedent(&self, parts: Vec<PatternPart>, common_indent: usize) -> Vec<PatternElement> {
        let mut elements: Vec<PatternElement> = Vec::new();

        for part in parts {
            let (value, start, end) = match part {
                PatternPart::Placeable(placeable) => {
                    elements.push(PatternElement::Placeable(placeable));
                    continue;
                }
                PatternPart::Indent { mut value, start, end } => {
                    // The line's own indent sits at the end of the value.
                    value.truncate(value.len().saturating_sub(common_indent));
                    if value.is_empty() {
                        continue;
                    }
                    (value, start, end)
                }
                PatternPart::Text { value, start, end } => (value, start, end),
            };

            if let Some(PatternElement::TextElement(prev)) = elements.last_mut() {
                prev.value.push_str(&value);
                if let Some(span) = prev.span.as_mut() {
                    span.hi = BytePos::from_usize(end);
                }
                continue;
            }

            elements.push(PatternElement::TextElement(TextElement {
                value,
                span: self.make_span(start, end),
            }));
        }

        if let Some(PatternElement::TextElement(last)) = elements.last_mut() {
            let trimmed = last.value.trim_end_matches([' ', '\n', '\r']).len();
            last.value.truncate(trimmed);
            if last.value.is_empty() {
                elements.pop();
            }
        }

        elements
    }
}
