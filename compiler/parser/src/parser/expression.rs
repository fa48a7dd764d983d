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
use crate::stream::ParserStream;

use ftl_ast::*;
use ftl_errors::{ParserError, Result};

use indexmap::IndexSet;

/// One parsed argument of a call, before the positional/named split.
enum CallArgument {
    Positional(Expression),
    Named(NamedArgument),
}

/// A callee has to look like `[A-Z][A-Z0-9_-]*`.
fn is_callee_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|ch| ch.is_ascii_uppercase())
        && chars.all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_' || ch == '-')
}

impl ParserContext<'_> {
    /// Returns a [`Placeable`] AST node: `{ expression }`.
    pub(super) fn parse_placeable(&mut self) -> Result<Placeable> {
        let start = self.index();
        self.stream.expect_char('{')?;
        self.stream.skip_blank();
        let expression = self.parse_expression()?;
        self.stream.expect_char('}')?;
        Ok(Placeable { expression, span: self.span_from(start) })
    }

    /// Returns an [`Expression`] AST node, promoting the parsed expression
    /// to a select expression when an `->` arrow follows it.
    fn parse_expression(&mut self) -> Result<Expression> {
        let start = self.index();
        let selector = self.parse_inline_expression()?;
        self.stream.skip_blank();

        if self.stream.current() == Some('-') {
            if self.stream.peek() != Some('>') {
                self.stream.reset_peek(0);
                return Ok(selector);
            }

            // Only literals, variables, functions, and term attributes are
            // valid selectors.
            match &selector {
                Expression::MessageReference(reference) => {
                    return Err(match reference.attribute {
                        None => ParserError::message_reference_as_selector(),
                        Some(_) => ParserError::message_attribute_as_selector(),
                    });
                }
                Expression::TermReference(reference) if reference.attribute.is_none() => {
                    return Err(ParserError::term_reference_as_selector());
                }
                Expression::Placeable(_) => {
                    return Err(ParserError::expected_simple_expression_as_selector());
                }
                _ => {}
            }

            // Consume the `->`; the variants start on the next line.
            self.stream.advance();
            self.stream.advance();
            self.stream.skip_blank_inline();
            self.stream.expect_line_end()?;

            let variants = self.parse_variants()?;
            return Ok(Expression::SelectExpression(SelectExpression {
                selector: Box::new(selector),
                variants,
                span: self.span_from(start),
            }));
        }

        if let Expression::TermReference(reference) = &selector {
            if reference.attribute.is_some() {
                return Err(ParserError::term_attribute_as_placeable());
            }
        }

        Ok(selector)
    }

    /// Dispatches an inline expression on its first character.
    fn parse_inline_expression(&mut self) -> Result<Expression> {
        let start = self.index();

        if self.stream.current() == Some('{') {
            return self.parse_placeable().map(|placeable| Expression::Placeable(Box::new(placeable)));
        }
        if self.stream.is_number_start() {
            return self.parse_number_literal().map(Expression::NumberLiteral);
        }

        match self.stream.current() {
            Some('"') => self.parse_string_literal().map(Expression::StringLiteral),
            Some('$') => {
                self.stream.advance();
                let id = self.parse_identifier()?;
                Ok(Expression::VariableReference(VariableReference { id, span: self.span_from(start) }))
            }
            Some('-') => {
                self.stream.advance();
                let id = self.parse_identifier()?;

                let attribute = if self.stream.current() == Some('.') {
                    self.stream.advance();
                    Some(self.parse_identifier()?)
                } else {
                    None
                };

                self.stream.peek_blank_inline();
                let arguments = if self.stream.current_peek() == Some('(') {
                    self.stream.skip_to_peek();
                    Some(self.parse_call_arguments()?)
                } else {
                    None
                };

                Ok(Expression::TermReference(TermReference {
                    id,
                    attribute,
                    arguments,
                    span: self.span_from(start),
                }))
            }
            Some(ch) if ParserStream::is_char_id_start(ch) => {
                let id = self.parse_identifier()?;

                self.stream.peek_blank_inline();
                if self.stream.current_peek() == Some('(') {
                    // Only now that a call follows does the callee shape
                    // matter; all-caps identifiers without parentheses stay
                    // plain message references.
                    if !is_callee_name(&id.name) {
                        return Err(ParserError::invalid_callee());
                    }
                    self.stream.skip_to_peek();
                    let arguments = self.parse_call_arguments()?;
                    return Ok(Expression::FunctionReference(FunctionReference {
                        id,
                        arguments,
                        span: self.span_from(start),
                    }));
                }

                let attribute = if self.stream.current() == Some('.') {
                    self.stream.advance();
                    Some(self.parse_identifier()?)
                } else {
                    None
                };

                Ok(Expression::MessageReference(MessageReference {
                    id,
                    attribute,
                    span: self.span_from(start),
                }))
            }
            _ => Err(ParserError::expected_expression()),
        }
    }

    /// Parses the variant list of a select expression.
    fn parse_variants(&mut self) -> Result<Vec<Variant>> {
        let mut variants = Vec::new();
        let mut has_default = false;

        self.stream.skip_blank();
        while self.stream.is_variant_start() {
            let variant = self.parse_variant(has_default)?;
            has_default |= variant.default;
            variants.push(variant);
            self.stream.expect_line_end()?;
            self.stream.skip_blank();
        }

        if variants.is_empty() {
            return Err(ParserError::missing_variants());
        }
        if !has_default {
            return Err(ParserError::missing_default_variant());
        }

        Ok(variants)
    }

    /// Returns a [`Variant`] AST node: `[key] value` or `*[key] value`.
    fn parse_variant(&mut self, has_default: bool) -> Result<Variant> {
        let start = self.index();

        let mut default = false;
        if self.stream.current() == Some('*') {
            if has_default {
                return Err(ParserError::multiple_default_variants());
            }
            self.stream.advance();
            default = true;
        }

        self.stream.expect_char('[')?;
        self.stream.skip_blank();
        let key = self.parse_variant_key()?;
        self.stream.skip_blank();
        self.stream.expect_char(']')?;

        let value = self.maybe_parse_pattern()?.ok_or_else(ParserError::expected_value)?;

        Ok(Variant { key, value, default, span: self.span_from(start) })
    }

    /// Returns a [`VariantKey`]: an identifier or a number literal.
    fn parse_variant_key(&mut self) -> Result<VariantKey> {
        match self.stream.current() {
            None => Err(ParserError::expected_variant_key()),
            Some(ch) if ch.is_ascii_digit() || ch == '-' => {
                self.parse_number_literal().map(VariantKey::NumberLiteral)
            }
            Some(_) => self.parse_identifier().map(VariantKey::Identifier),
        }
    }

    /// Returns a [`CallArguments`] AST node: a parenthesized list with
    /// positional arguments first, then named ones.
    fn parse_call_arguments(&mut self) -> Result<CallArguments> {
        let start = self.index();
        let mut positional = Vec::new();
        let mut named = Vec::new();
        let mut argument_names: IndexSet<String> = IndexSet::new();

        self.stream.expect_char('(')?;
        self.stream.skip_blank();

        loop {
            if self.stream.current() == Some(')') {
                break;
            }

            match self.parse_call_argument()? {
                CallArgument::Named(argument) => {
                    if !argument_names.insert(argument.name.name.clone()) {
                        return Err(ParserError::duplicated_named_argument());
                    }
                    named.push(argument);
                }
                CallArgument::Positional(expression) => {
                    if !argument_names.is_empty() {
                        return Err(ParserError::positional_argument_after_named());
                    }
                    positional.push(expression);
                }
            }

            self.stream.skip_blank();
            if self.stream.current() == Some(',') {
                self.stream.advance();
                self.stream.skip_blank();
                continue;
            }
            break;
        }

        self.stream.expect_char(')')?;
        Ok(CallArguments { positional, named, span: self.span_from(start) })
    }

    /// Parses one call argument; a `:` after a plain identifier makes it a
    /// named argument.
    fn parse_call_argument(&mut self) -> Result<CallArgument> {
        let start = self.index();
        let expression = self.parse_inline_expression()?;

        self.stream.skip_blank();
        if self.stream.current() != Some(':') {
            return Ok(CallArgument::Positional(expression));
        }

        match expression {
            Expression::MessageReference(reference) if reference.attribute.is_none() => {
                self.stream.advance();
                self.stream.skip_blank();
                let value = self.parse_literal()?;
                Ok(CallArgument::Named(NamedArgument {
                    name: reference.id,
                    value,
                    span: self.span_from(start),
                }))
            }
            _ => Err(ParserError::invalid_argument_name()),
        }
    }

    /// Returns a [`Literal`]: a string or number literal, nothing else.
    fn parse_literal(&mut self) -> Result<Literal> {
        if self.stream.is_number_start() {
            return self.parse_number_literal().map(Literal::Number);
        }
        if self.stream.current() == Some('"') {
            return self.parse_string_literal().map(Literal::String);
        }
        Err(ParserError::expected_literal())
    }

    /// Returns a [`NumberLiteral`] AST node, keeping the lexical form.
    fn parse_number_literal(&mut self) -> Result<NumberLiteral> {
        let start = self.index();
        let mut value = String::new();

        if self.stream.current() == Some('-') {
            self.stream.advance();
            value.push('-');
        }
        self.parse_digits(&mut value)?;

        if self.stream.current() == Some('.') {
            self.stream.advance();
            value.push('.');
            self.parse_digits(&mut value)?;
        }

        Ok(NumberLiteral { value, span: self.span_from(start) })
    }

    /// Appends one or more digits to `value`, or fails with `E0004`.
    fn parse_digits(&mut self, value: &mut String) -> Result<()> {
        let mut any = false;
        while let Some(ch) = self.stream.take_digit() {
            value.push(ch);
            any = true;
        }
        if !any {
            return Err(ParserError::expected_char_range("0-9"));
        }
        Ok(())
    }

    /// Returns a [`StringLiteral`] AST node with escape sequences expanded.
    fn parse_string_literal(&mut self) -> Result<StringLiteral> {
        let start = self.index();
        self.stream.expect_char('"')?;

        let mut value = String::new();
        while let Some(ch) = self.stream.take_char(|ch| ch != '"' && ch != '\n') {
            if ch == '\\' {
                self.parse_escape_sequence(&mut value)?;
            } else {
                value.push(ch);
            }
        }

        if self.stream.current() == Some('\n') {
            return Err(ParserError::unterminated_string_literal());
        }
        self.stream.expect_char('"')?;

        Ok(StringLiteral { value, span: self.span_from(start) })
    }

    /// Expands one escape sequence into `value`: `\\`, `\"`, `\uHHHH`, or
    /// `\UHHHHHH`.
    fn parse_escape_sequence(&mut self, value: &mut String) -> Result<()> {
        match self.stream.current() {
            Some(ch @ ('\\' | '"')) => {
                self.stream.advance();
                value.push(ch);
                Ok(())
            }
            Some('u') => {
                self.stream.advance();
                self.parse_unicode_escape(value, 'u', 4)
            }
            Some('U') => {
                self.stream.advance();
                self.parse_unicode_escape(value, 'U', 6)
            }
            Some(ch) => Err(ParserError::unknown_escape_sequence(ch)),
            None => Err(ParserError::unterminated_string_literal()),
        }
    }

    /// Expands a `\u`/`\U` escape of exactly `digits` hex digits.
    fn parse_unicode_escape(&mut self, value: &mut String, u: char, digits: usize) -> Result<()> {
        let mut sequence = String::new();
        for _ in 0..digits {
            match self.stream.take_hex_digit() {
                Some(ch) => sequence.push(ch),
                None => {
                    let mut invalid = format!("\\{u}{sequence}");
                    if let Some(ch) = self.stream.current() {
                        invalid.push(ch);
                    }
                    return Err(ParserError::invalid_unicode_escape_sequence(invalid));
                }
            }
        }

        let code_point = u32::from_str_radix(&sequence, 16)
            .map_err(|_| ParserError::invalid_unicode_escape_sequence(format!("\\{u}{sequence}")))?;
        // Unpaired surrogates and out-of-range code points become U+FFFD.
        value.push(char::from_u32(code_point).unwrap_or('\u{FFFD}'));
        Ok(())
    }
}
