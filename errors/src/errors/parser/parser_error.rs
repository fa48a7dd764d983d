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

use crate::create_messages;
use std::fmt::Display;

create_messages!(
    /// ParserError type that represents all the errors of the FTL parser.
    ///
    /// The numbering matches the reference Fluent catalog; E0007 and E0023
    /// are gaps there and are gaps here too.
    ParserError,
    code_prefix: "E",

    /// Catch-all for failures with no more precise code. Reserved; the
    /// grammar never produces it.
    @formatted
    generic {
        args: (),
        msg: format!("Generic error"),
        code: 1,
    }

    /// An entry must begin with a letter, `-`, or `#`.
    @formatted
    expected_entry_start {
        args: (),
        msg: format!("Expected an entry start"),
        code: 2,
    }

    /// A required token is missing.
    @formatted
    expected_token {
        args: (token: impl Display),
        msg: format!("Expected token: {token}"),
        code: 3,
    }

    /// A character from a required class is missing.
    @formatted
    expected_char_range {
        args: (range: impl Display),
        msg: format!("Expected a character from range: {range}"),
        code: 4,
    }

    /// A message carries neither a value nor attributes.
    @formatted
    expected_message_value_or_attributes {
        args: (id: impl Display),
        msg: format!("Expected message \"{id}\" to have a value or attributes"),
        code: 5,
    }

    /// A term carries no value.
    @formatted
    expected_term_value {
        args: (id: impl Display),
        msg: format!("Expected term \"-{id}\" to have a value"),
        code: 6,
    }

    /// A call follows an identifier which is not function-shaped.
    @formatted
    invalid_callee {
        args: (),
        msg: format!("The callee has to be an upper-case identifier or a term"),
        code: 8,
    }

    /// A `:` follows something other than a plain identifier.
    @formatted
    invalid_argument_name {
        args: (),
        msg: format!("The argument name has to be a simple identifier"),
        code: 9,
    }

    /// A select expression has no `*`-marked variant.
    @formatted
    missing_default_variant {
        args: (),
        msg: format!("Expected one of the variants to be marked as default (*)"),
        code: 10,
    }

    /// A select expression has no variants at all.
    @formatted
    missing_variants {
        args: (),
        msg: format!("Expected at least one variant after \"->\""),
        code: 11,
    }

    /// A message, term, attribute, or variant is missing its value pattern.
    @formatted
    expected_value {
        args: (),
        msg: format!("Expected value"),
        code: 12,
    }

    /// A variant key is missing inside `[ ]`.
    @formatted
    expected_variant_key {
        args: (),
        msg: format!("Expected variant key"),
        code: 13,
    }

    /// A named argument value must be a string or number literal.
    @formatted
    expected_literal {
        args: (),
        msg: format!("Expected literal"),
        code: 14,
    }

    /// More than one variant is marked as default.
    @formatted
    multiple_default_variants {
        args: (),
        msg: format!("Only one variant can be marked as default (*)"),
        code: 15,
    }

    @formatted
    message_reference_as_selector {
        args: (),
        msg: format!("Message references cannot be used as selectors"),
        code: 16,
    }

    @formatted
    term_reference_as_selector {
        args: (),
        msg: format!("Terms cannot be used as selectors"),
        code: 17,
    }

    @formatted
    message_attribute_as_selector {
        args: (),
        msg: format!("Attributes of messages cannot be used as selectors"),
        code: 18,
    }

    @formatted
    term_attribute_as_placeable {
        args: (),
        msg: format!("Attributes of terms cannot be used as placeables"),
        code: 19,
    }

    /// A string literal runs into a line end or EOF before its closing quote.
    @formatted
    unterminated_string_literal {
        args: (),
        msg: format!("Unterminated string expression"),
        code: 20,
    }

    @formatted
    positional_argument_after_named {
        args: (),
        msg: format!("Positional arguments must not follow named arguments"),
        code: 21,
    }

    @formatted
    duplicated_named_argument {
        args: (),
        msg: format!("Named arguments must be unique"),
        code: 22,
    }

    /// Reserved for reference-catalog compatibility; the grammar of this
    /// subset never produces it.
    @formatted
    message_variant_access {
        args: (),
        msg: format!("Cannot access variants of a message"),
        code: 24,
    }

    /// A backslash starts a sequence other than `\\`, `\"`, `\u`, or `\U`.
    @formatted
    unknown_escape_sequence {
        args: (sequence: impl Display),
        msg: format!("Unknown escape sequence: \\{sequence}"),
        code: 25,
    }

    /// A `\u`/`\U` escape is cut short of its hex digits.
    @formatted
    invalid_unicode_escape_sequence {
        args: (sequence: impl Display),
        msg: format!("Invalid Unicode escape sequence: {sequence}"),
        code: 26,
    }

    /// A `}` appears in pattern text outside any placeable.
    @formatted
    unbalanced_closing_brace {
        args: (),
        msg: format!("Unbalanced closing brace in TextElement"),
        code: 27,
    }

    @formatted
    expected_expression {
        args: (),
        msg: format!("Expected an expression"),
        code: 28,
    }

    /// Placeables cannot select; only literals, variables, functions, and
    /// term attributes can.
    @formatted
    expected_simple_expression_as_selector {
        args: (),
        msg: format!("Expected simple expression as selector"),
        code: 29,
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_format() {
        assert_eq!(ParserError::format_code(3), "E0003");
        assert_eq!(ParserError::format_code(28), "E0028");
    }

    #[test]
    fn test_formatted_arguments() {
        let error = ParserError::expected_token('}');
        assert_eq!(error.code, "E0003");
        assert_eq!(error.args, vec!["}".to_string()]);
        assert_eq!(error.message, "Expected token: }");
    }

    #[test]
    fn test_quoted_identifier_in_message() {
        let error = ParserError::expected_message_value_or_attributes("hello");
        assert_eq!(error.code, "E0005");
        assert_eq!(error.message, "Expected message \"hello\" to have a value or attributes");

        let error = ParserError::expected_term_value("brand");
        assert_eq!(error.message, "Expected term \"-brand\" to have a value");
    }

    #[test]
    fn test_escape_sequence_rendering() {
        let error = ParserError::unknown_escape_sequence('x');
        assert_eq!(error.message, "Unknown escape sequence: \\x");

        let error = ParserError::invalid_unicode_escape_sequence("\\u000z");
        assert_eq!(error.args, vec!["\\u000z".to_string()]);
        assert_eq!(error.message, "Invalid Unicode escape sequence: \\u000z");
    }

    #[test]
    fn test_display_includes_code() {
        let error = ParserError::expected_value();
        assert_eq!(error.to_string(), "[E0012]: Expected value");
    }
}
