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

//! One test per catalog code the grammar can emit, checking that the
//! failure surfaces as a Junk annotation rather than a panic or `Err`.

use ftl_ast::{Annotation, Entry};
use ftl_parser::parse_without_spans;

/// Parses `source` and returns the annotation of the first Junk entry.
fn first_annotation(source: &str) -> Annotation {
    let resource = parse_without_spans(source);
    for entry in &resource.body {
        if let Entry::Junk(junk) = entry {
            return junk.annotations[0].clone();
        }
    }
    panic!("expected at least one Junk entry in {source:?}");
}

#[track_caller]
fn assert_error(source: &str, code: &str, args: &[&str]) {
    let annotation = first_annotation(source);
    assert_eq!(annotation.code, code, "in {source:?}: {}", annotation.message);
    assert_eq!(annotation.arguments, args.iter().map(|s| s.to_string()).collect::<Vec<_>>());
}

#[test]
fn test_e0002_expected_entry_start() {
    assert_error("@@@\n", "E0002", &[]);
}

#[test]
fn test_e0003_expected_token() {
    // A missing `=` after the message identifier.
    assert_error("key value\n", "E0003", &["="]);
    // A missing `}` after the placeable expression.
    assert_error("err01 = {1xx}\n", "E0003", &["}"]);
    // Four `#`s: the comment level maxes out at three, then a space is due.
    assert_error("#### too deep\n", "E0003", &[" "]);
}

#[test]
fn test_e0003_expected_line_end() {
    // Variants must start on a new line after the arrow; the argument is
    // the symbol-for-newline.
    assert_error("sel = { $n -> *[other] x }\n", "E0003", &["\u{2424}"]);
}

#[test]
fn test_e0004_expected_char_range() {
    // A variant key must start like an identifier or a number.
    assert_error("sel = { $n ->\n   *[?] x\n}\n", "E0004", &["a-zA-Z"]);
    // A fraction needs digits after the dot.
    assert_error("n = { 2. }\n", "E0004", &["0-9"]);
}

#[test]
fn test_e0005_message_without_value_or_attributes() {
    let annotation = first_annotation("err =\n");
    assert_eq!(annotation.code, "E0005");
    assert_eq!(annotation.arguments, vec!["err".to_string()]);
    assert_eq!(annotation.message, "Expected message \"err\" to have a value or attributes");
}

#[test]
fn test_e0006_term_without_value() {
    let annotation = first_annotation("-term =\n");
    assert_eq!(annotation.code, "E0006");
    assert_eq!(annotation.arguments, vec!["term".to_string()]);
    assert_eq!(annotation.message, "Expected term \"-term\" to have a value");
}

#[test]
fn test_e0008_invalid_callee() {
    assert_error("x = { Foo() }\n", "E0008", &[]);
    assert_error("x = { foo(1) }\n", "E0008", &[]);
}

#[test]
fn test_e0009_invalid_argument_name() {
    assert_error("x = { FOO(bar.baz: 1) }\n", "E0009", &[]);
    assert_error("x = { FOO(\"bar\": 1) }\n", "E0009", &[]);
}

#[test]
fn test_e0010_missing_default_variant() {
    assert_error("sel = { $n ->\n    [one] x\n}\n", "E0010", &[]);
}

#[test]
fn test_e0011_missing_variants() {
    assert_error("sel = { $n ->\n}\n", "E0011", &[]);
}

#[test]
fn test_e0012_expected_value() {
    // An attribute without a value.
    assert_error("key = v\n    .attr =\n", "E0012", &[]);
    // A variant without a value.
    assert_error("sel = { $n ->\n   *[other]\n}\n", "E0012", &[]);
}

#[test]
fn test_e0013_expected_variant_key() {
    assert_error("sel = { $n ->\n   *[", "E0013", &[]);
}

#[test]
fn test_e0014_expected_literal() {
    assert_error("x = { FOO(bar: $var) }\n", "E0014", &[]);
}

#[test]
fn test_e0015_multiple_default_variants() {
    assert_error("sel = { $n ->\n   *[one] a\n   *[other] b\n}\n", "E0015", &[]);
}

#[test]
fn test_e0016_message_reference_as_selector() {
    assert_error("sel = { msg ->\n   *[other] x\n}\n", "E0016", &[]);
}

#[test]
fn test_e0017_term_reference_as_selector() {
    assert_error("sel = { -term ->\n   *[other] x\n}\n", "E0017", &[]);
}

#[test]
fn test_e0018_message_attribute_as_selector() {
    assert_error("sel = { msg.attr ->\n   *[other] x\n}\n", "E0018", &[]);
}

#[test]
fn test_e0019_term_attribute_as_placeable() {
    assert_error("x = { -term.attr }\n", "E0019", &[]);
}

#[test]
fn test_e0020_unterminated_string() {
    assert_error("x = { \"no end\n}\n", "E0020", &[]);
}

#[test]
fn test_e0021_positional_after_named() {
    assert_error("x = { FOO(a: 1, $x) }\n", "E0021", &[]);
}

#[test]
fn test_e0022_duplicated_named_argument() {
    assert_error("x = { FOO(a: 1, a: 2) }\n", "E0022", &[]);
}

#[test]
fn test_e0025_unknown_escape_sequence() {
    let annotation = first_annotation("x = { \"\\x\" }\n");
    assert_eq!(annotation.code, "E0025");
    assert_eq!(annotation.arguments, vec!["x".to_string()]);
    assert_eq!(annotation.message, "Unknown escape sequence: \\x");
}

#[test]
fn test_e0026_invalid_unicode_escape() {
    let annotation = first_annotation("x = { \"\\u000z\" }\n");
    assert_eq!(annotation.code, "E0026");
    assert_eq!(annotation.arguments, vec!["\\u000z".to_string()]);
    assert_eq!(annotation.message, "Invalid Unicode escape sequence: \\u000z");
}

#[test]
fn test_e0027_unbalanced_closing_brace() {
    assert_error("x = }\n", "E0027", &[]);
}

#[test]
fn test_e0028_expected_expression() {
    assert_error("x = {}\n", "E0028", &[]);
}

#[test]
fn test_e0029_placeable_as_selector() {
    assert_error("sel = { {$n} ->\n   *[other] x\n}\n", "E0029", &[]);
}

#[test]
fn test_single_annotation_per_junk() {
    // Only the first failure of an entry is recorded; the parser resyncs
    // and reports later failures on later junk entries.
    let resource = parse_without_spans("a = {\nb = {\nc = fine\n");
    let junk_count = resource
        .body
        .iter()
        .filter(|entry| match entry {
            Entry::Junk(junk) => {
                assert_eq!(junk.annotations.len(), 1);
                true
            }
            _ => false,
        })
        .count();
    assert_eq!(junk_count, 2);
    assert!(matches!(&resource.body[2], Entry::Message(m) if m.id.name == "c"));
}

#[test]
fn test_dotted_continuation_parses_as_attribute_start() {
    // A dotted line below a value is read as an attribute, not as pattern
    // text; with no `=` following it, the whole entry becomes junk.
    assert_error("key = value\n    .dot-line no equals\n", "E0003", &["="]);
}
