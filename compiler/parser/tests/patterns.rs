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

//! Multiline pattern collection: indentation, dedentation, blank-line
//! preservation, and the end-of-string-anchored trailing trim.

use ftl_ast::{Entry, PatternElement};
use ftl_parser::parse_without_spans;

/// Parses a single message and returns its value's text, with placeables
/// rendered as `{..}`.
fn value_text(source: &str) -> String {
    let resource = parse_without_spans(source);
    match &resource.body[0] {
        Entry::Message(message) => {
            let value = message.value.as_ref().unwrap_or_else(|| panic!("no value in {source:?}"));
            value
                .elements
                .iter()
                .map(|element| match element {
                    PatternElement::TextElement(text) => text.value.as_str(),
                    PatternElement::Placeable(_) => "{..}",
                })
                .collect()
        }
        entry => panic!("expected Message, got {entry:?}"),
    }
}

#[test]
fn test_multiline_preserves_interior_blank_line() {
    assert_eq!(value_text("key =\n    Value 03\n\n    Continued\n"), "Value 03\n\nContinued");
}

#[test]
fn test_common_indent_is_the_minimum() {
    assert_eq!(
        value_text("key =\n    aaa\n          bbb\n  ccc\n"),
        "  aaa\n        bbb\nccc"
    );
}

#[test]
fn test_inline_start_with_continuation() {
    assert_eq!(value_text("key = first\n    second\n"), "first\nsecond");
}

#[test]
fn test_trailing_spaces_trimmed() {
    assert_eq!(value_text("key = value   \n"), "value");
}

#[test]
fn test_trailing_blank_lines_trimmed() {
    let source = "key =\n    value\n\n\nnext = x\n";
    assert_eq!(value_text(source), "value");

    // The blank lines separate the entries; `next` still parses.
    let resource = parse_without_spans(source);
    assert_eq!(resource.body.len(), 2);
    assert!(matches!(&resource.body[1], Entry::Message(m) if m.id.name == "next"));
}

#[test]
fn test_trailing_trim_is_anchored_at_end_of_string() {
    // The run of spaces on the blank line sits in the middle of the
    // pattern; only the very end of the concatenated text is trimmed.
    assert_eq!(value_text("key =\n    a\n   \n    b   \n"), "a\n\nb");
}

#[test]
fn test_tab_is_ordinary_text() {
    assert_eq!(value_text("key = a\tb\n"), "a\tb");
    // Tabs do not count as blank; they survive the trailing trim.
    assert_eq!(value_text("key = x\t\n"), "x\t");
}

#[test]
fn test_unindented_brace_continues_pattern() {
    assert_eq!(value_text("key =\n{ $x }\n"), "{..}");
}

#[test]
fn test_indented_placeable_strips_common_indent() {
    assert_eq!(value_text("key =\n    text\n  { $x }\n"), "  text\n{..}");
}

#[test]
fn test_special_line_starts_end_the_pattern() {
    // An indented `[` line is not a continuation: the pattern ends at the
    // line break and the bracket line becomes junk of its own.
    for source in ["key = value\n    [bracket\n", "key = value\n    *star\n", "key = value\n    }brace\n"] {
        let resource = parse_without_spans(source);
        assert_eq!(resource.body.len(), 2, "{source:?}");
        assert!(matches!(&resource.body[0], Entry::Message(m) if m.id.name == "key"), "{source:?}");
        assert!(matches!(&resource.body[1], Entry::Junk(_)), "{source:?}");
    }
}

#[test]
fn test_crlf_multiline_pattern() {
    assert_eq!(value_text("key =\r\n    Line1\r\n    Line2\r\n"), "Line1\nLine2");
}

#[test]
fn test_text_and_placeables_fold_into_alternating_elements() {
    let resource = parse_without_spans("key = a { $x } b { $y }\n");
    match &resource.body[0] {
        Entry::Message(message) => {
            let elements = &message.value.as_ref().unwrap().elements;
            assert_eq!(elements.len(), 4);
            assert!(matches!(&elements[0], PatternElement::TextElement(t) if t.value == "a "));
            assert!(matches!(&elements[1], PatternElement::Placeable(_)));
            assert!(matches!(&elements[2], PatternElement::TextElement(t) if t.value == " b "));
            assert!(matches!(&elements[3], PatternElement::Placeable(_)));
        }
        entry => panic!("expected Message, got {entry:?}"),
    }
}
