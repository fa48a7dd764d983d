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

//! Serialization of the AST into the reference Fluent schema.
//!
//! Every node serializes as a map with a leading `"type"` field naming the
//! node kind. Nullable fields (`value`, `comment`, `attribute`,
//! `arguments`, `span`) are omitted entirely when absent, so trees parsed
//! with and without span attachment differ only in `"span"` keys. These
//! impls are written by hand: serde's derives cannot add the synthetic
//! `"type"` field to a struct.

use crate::*;

use serde::ser::{Serialize, SerializeStruct, Serializer};

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("Resource", len)?;
        state.serialize_field("type", "Resource")?;
        state.serialize_field("body", &self.body)?;
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Entry::Message(n) => n.serialize(serializer),
            Entry::Term(n) => n.serialize(serializer),
            Entry::Comment(n) => n.serialize(serializer),
            Entry::GroupComment(n) => n.serialize(serializer),
            Entry::ResourceComment(n) => n.serialize(serializer),
            Entry::Junk(n) => n.serialize(serializer),
        }
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 3
            + self.value.is_some() as usize
            + self.comment.is_some() as usize
            + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("Message", len)?;
        state.serialize_field("type", "Message")?;
        state.serialize_field("id", &self.id)?;
        if let Some(value) = &self.value {
            state.serialize_field("value", value)?;
        }
        state.serialize_field("attributes", &self.attributes)?;
        if let Some(comment) = &self.comment {
            state.serialize_field("comment", comment)?;
        }
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 4 + self.comment.is_some() as usize + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("Term", len)?;
        state.serialize_field("type", "Term")?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("attributes", &self.attributes)?;
        if let Some(comment) = &self.comment {
            state.serialize_field("comment", comment)?;
        }
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 3 + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("Attribute", len)?;
        state.serialize_field("type", "Attribute")?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("value", &self.value)?;
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

/// The three comment kinds share their shape and differ only in type tag.
macro_rules! serialize_comment_impl {
    ($ty:ident) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let len = 2 + self.span.is_some() as usize;
                let mut state = serializer.serialize_struct(stringify!($ty), len)?;
                state.serialize_field("type", stringify!($ty))?;
                state.serialize_field("content", &self.content)?;
                if let Some(span) = &self.span {
                    state.serialize_field("span", span)?;
                }
                state.end()
            }
        }
    };
}

serialize_comment_impl!(Comment);
serialize_comment_impl!(GroupComment);
serialize_comment_impl!(ResourceComment);

impl Serialize for Junk {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 3 + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("Junk", len)?;
        state.serialize_field("type", "Junk")?;
        state.serialize_field("annotations", &self.annotations)?;
        state.serialize_field("content", &self.content)?;
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for Annotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 4 + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("Annotation", len)?;
        state.serialize_field("type", "Annotation")?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("arguments", &self.arguments)?;
        state.serialize_field("message", &self.message)?;
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("Pattern", len)?;
        state.serialize_field("type", "Pattern")?;
        state.serialize_field("elements", &self.elements)?;
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for PatternElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PatternElement::TextElement(n) => n.serialize(serializer),
            PatternElement::Placeable(n) => n.serialize(serializer),
        }
    }
}

impl Serialize for TextElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("TextElement", len)?;
        state.serialize_field("type", "TextElement")?;
        state.serialize_field("value", &self.value)?;
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for Placeable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("Placeable", len)?;
        state.serialize_field("type", "Placeable")?;
        state.serialize_field("expression", &self.expression)?;
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use Expression::*;
        match self {
            StringLiteral(n) => n.serialize(serializer),
            NumberLiteral(n) => n.serialize(serializer),
            VariableReference(n) => n.serialize(serializer),
            TermReference(n) => n.serialize(serializer),
            MessageReference(n) => n.serialize(serializer),
            FunctionReference(n) => n.serialize(serializer),
            Placeable(n) => n.serialize(serializer),
            SelectExpression(n) => n.serialize(serializer),
        }
    }
}

impl Serialize for StringLiteral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("StringLiteral", len)?;
        state.serialize_field("type", "StringLiteral")?;
        state.serialize_field("value", &self.value)?;
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for NumberLiteral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("NumberLiteral", len)?;
        state.serialize_field("type", "NumberLiteral")?;
        state.serialize_field("value", &self.value)?;
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Literal::String(n) => n.serialize(serializer),
            Literal::Number(n) => n.serialize(serializer),
        }
    }
}

impl Serialize for VariableReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("VariableReference", len)?;
        state.serialize_field("type", "VariableReference")?;
        state.serialize_field("id", &self.id)?;
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for MessageReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + self.attribute.is_some() as usize + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("MessageReference", len)?;
        state.serialize_field("type", "MessageReference")?;
        state.serialize_field("id", &self.id)?;
        if let Some(attribute) = &self.attribute {
            state.serialize_field("attribute", attribute)?;
        }
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for TermReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2
            + self.attribute.is_some() as usize
            + self.arguments.is_some() as usize
            + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("TermReference", len)?;
        state.serialize_field("type", "TermReference")?;
        state.serialize_field("id", &self.id)?;
        if let Some(attribute) = &self.attribute {
            state.serialize_field("attribute", attribute)?;
        }
        if let Some(arguments) = &self.arguments {
            state.serialize_field("arguments", arguments)?;
        }
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for FunctionReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 3 + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("FunctionReference", len)?;
        state.serialize_field("type", "FunctionReference")?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("arguments", &self.arguments)?;
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for SelectExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 3 + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("SelectExpression", len)?;
        state.serialize_field("type", "SelectExpression")?;
        state.serialize_field("selector", &self.selector)?;
        state.serialize_field("variants", &self.variants)?;
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for Variant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 4 + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("Variant", len)?;
        state.serialize_field("type", "Variant")?;
        state.serialize_field("key", &self.key)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("default", &self.default)?;
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for VariantKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            VariantKey::Identifier(n) => n.serialize(serializer),
            VariantKey::NumberLiteral(n) => n.serialize(serializer),
        }
    }
}

impl Serialize for CallArguments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 3 + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("CallArguments", len)?;
        state.serialize_field("type", "CallArguments")?;
        state.serialize_field("positional", &self.positional)?;
        state.serialize_field("named", &self.named)?;
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for NamedArgument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 3 + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("NamedArgument", len)?;
        state.serialize_field("type", "NamedArgument")?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("value", &self.value)?;
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + self.span.is_some() as usize;
        let mut state = serializer.serialize_struct("Identifier", len)?;
        state.serialize_field("type", "Identifier")?;
        state.serialize_field("name", &self.name)?;
        if let Some(span) = &self.span {
            state.serialize_field("span", span)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    use ftl_span::{BytePos, Span};
    use serde_json::json;

    #[test]
    fn test_message_omits_absent_fields() {
        let message = Message {
            id: Identifier::new("hello"),
            value: None,
            attributes: vec![Attribute {
                id: Identifier::new("title"),
                value: Pattern {
                    elements: vec![PatternElement::TextElement(TextElement {
                        value: "Hi".to_string(),
                        span: None,
                    })],
                    span: None,
                },
                span: None,
            }],
            comment: None,
            span: None,
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "type": "Message",
                "id": { "type": "Identifier", "name": "hello" },
                "attributes": [{
                    "type": "Attribute",
                    "id": { "type": "Identifier", "name": "title" },
                    "value": {
                        "type": "Pattern",
                        "elements": [{ "type": "TextElement", "value": "Hi" }]
                    }
                }]
            })
        );
    }

    #[test]
    fn test_span_serializes_as_node() {
        let identifier = Identifier {
            name: "emails".to_string(),
            span: Some(Span::new(BytePos(0), BytePos(6))),
        };

        assert_eq!(
            serde_json::to_value(&identifier).unwrap(),
            json!({
                "type": "Identifier",
                "name": "emails",
                "span": { "type": "Span", "start": 0, "end": 6 }
            })
        );
    }

    #[test]
    fn test_junk_with_annotation() {
        let junk = Junk {
            content: "err = {\n".to_string(),
            annotations: vec![Annotation {
                code: "E0028".to_string(),
                arguments: vec![],
                message: "Expected an expression".to_string(),
                span: None,
            }],
            span: None,
        };

        assert_eq!(
            serde_json::to_value(&junk).unwrap(),
            json!({
                "type": "Junk",
                "annotations": [{
                    "type": "Annotation",
                    "code": "E0028",
                    "arguments": [],
                    "message": "Expected an expression"
                }],
                "content": "err = {\n"
            })
        );
    }

    #[test]
    fn test_term_reference_with_arguments() {
        let reference = TermReference {
            id: Identifier::new("brand-name"),
            attribute: Some(Identifier::new("gender")),
            arguments: Some(CallArguments {
                positional: vec![],
                named: vec![NamedArgument {
                    name: Identifier::new("case"),
                    value: Literal::String(StringLiteral { value: "dative".to_string(), span: None }),
                    span: None,
                }],
                span: None,
            }),
            span: None,
        };

        assert_eq!(
            serde_json::to_value(&reference).unwrap(),
            json!({
                "type": "TermReference",
                "id": { "type": "Identifier", "name": "brand-name" },
                "attribute": { "type": "Identifier", "name": "gender" },
                "arguments": {
                    "type": "CallArguments",
                    "positional": [],
                    "named": [{
                        "type": "NamedArgument",
                        "name": { "type": "Identifier", "name": "case" },
                        "value": { "type": "StringLiteral", "value": "dative" }
                    }]
                }
            })
        );
    }

    #[test]
    fn test_remove_key_from_json() {
        let resource = Resource {
            body: vec![Entry::Comment(Comment {
                content: "note".to_string(),
                span: Some(Span::new(BytePos(0), BytePos(6))),
            })],
            span: Some(Span::new(BytePos(0), BytePos(7))),
        };

        let stripped = remove_key_from_json(resource.to_json_value().unwrap(), "span");
        assert_eq!(
            stripped,
            json!({
                "type": "Resource",
                "body": [{ "type": "Comment", "content": "note" }]
            })
        );
    }
}
