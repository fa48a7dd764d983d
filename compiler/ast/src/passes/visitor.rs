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

//! A Visitor trait for read-only analyses over the AST.
//!
//! Every method defaults to walking into the node's children, so an
//! implementor overrides only the node kinds it cares about and calls the
//! matching `walk_*` function to keep descending.

use crate::*;

/// A read-only visitor over a [`Resource`] tree.
pub trait Visitor {
    fn visit_resource(&mut self, input: &Resource) {
        walk_resource(self, input);
    }

    fn visit_entry(&mut self, input: &Entry) {
        walk_entry(self, input);
    }

    fn visit_message(&mut self, input: &Message) {
        walk_message(self, input);
    }

    fn visit_term(&mut self, input: &Term) {
        walk_term(self, input);
    }

    fn visit_attribute(&mut self, input: &Attribute) {
        walk_attribute(self, input);
    }

    fn visit_comment(&mut self, _input: &Comment) {}

    fn visit_group_comment(&mut self, _input: &GroupComment) {}

    fn visit_resource_comment(&mut self, _input: &ResourceComment) {}

    fn visit_junk(&mut self, _input: &Junk) {}

    fn visit_pattern(&mut self, input: &Pattern) {
        walk_pattern(self, input);
    }

    fn visit_text_element(&mut self, _input: &TextElement) {}

    fn visit_placeable(&mut self, input: &Placeable) {
        walk_placeable(self, input);
    }

    fn visit_expression(&mut self, input: &Expression) {
        walk_expression(self, input);
    }

    fn visit_string_literal(&mut self, _input: &StringLiteral) {}

    fn visit_number_literal(&mut self, _input: &NumberLiteral) {}

    fn visit_variable_reference(&mut self, input: &VariableReference) {
        self.visit_identifier(&input.id);
    }

    fn visit_message_reference(&mut self, input: &MessageReference) {
        walk_message_reference(self, input);
    }

    fn visit_term_reference(&mut self, input: &TermReference) {
        walk_term_reference(self, input);
    }

    fn visit_function_reference(&mut self, input: &FunctionReference) {
        walk_function_reference(self, input);
    }

    fn visit_select_expression(&mut self, input: &SelectExpression) {
        walk_select_expression(self, input);
    }

    fn visit_variant(&mut self, input: &Variant) {
        walk_variant(self, input);
    }

    fn visit_call_arguments(&mut self, input: &CallArguments) {
        walk_call_arguments(self, input);
    }

    fn visit_named_argument(&mut self, input: &NamedArgument) {
        walk_named_argument(self, input);
    }

    fn visit_identifier(&mut self, _input: &Identifier) {}
}

pub fn walk_resource<V: Visitor + ?Sized>(visitor: &mut V, input: &Resource) {
    for entry in &input.body {
        visitor.visit_entry(entry);
    }
}

pub fn walk_entry<V: Visitor + ?Sized>(visitor: &mut V, input: &Entry) {
    match input {
        Entry::Message(message) => visitor.visit_message(message),
        Entry::Term(term) => visitor.visit_term(term),
        Entry::Comment(comment) => visitor.visit_comment(comment),
        Entry::GroupComment(comment) => visitor.visit_group_comment(comment),
        Entry::ResourceComment(comment) => visitor.visit_resource_comment(comment),
        Entry::Junk(junk) => visitor.visit_junk(junk),
    }
}

pub fn walk_message<V: Visitor + ?Sized>(visitor: &mut V, input: &Message) {
    visitor.visit_identifier(&input.id);
    if let Some(value) = &input.value {
        visitor.visit_pattern(value);
    }
    for attribute in &input.attributes {
        visitor.visit_attribute(attribute);
    }
    if let Some(comment) = &input.comment {
        visitor.visit_comment(comment);
    }
}

pub fn walk_term<V: Visitor + ?Sized>(visitor: &mut V, input: &Term) {
    visitor.visit_identifier(&input.id);
    visitor.visit_pattern(&input.value);
    for attribute in &input.attributes {
        visitor.visit_attribute(attribute);
    }
    if let Some(comment) = &input.comment {
        visitor.visit_comment(comment);
    }
}

pub fn walk_attribute<V: Visitor + ?Sized>(visitor: &mut V, input: &Attribute) {
    visitor.visit_identifier(&input.id);
    visitor.visit_pattern(&input.value);
}

pub fn walk_pattern<V: Visitor + ?Sized>(visitor: &mut V, input: &Pattern) {
    for element in &input.elements {
        match element {
            PatternElement::TextElement(text) => visitor.visit_text_element(text),
            PatternElement::Placeable(placeable) => visitor.visit_placeable(placeable),
        }
    }
}

pub fn walk_placeable<V: Visitor + ?Sized>(visitor: &mut V, input: &Placeable) {
    visitor.visit_expression(&input.expression);
}

pub fn walk_expression<V: Visitor + ?Sized>(visitor: &mut V, input: &Expression) {
    match input {
        Expression::StringLiteral(literal) => visitor.visit_string_literal(literal),
        Expression::NumberLiteral(literal) => visitor.visit_number_literal(literal),
        Expression::VariableReference(reference) => visitor.visit_variable_reference(reference),
        Expression::TermReference(reference) => visitor.visit_term_reference(reference),
        Expression::MessageReference(reference) => visitor.visit_message_reference(reference),
        Expression::FunctionReference(reference) => visitor.visit_function_reference(reference),
        Expression::Placeable(placeable) => visitor.visit_placeable(placeable),
        Expression::SelectExpression(select) => visitor.visit_select_expression(select),
    }
}

pub fn walk_message_reference<V: Visitor + ?Sized>(visitor: &mut V, input: &MessageReference) {
    visitor.visit_identifier(&input.id);
    if let Some(attribute) = &input.attribute {
        visitor.visit_identifier(attribute);
    }
}

pub fn walk_term_reference<V: Visitor + ?Sized>(visitor: &mut V, input: &TermReference) {
    visitor.visit_identifier(&input.id);
    if let Some(attribute) = &input.attribute {
        visitor.visit_identifier(attribute);
    }
    if let Some(arguments) = &input.arguments {
        visitor.visit_call_arguments(arguments);
    }
}

pub fn walk_function_reference<V: Visitor + ?Sized>(visitor: &mut V, input: &FunctionReference) {
    visitor.visit_identifier(&input.id);
    visitor.visit_call_arguments(&input.arguments);
}

pub fn walk_select_expression<V: Visitor + ?Sized>(visitor: &mut V, input: &SelectExpression) {
    visitor.visit_expression(&input.selector);
    for variant in &input.variants {
        visitor.visit_variant(variant);
    }
}

pub fn walk_variant<V: Visitor + ?Sized>(visitor: &mut V, input: &Variant) {
    match &input.key {
        VariantKey::Identifier(identifier) => visitor.visit_identifier(identifier),
        VariantKey::NumberLiteral(literal) => visitor.visit_number_literal(literal),
    }
    visitor.visit_pattern(&input.value);
}

pub fn walk_call_arguments<V: Visitor + ?Sized>(visitor: &mut V, input: &CallArguments) {
    for positional in &input.positional {
        visitor.visit_expression(positional);
    }
    for named in &input.named {
        visitor.visit_named_argument(named);
    }
}

pub fn walk_named_argument<V: Visitor + ?Sized>(visitor: &mut V, input: &NamedArgument) {
    visitor.visit_identifier(&input.name);
    match &input.value {
        Literal::String(literal) => visitor.visit_string_literal(literal),
        Literal::Number(literal) => visitor.visit_number_literal(literal),
    }
}
