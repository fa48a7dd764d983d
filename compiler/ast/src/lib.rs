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

//! The abstract syntax tree (AST) for an FTL resource.
//!
//! The tree is rooted at a [`Resource`] whose body is an ordered list of
//! [`Entry`] values. All nodes are plain owned data: the parser builds
//! them and consumers read or serialize them; nothing here points back at
//! the source buffer.
//!
//! Serialization follows the reference Fluent AST schema: every node
//! carries a `"type"` field and nullable fields are omitted when absent.

#![forbid(unsafe_code)]

pub mod attribute;
pub use self::attribute::*;

pub mod comment;
pub use self::comment::*;

pub mod common;
pub use self::common::*;

pub mod expressions;
pub use self::expressions::*;

pub mod junk;
pub use self::junk::*;

pub mod message;
pub use self::message::*;

pub mod passes;
pub use self::passes::*;

pub mod pattern;
pub use self::pattern::*;

pub mod resource;
pub use self::resource::*;

pub mod term;
pub use self::term::*;

mod serialize;

/// Recursively removes the given key from every object in an AST JSON value.
///
/// Used to strip `"span"` keys when comparing trees parsed with and without
/// span attachment.
pub fn remove_key_from_json(value: serde_json::Value, key: &str) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => serde_json::Value::Object(
            map.into_iter().filter(|(k, _)| k != key).map(|(k, v)| (k, remove_key_from_json(v, key))).collect(),
        ),
        serde_json::Value::Array(values) => {
            serde_json::Value::Array(values.into_iter().map(|v| remove_key_from_json(v, key)).collect())
        }
        _ => value,
    }
}
