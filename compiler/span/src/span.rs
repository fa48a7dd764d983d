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

//! Defines the [`BytePos`] and [`Span`] types.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::ops::Add;

/// A byte offset into the original source text.
///
/// Offsets always point at the unnormalized source, so a `\r\n` line ending
/// is two bytes wide even though the parser reads it as a single `\n`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BytePos(pub u32);

impl BytePos {
    /// Converts a `usize` byte index into a `BytePos`.
    pub fn from_usize(n: usize) -> Self {
        Self(n as u32)
    }

    /// Converts the `BytePos` back into a `usize` byte index.
    pub fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl Add for BytePos {
    type Output = BytePos;

    fn add(self, rhs: BytePos) -> BytePos {
        BytePos(self.0 + rhs.0)
    }
}

impl fmt::Display for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The span between two byte offsets in the original source, `[lo, hi)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// The start of the span, inclusive.
    pub lo: BytePos,
    /// The end of the span, exclusive.
    pub hi: BytePos,
}

impl Span {
    /// Creates a span from two byte offsets.
    pub fn new(lo: BytePos, hi: BytePos) -> Self {
        Self { lo, hi }
    }

    /// Creates a dummy span pointing at the start of the source.
    pub fn dummy() -> Self {
        Self::default()
    }
}

impl Add for Span {
    type Output = Span;

    /// Merges two spans into one covering both.
    fn add(self, rhs: Span) -> Span {
        Span::new(self.lo.min(rhs.lo), self.hi.max(rhs.hi))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..{}", self.lo, self.hi)
    }
}

impl Serialize for Span {
    /// Spans serialize as nodes of their own in the reference AST schema.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Span", 3)?;
        state.serialize_field("type", "Span")?;
        state.serialize_field("start", &self.lo.0)?;
        state.serialize_field("end", &self.hi.0)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge() {
        let left = Span::new(BytePos(3), BytePos(8));
        let right = Span::new(BytePos(5), BytePos(12));
        assert_eq!(left + right, Span::new(BytePos(3), BytePos(12)));
        assert_eq!(right + left, Span::new(BytePos(3), BytePos(12)));
    }

    #[test]
    fn test_display() {
        let span = Span::new(BytePos::from_usize(2), BytePos::from_usize(7));
        assert_eq!(span.to_string(), "2..7");
    }

    #[test]
    fn test_serialize() {
        let span = Span::new(BytePos(1), BytePos(4));
        let value = serde_json::to_value(span).unwrap();
        assert_eq!(value, serde_json::json!({ "type": "Span", "start": 1, "end": 4 }));
    }
}
