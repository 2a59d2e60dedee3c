// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Write as _;

/// A typed attribute value.
///
/// Emission policy:
/// - `Flag(false)` is omitted entirely.
/// - `Flag(true)` emits the bare attribute name with no value.
/// - `Text` emits a quoted value.
/// - `List` emits a single quoted value of space-joined tokens.
///
/// Values are emitted uninspected; quoting or escaping malformed text is the
/// caller's responsibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// A boolean flag attribute.
    Flag(bool),
    /// A plain text value.
    Text(String),
    /// An ordered sequence of text tokens, space-joined on output.
    List(Vec<String>),
}

impl AttrValue {
    /// Appends ` name`, ` name="value"`, or nothing to `out`, per the
    /// emission policy above.
    pub(crate) fn emit(&self, name: &str, out: &mut String) {
        match self {
            Self::Flag(false) => {}
            Self::Flag(true) => {
                let _ = write!(out, " {name}");
            }
            Self::Text(value) => {
                let _ = write!(out, " {name}=\"{value}\"");
            }
            Self::List(tokens) => {
                let _ = write!(out, " {name}=\"{}\"", tokens.join(" "));
            }
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(tokens: Vec<String>) -> Self {
        Self::List(tokens)
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Text(value.to_string())
    }
}
