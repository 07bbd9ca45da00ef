//! # Runtime Value Tree
//!
//! The value model the parser validates against. Response envelopes carry
//! things plain JSON cannot: binary blobs in the body (`Bytes`) and absent
//! fields that must be distinguishable from explicit `null` (`Undefined`).
//! So the parser owns its value tree and converts from `serde_json::Value`
//! at the boundary.
//!
//! ## Equality
//!
//! `PartialEq` is deep equality: byte blobs compare byte-for-byte, arrays
//! element-wise, and objects by key set (insertion order does not affect
//! equality). Callers that need the "validate, then deep-compare" pattern
//! get it from `==` directly.
//!
//! ## Diagnostic Rendering
//!
//! [`Value::stringify`] produces the compact JSON rendering embedded in
//! parse errors. It must be deterministic: object keys render in insertion
//! order, and the same value always yields the identical string.

use indexmap::IndexMap;
use serde_json::Number;

/// An untyped runtime value, as decoded from a response envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An absent field, or an absent slot inside an array.
    /// Distinct from `Null`: a declared field holding `null` is present.
    Undefined,
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number. Kept as `serde_json::Number` so integers render
    /// without a fractional part in diagnostics.
    Number(Number),
    /// JSON string.
    String(String),
    /// A binary blob from a binary-capable body field.
    Bytes(Vec<u8>),
    /// Ordered sequence.
    Array(Vec<Value>),
    /// Keyed record, insertion-ordered.
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Construct a binary blob value.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(bytes.into())
    }

    /// Build an object value from `(key, value)` pairs, insertion-ordered.
    pub fn object<N, I>(entries: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Value)>,
    {
        Value::Object(entries.into_iter().map(|(key, item)| (key.into(), item)).collect())
    }

    /// Build an array value.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(items.into_iter().collect())
    }

    /// Returns true for the absent-value marker.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Render this value the way it appears in parse diagnostics.
    ///
    /// Compact JSON with insertion-ordered object keys. A top-level
    /// `Undefined` renders as the bare token `undefined`; nested, it
    /// follows JSON.stringify: an absent array slot renders as `null`, an
    /// absent object property is omitted along with its key. Byte blobs
    /// render in their wire envelope form: `{"type":"Buffer","data":[...]}`.
    pub fn stringify(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            other => {
                let mut out = String::new();
                write_compact(other, &mut out);
                out
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            serde_json::Value::Number(number) => Value::Number(number),
            serde_json::Value::String(text) => Value::String(text),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter().map(|(key, item)| (key, Value::from(item))).collect(),
            ),
        }
    }
}

/// Write the compact JSON rendering of `value` into `out`.
///
/// The bare `undefined` token exists only at the top level (see
/// [`Value::stringify`]); nested absence follows JSON.stringify rules.
fn write_compact(value: &Value, out: &mut String) {
    match value {
        Value::Undefined | Value::Null => out.push_str("null"),
        Value::Bool(flag) => out.push_str(if *flag { "true" } else { "false" }),
        Value::Number(number) => out.push_str(&number.to_string()),
        Value::String(text) => write_escaped(text, out),
        Value::Bytes(bytes) => {
            out.push_str("{\"type\":\"Buffer\",\"data\":[");
            for (index, byte) in bytes.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                out.push_str(&byte.to_string());
            }
            out.push_str("]}");
        }
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_compact(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            let mut first = true;
            for (key, item) in map {
                // Absent properties are dropped entirely, key included.
                if item.is_undefined() {
                    continue;
                }
                if !first {
                    out.push(',');
                }
                first = false;
                write_escaped(key, out);
                out.push(':');
                write_compact(item, out);
            }
            out.push('}');
        }
    }
}

/// Write a JSON string literal with standard escaping.
fn write_escaped(text: &str, out: &mut String) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if (ch as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", ch as u32));
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}
