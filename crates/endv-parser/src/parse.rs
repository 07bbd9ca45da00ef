//! # Validation Engine
//!
//! A single recursive traversal interprets a [`Descriptor`] tree against a
//! [`Value`], outer-to-inner and left-to-right, stopping at the first
//! violation. The context path is an explicit vector threaded through the
//! traversal — one `(key, shape)` entry per level — so the diagnostic
//! rendering is independently testable and never depends on call-stack
//! state.
//!
//! ## Security Invariant
//!
//! This is a trust boundary. An envelope is accepted whole or rejected
//! whole: no coercion, no defaulting, no partial success. On success the
//! input value is handed back unchanged (guard, not mapper).
//!
//! ## Diagnostic Format
//!
//! `Invalid value <stringified> supplied to : <root shape>/<key>: <shape>/...`
//!
//! The root path entry carries an empty key, so the rendered path opens
//! with `: <root shape>`. Absent fields report the bare `undefined` token
//! as the offending value. For a given descriptor and value the message is
//! identical byte-for-byte on every call.

use std::fmt;

use thiserror::Error;

use crate::descriptor::Descriptor;
use crate::value::Value;

/// One level of the traversal path: the field name or array index, and the
/// canonical rendering of the shape expected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// Field name or array index; empty for the root entry.
    pub key: String,
    /// Canonical rendering of the descriptor at this level.
    pub shape: String,
}

impl fmt::Display for PathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.shape)
    }
}

/// The full path from the descriptor root to a violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextPath(Vec<PathEntry>);

impl ContextPath {
    /// The path entries, root first.
    pub fn entries(&self) -> &[PathEntry] {
        &self.0
    }

    /// The entry at the violation itself.
    pub fn leaf(&self) -> Option<&PathEntry> {
        self.0.last()
    }
}

impl fmt::Display for ContextPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("/")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// A value did not conform to its descriptor.
///
/// Carries the serialized offending value, the full descriptor path to the
/// first violation, and (via the path leaf) the expected shape at that
/// point. There is no recoverable/non-recoverable distinction: every
/// failure surfaces to the immediate caller, which decides whether to
/// retry the remote call or raise a user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value {actual} supplied to {path}")]
pub struct ParseError {
    actual: String,
    path: ContextPath,
}

impl ParseError {
    /// The offending value, serialized; the bare token `undefined` when the
    /// value was absent.
    pub fn offending_value(&self) -> &str {
        &self.actual
    }

    /// The full path from the descriptor root to the violation.
    pub fn path(&self) -> &ContextPath {
        &self.path
    }

    /// The canonical rendering of the shape expected at the violation.
    pub fn expected_shape(&self) -> &str {
        self.path.leaf().map(|entry| entry.shape.as_str()).unwrap_or_default()
    }
}

/// Validate `value` against `descriptor` and hand it back unchanged.
///
/// # Errors
///
/// Returns [`ParseError`] at the first violation encountered in
/// deterministic outer-to-inner, left-to-right order.
pub fn parse_to_type(descriptor: &Descriptor, value: Value) -> Result<Value, ParseError> {
    let mut path = vec![PathEntry {
        key: String::new(),
        shape: descriptor.to_string(),
    }];
    validate(descriptor, &value, &mut path)?;
    Ok(value)
}

/// Recursive traversal. `path` always holds the entries from the root down
/// to the node currently being checked; entries pushed for a level are
/// popped again once that level validates.
fn validate(
    descriptor: &Descriptor,
    value: &Value,
    path: &mut Vec<PathEntry>,
) -> Result<(), ParseError> {
    match descriptor {
        Descriptor::Unknown => Ok(()),
        Descriptor::String => match value {
            Value::String(_) => Ok(()),
            other => Err(violation(other, path)),
        },
        Descriptor::Number => match value {
            Value::Number(_) => Ok(()),
            other => Err(violation(other, path)),
        },
        Descriptor::Buffer => match value {
            Value::Bytes(_) => Ok(()),
            other => Err(violation(other, path)),
        },
        Descriptor::Optional(inner) => {
            if value.is_undefined() {
                return Ok(());
            }
            // A present value defers to the wrapped descriptor; the path
            // entry for this field already carries the union rendering.
            validate(inner, value, path)
        }
        Descriptor::Array(element) => {
            let items = match value {
                Value::Array(items) => items,
                other => return Err(violation(other, path)),
            };
            for (index, item) in items.iter().enumerate() {
                path.push(PathEntry {
                    key: index.to_string(),
                    shape: element.to_string(),
                });
                validate(element, item, path)?;
                path.pop();
            }
            Ok(())
        }
        Descriptor::Object(fields) => {
            let map = match value {
                Value::Object(map) => map,
                other => return Err(violation(other, path)),
            };
            for (name, field_descriptor) in fields {
                path.push(PathEntry {
                    key: name.clone(),
                    shape: field_descriptor.to_string(),
                });
                // A missing field validates as the absent value, so the
                // failure lands at the field's own path.
                let field_value = map.get(name).unwrap_or(&Value::Undefined);
                validate(field_descriptor, field_value, path)?;
                path.pop();
            }
            Ok(())
        }
    }
}

fn violation(value: &Value, path: &[PathEntry]) -> ParseError {
    ParseError {
        actual: value.stringify(),
        path: ContextPath(path.to_vec()),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for arbitrary JSON-derived runtime values.
    fn json_value() -> impl Strategy<Value = serde_json::Value> {
        let leaf = prop_oneof![
            Just(serde_json::Value::Null),
            any::<bool>().prop_map(serde_json::Value::Bool),
            any::<i64>().prop_map(|n| serde_json::json!(n)),
            "[a-zA-Z0-9_ ]{0,20}".prop_map(serde_json::Value::String),
        ];
        leaf.prop_recursive(4, 64, 8, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(serde_json::Value::Array),
                prop::collection::btree_map("[a-z]{1,8}", inner, 0..8).prop_map(|m| {
                    serde_json::Value::Object(m.into_iter().collect())
                }),
            ]
        })
    }

    fn envelope_shape() -> Descriptor {
        Descriptor::object([(
            "body",
            Descriptor::object([
                ("returnCode", Descriptor::Number),
                ("data", Descriptor::array(Descriptor::Unknown)),
            ]),
        )])
    }

    proptest! {
        /// Validation never panics, whatever the input shape.
        #[test]
        fn parse_never_panics(value in json_value()) {
            let _ = parse_to_type(&envelope_shape(), Value::from(value));
        }

        /// Error messages are deterministic: two runs, identical strings.
        #[test]
        fn parse_errors_are_deterministic(value in json_value()) {
            let first = parse_to_type(&envelope_shape(), Value::from(value.clone()));
            let second = parse_to_type(&envelope_shape(), Value::from(value));
            match (first, second) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
                (a, b) => prop_assert!(false, "verdict differs: {a:?} vs {b:?}"),
            }
        }

        /// Anything matches `unknown`, so a guard over it is a no-op.
        #[test]
        fn unknown_accepts_everything(value in json_value()) {
            let input = Value::from(value);
            let parsed = parse_to_type(&Descriptor::Unknown, input.clone());
            prop_assert_eq!(parsed.ok(), Some(input));
        }

        /// A value that validates comes back deep-equal to the input.
        #[test]
        fn valid_values_round_trip(code in any::<i32>(), items in prop::collection::vec(json_value(), 0..5)) {
            let input = Value::from(serde_json::json!({
                "body": {"returnCode": code, "data": items}
            }));
            let parsed = parse_to_type(&envelope_shape(), input.clone());
            prop_assert_eq!(parsed.ok(), Some(input));
        }
    }
}
