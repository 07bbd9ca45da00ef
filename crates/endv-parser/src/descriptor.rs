//! # Shape Descriptors
//!
//! A [`Descriptor`] is an immutable description of an expected value shape,
//! built from three primitives and three combinators. The same tree drives
//! both validation (see [`crate::parse`]) and the canonical textual
//! rendering that appears in diagnostic paths, so the two can never
//! disagree.
//!
//! Rendering grammar: `string`, `number`, `Buffer`, `unknown`,
//! `Array<T>`, `{ field: T, other: U }`, `(T | undefined)`.

use std::fmt;

/// An expected value shape.
///
/// Descriptors are plain data: construct them once, share them freely.
/// Validation is strict — primitives match on exact runtime type identity,
/// never by coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    /// A string value.
    String,
    /// A numeric value. A numeric-looking string does not match.
    Number,
    /// A binary blob.
    Buffer,
    /// Any value at all, including an absent one. Used where the caller
    /// does not need to interpret element shapes.
    Unknown,
    /// A keyed record carrying at least the declared fields, each
    /// conforming to its own descriptor. Extra fields on the input are
    /// ignored (structural subset matching).
    Object(Vec<(String, Descriptor)>),
    /// An ordered sequence whose every element conforms to the element
    /// descriptor.
    Array(Box<Descriptor>),
    /// Either absent or a value conforming to the wrapped descriptor.
    Optional(Box<Descriptor>),
}

impl Descriptor {
    /// Build an object descriptor from `(name, shape)` pairs, validated in
    /// declared order.
    pub fn object<N, I>(fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Descriptor)>,
    {
        Descriptor::Object(
            fields
                .into_iter()
                .map(|(name, descriptor)| (name.into(), descriptor))
                .collect(),
        )
    }

    /// Build an array descriptor.
    pub fn array(element: Descriptor) -> Self {
        Descriptor::Array(Box::new(element))
    }

    /// Build an optional descriptor.
    pub fn optional(inner: Descriptor) -> Self {
        Descriptor::Optional(Box::new(inner))
    }
}

impl fmt::Display for Descriptor {
    /// The canonical shape rendering used verbatim in diagnostic paths.
    /// Deterministic: depends only on the descriptor tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::String => f.write_str("string"),
            Descriptor::Number => f.write_str("number"),
            Descriptor::Buffer => f.write_str("Buffer"),
            Descriptor::Unknown => f.write_str("unknown"),
            Descriptor::Array(element) => write!(f, "Array<{element}>"),
            Descriptor::Optional(inner) => write!(f, "({inner} | undefined)"),
            Descriptor::Object(fields) => {
                if fields.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (index, (name, descriptor)) in fields.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {descriptor}")?;
                }
                f.write_str(" }")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_primitives() {
        assert_eq!(Descriptor::String.to_string(), "string");
        assert_eq!(Descriptor::Number.to_string(), "number");
        assert_eq!(Descriptor::Buffer.to_string(), "Buffer");
        assert_eq!(Descriptor::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_render_array() {
        assert_eq!(Descriptor::array(Descriptor::String).to_string(), "Array<string>");
        assert_eq!(
            Descriptor::array(Descriptor::Unknown).to_string(),
            "Array<unknown>"
        );
    }

    #[test]
    fn test_render_optional_union() {
        assert_eq!(
            Descriptor::optional(Descriptor::array(Descriptor::Unknown)).to_string(),
            "(Array<unknown> | undefined)"
        );
    }

    #[test]
    fn test_render_nested_object() {
        let shape = Descriptor::object([(
            "body",
            Descriptor::object([
                ("returnCode", Descriptor::Number),
                ("data", Descriptor::array(Descriptor::Unknown)),
            ]),
        )]);
        assert_eq!(
            shape.to_string(),
            "{ body: { returnCode: number, data: Array<unknown> } }"
        );
    }

    #[test]
    fn test_render_empty_object() {
        let shape = Descriptor::object(Vec::<(String, Descriptor)>::new());
        assert_eq!(shape.to_string(), "{}");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let shape = Descriptor::object([
            ("body", Descriptor::object([("returnCode", Descriptor::Number)])),
            ("headers", Descriptor::object([("fingerprint", Descriptor::String)])),
        ]);
        assert_eq!(shape.to_string(), shape.clone().to_string());
    }
}
