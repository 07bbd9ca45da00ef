//! # endv-parser — Runtime Type Parsing for Response Envelopes
//!
//! This crate is the trust boundary between the Endevor web-services client
//! and everything that consumes its responses. A response arrives as an
//! untyped value (decoded JSON plus binary-capable body fields); the parser
//! checks it against an explicit shape descriptor and either hands the value
//! back unchanged or rejects it with a diagnostic naming the exact field
//! path and offending value.
//!
//! ## Key Design Principles
//!
//! 1. **The descriptor tree is explicit data.** Expected shapes are built
//!    from a small set of combinators ([`Descriptor`]) and interpreted by a
//!    single recursive traversal — no reflection, no derive magic. The tree
//!    that validates a value is the same tree that renders its shape in
//!    diagnostics, so messages can never drift from behavior.
//!
//! 2. **Strict typing, no coercion.** A `number` field never accepts a
//!    numeric-looking string. A shape mismatch is always fatal to the call;
//!    the parser never defaults, drops, or converts data.
//!
//! 3. **Guard, not mapper.** On success the input value is returned as-is.
//!    Callers deep-compare or destructure it themselves.
//!
//! 4. **Deterministic diagnostics.** The same descriptor and value always
//!    produce the identical error string, byte for byte. Downstream
//!    consumers match on exact message text.
//!
//! ## Crate Policy
//!
//! - No internal dependencies (leaf of the workspace DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Purely synchronous and stateless: descriptors are immutable and every
//!   parse call is independent, so concurrent use needs no coordination.

pub mod descriptor;
pub mod parse;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use descriptor::Descriptor;
pub use parse::{parse_to_type, ContextPath, ParseError, PathEntry};
pub use value::Value;
