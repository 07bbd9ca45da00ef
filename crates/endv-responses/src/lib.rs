//! # endv-responses — The Endevor Response Wire Contract
//!
//! The complete set of response-envelope shapes the client recognizes,
//! expressed as [`endv_parser::Descriptor`] trees, plus the return-code
//! severity conventions shared by every envelope.
//!
//! The registry is the contract: any response shape not enumerated in
//! [`registry`] must be added as a new descriptor, never inferred. Callers
//! hand the raw decoded envelope to [`endv_parser::parse_to_type`] with the
//! matching registry entry and get back either the validated envelope or a
//! path-qualified parse error.

pub mod registry;
pub mod return_code;

pub use endv_parser::{parse_to_type, Descriptor, ParseError, Value};
pub use return_code::ReturnCode;
