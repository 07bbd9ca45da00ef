//! Endevor return-code severity semantics.
//!
//! Every envelope carries a numeric `returnCode` with the standard Endevor
//! bands: `0` is a clean success, codes up to `4` are successes with
//! warnings, anything above `4` is an error. Callers branch on the
//! predicates here instead of re-encoding the thresholds.

use endv_parser::Value;

/// Highest return code still considered successful.
const MAX_WARNING_CODE: i64 = 4;

/// A validated Endevor return code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReturnCode(i64);

impl ReturnCode {
    /// Wrap a raw return code.
    pub const fn new(code: i64) -> Self {
        ReturnCode(code)
    }

    /// The raw numeric code.
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Clean success: code `0`.
    pub const fn is_clean(&self) -> bool {
        self.0 == 0
    }

    /// Success, possibly with warnings: code `0` through `4`.
    pub const fn is_successful(&self) -> bool {
        0 <= self.0 && self.0 <= MAX_WARNING_CODE
    }

    /// Success with warnings: code `1` through `4`.
    pub const fn has_warnings(&self) -> bool {
        0 < self.0 && self.0 <= MAX_WARNING_CODE
    }

    /// Operation failed: code above `4` (or a malformed negative code).
    pub const fn is_error(&self) -> bool {
        !self.is_successful()
    }

    /// Read `body.returnCode` out of a validated envelope.
    ///
    /// Returns `None` when the envelope does not carry an integral numeric
    /// return code at that path. Validation guarantees the field is
    /// numeric, not that it is integral: a fractional code (which the
    /// service never emits but `number` admits) also yields `None`.
    pub fn from_envelope(envelope: &Value) -> Option<Self> {
        let body = match envelope {
            Value::Object(map) => map.get("body")?,
            _ => return None,
        };
        let code = match body {
            Value::Object(map) => map.get("returnCode")?,
            _ => return None,
        };
        match code {
            Value::Number(number) => number.as_i64().map(ReturnCode),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
