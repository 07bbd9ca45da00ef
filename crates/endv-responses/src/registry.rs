//! # Envelope Descriptor Registry
//!
//! The seven response shapes the Endevor web-services client recognizes.
//! Each is constructed once, on first use, and shared immutably for the
//! life of the process.
//!
//! `returnCode` is always numeric — a numeric-looking string is rejected.
//! Top-level `data`/`messages` arrays are never optional; the only optional
//! field in the contract is the dependency list's `components`.

use endv_parser::Descriptor;
use once_cell::sync::Lazy;

/// `{ body: { returnCode: number, data: Array<element> } }`
fn body_with_data(element: Descriptor) -> Descriptor {
    Descriptor::object([(
        "body",
        Descriptor::object([
            ("returnCode", Descriptor::Number),
            ("data", Descriptor::array(element)),
        ]),
    )])
}

/// `{ body: { returnCode: number, messages: Array<string> } }`
fn body_with_messages() -> Descriptor {
    Descriptor::object([(
        "body",
        Descriptor::object([
            ("returnCode", Descriptor::Number),
            ("messages", Descriptor::array(Descriptor::String)),
        ]),
    )])
}

/// Successful repository-list response. Repository entries are opaque to
/// this layer.
pub static SUCCESS_LIST_REPOSITORIES_RESPONSE: Lazy<Descriptor> =
    Lazy::new(|| body_with_data(Descriptor::Unknown));

/// Successful element-list response. Element entries are opaque to this
/// layer.
pub static SUCCESS_LIST_ELEMENTS_RESPONSE: Lazy<Descriptor> =
    Lazy::new(|| body_with_data(Descriptor::Unknown));

/// Successful print response: element or listing text, one string per
/// segment.
pub static SUCCESS_PRINT_RESPONSE: Lazy<Descriptor> =
    Lazy::new(|| body_with_data(Descriptor::String));

/// Successful retrieve response: binary element content plus the
/// fingerprint header used for optimistic locking on a later update.
pub static SUCCESS_RETRIEVE_RESPONSE: Lazy<Descriptor> = Lazy::new(|| {
    Descriptor::object([
        (
            "body",
            Descriptor::object([
                ("returnCode", Descriptor::Number),
                ("data", Descriptor::array(Descriptor::Buffer)),
            ]),
        ),
        (
            "headers",
            Descriptor::object([("fingerprint", Descriptor::String)]),
        ),
    ])
});

/// Successful dependency-list response. `components` may be absent for
/// elements with no dependencies.
pub static SUCCESS_LIST_DEPENDENCIES_RESPONSE: Lazy<Descriptor> = Lazy::new(|| {
    body_with_data(Descriptor::object([(
        "components",
        Descriptor::optional(Descriptor::array(Descriptor::Unknown)),
    )]))
});

/// Update and generate responses share one shape.
pub static UPDATE_RESPONSE: Lazy<Descriptor> = Lazy::new(body_with_messages);

/// Error response returned by any operation.
pub static ERROR_RESPONSE: Lazy<Descriptor> = Lazy::new(body_with_messages);
