//! Code → message template catalog.
//!
//! Templates use named `{placeholder}`s that [`format_message`] fills in.
//! The validation core never reads this table; only the bundled rules do.

use crate::rules::codes;
use crate::types::alloc_type::{String, ToString};
use core::fmt::Display;

/// Message used when a code has no template.
pub const FALLBACK_MESSAGE: &str = "invalid value";

static CATALOG: &[(&str, &str)] = &[
    (codes::REQUIRED, "is required"),
    (codes::NOT_EMPTY, "must not be empty"),
    (codes::MIN, "must be >= {min}"),
    (codes::MAX, "must be <= {max}"),
    (codes::BETWEEN, "must be between {min} and {max}"),
    (codes::GT, "must be > {value}"),
    (codes::GTE, "must be >= {value}"),
    (codes::LT, "must be < {value}"),
    (codes::LTE, "must be <= {value}"),
    (codes::EQ, "must be = {value}"),
    (codes::POSITIVE, "must be > 0"),
    (codes::NON_NEGATIVE, "must be >= 0"),
    (codes::ONE_OF, "must be one of {values}"),
    (codes::HAS_PREFIX, "must start with {prefix}"),
    (codes::HAS_SUFFIX, "must end with {suffix}"),
    (codes::CONTAINS, "must contain {value}"),
    (codes::LENGTH, "length must be between {min} and {max}"),
    (codes::MIN_LENGTH, "length must be >= {min}"),
    (codes::MAX_LENGTH, "length must be <= {max}"),
    (codes::NUMERIC, "must be numeric"),
    (codes::ALPHA, "must contain only letters"),
    (codes::ALPHANUMERIC, "must contain only letters and digits"),
];

/// Template registered for `code`.
pub fn template(code: &str) -> Option<&'static str> {
    CATALOG.iter().find(|(c, _)| *c == code).map(|(_, t)| *t)
}

/// Renders the template for `code`, replacing each `{name}` with its value.
///
/// Unknown codes render [`FALLBACK_MESSAGE`]; placeholders without a value
/// are left untouched.
///
/// # Examples
///
/// ```
/// use valid_rail::rules::{codes, format_message};
///
/// assert_eq!(format_message(codes::MIN, &[("min", &3)]), "must be >= 3");
/// assert_eq!(format_message("UNKNOWN", &[]), "invalid value");
/// ```
pub fn format_message(code: &str, params: &[(&str, &dyn Display)]) -> String {
    let Some(template) = template(code) else {
        return FALLBACK_MESSAGE.to_string();
    };
    params.iter().fold(template.to_string(), |message, (name, value)| {
        let placeholder = crate::types::alloc_type::format!("{{{name}}}");
        message.replace(&placeholder, &value.to_string())
    })
}
