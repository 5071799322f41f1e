//! Character-class rules over text. Empty text never matches.

use crate::context::Context;
use crate::rules::resolve::Resolve;
use crate::rules::{codes, violation};
use crate::traits::Rule;
use crate::types::Violation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Alpha,
    AlphaNumeric,
    Numeric,
}

impl Class {
    fn code(self) -> &'static str {
        match self {
            Class::Alpha => codes::ALPHA,
            Class::AlphaNumeric => codes::ALPHANUMERIC,
            Class::Numeric => codes::NUMERIC,
        }
    }

    fn matches(self, text: &str) -> bool {
        match self {
            Class::Alpha => !text.is_empty() && text.bytes().all(|b| b.is_ascii_alphabetic()),
            Class::AlphaNumeric => {
                !text.is_empty() && text.bytes().all(|b| b.is_ascii_alphanumeric())
            },
            Class::Numeric => is_decimal(text),
        }
    }
}

/// Optional sign, digits, then optionally `.` and more digits.
fn is_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    digits(whole) && fraction.map_or(true, digits)
}

/// Text restricted to one ASCII character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    class: Class,
}

/// ASCII letters only.
#[inline]
pub fn alpha() -> Charset {
    Charset { class: Class::Alpha }
}

/// ASCII letters and digits only.
#[inline]
pub fn alphanumeric() -> Charset {
    Charset { class: Class::AlphaNumeric }
}

/// A decimal number such as `42`, `-7` or `+3.14`.
#[inline]
pub fn numeric() -> Charset {
    Charset { class: Class::Numeric }
}

impl<V> Rule<V> for Charset
where
    V: Resolve + ?Sized,
    V::Inner: AsRef<str>,
{
    fn check(&self, _: &Context, value: &V) -> Option<Violation> {
        let text: &str = value.resolve()?.as_ref();
        (!self.class.matches(text)).then(|| violation(self.class.code(), &[]))
    }
}
