use crate::types::alloc_type::{Cow, String};
use crate::types::field_error::FieldError;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rule's verdict against one value: a catalog code and a rendered message.
///
/// Violations only live long enough to be attached to a path with
/// [`Violation::at`].
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Violation {
    pub code: Cow<'static, str>,
    pub message: String,
}

impl Violation {
    #[inline]
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self { code: code.into(), message: message.into() }
    }

    /// A violation with a code and no message.
    #[inline]
    pub fn code(code: impl Into<Cow<'static, str>>) -> Self {
        Self::new(code, String::new())
    }

    /// Attaches the violation to `path`.
    #[inline]
    pub fn at(self, path: &str) -> FieldError {
        FieldError::new(path, self.code, self.message)
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(&self.code)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}
