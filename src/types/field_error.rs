use crate::types::alloc_type::{format, String};
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Code reported for a delegate that failed without a structured error.
pub const INVALID_CODE: &str = "invalid";

/// One failed position inside a validated value.
///
/// `path` is a dot-delimited list of segments, each either a field name or a
/// decimal collection index (`Items.2.Name`). Values are immutable once built;
/// re-prefixing or renaming always produces a new `FieldError`.
///
/// # Examples
///
/// ```
/// use valid_rail::FieldError;
///
/// let err = FieldError::new("Reference", "REQUIRED", "is required");
/// assert_eq!(err.path(), "Reference");
/// assert_eq!(err.code(), "REQUIRED");
/// assert_eq!(err.to_string(), "Reference (REQUIRED): is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldError {
    path: String,
    code: String,
    message: String,
}

impl FieldError {
    #[inline]
    pub fn new<P, C, M>(path: P, code: C, message: M) -> Self
    where
        P: Into<String>,
        C: Into<String>,
        M: Into<String>,
    {
        Self { path: path.into(), code: code.into(), message: message.into() }
    }

    /// The synthetic marker for a delegate that failed without structure.
    #[inline]
    pub fn invalid<P: Into<String>>(path: P) -> Self {
        Self::new(path, INVALID_CODE, String::new())
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` when `path` equals this error's path or lies beneath it.
    pub fn covers(&self, path: &str) -> bool {
        is_same_or_descendant(path, &self.path)
    }

    /// Rebuilds the error under `prefix`, so `Name` becomes `Items.0.Name`.
    #[must_use]
    pub fn prefixed(&self, prefix: &str) -> Self {
        Self {
            path: join_path(prefix, &self.path),
            code: self.code.clone(),
            message: self.message.clone(),
        }
    }

    /// Same code and message under a different path.
    #[must_use]
    pub fn with_path<P: Into<String>>(&self, path: P) -> Self {
        Self { path: path.into(), code: self.code.clone(), message: self.message.clone() }
    }

    /// Splits the error into its `(path, code, message)` parts.
    #[inline]
    pub fn into_parts(self) -> (String, String, String) {
        (self.path, self.code, self.message)
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{} ({})", self.path, self.code)
        } else {
            write!(f, "{} ({}): {}", self.path, self.code, self.message)
        }
    }
}

/// Joins two path fragments with a dot. An empty side contributes nothing.
pub fn join_path(prefix: &str, rest: &str) -> String {
    match (prefix.is_empty(), rest.is_empty()) {
        (true, _) => String::from(rest),
        (_, true) => String::from(prefix),
        _ => format!("{prefix}.{rest}"),
    }
}

/// Path of the element at `index` under `prefix` (`Items` + 2 -> `Items.2`).
pub fn index_path(prefix: &str, index: usize) -> String {
    if prefix.is_empty() {
        format!("{index}")
    } else {
        format!("{prefix}.{index}")
    }
}

/// `true` if `path == ancestor` or `path` starts with `ancestor` followed by a dot.
pub fn is_same_or_descendant(path: &str, ancestor: &str) -> bool {
    match path.strip_prefix(ancestor) {
        Some("") => true,
        Some(rest) => rest.starts_with('.'),
        None => false,
    }
}
