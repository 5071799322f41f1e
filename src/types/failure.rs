//! The outcome of a failed delegate: either a structured [`ValidationError`]
//! or some other error the delegate could not describe field by field.

use crate::types::alloc_type::Box;
use crate::types::validation_error::{find_validation_error, ValidationError};
use core::fmt::{self, Display};

/// Boxed error carried by [`Failure::Opaque`].
pub type BoxedError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Error returned by [`Validatable::validate`](crate::traits::Validatable::validate)
/// and by per-element functions passed to [`slice`](crate::validation::slice).
///
/// `Structured` failures are flattened into the parent report. `Opaque`
/// failures become a single `invalid` marker at the delegate's path, unless a
/// `ValidationError` is found along their `source()` chain.
///
/// # Examples
///
/// ```
/// use valid_rail::{Failure, FieldError, ValidationError};
///
/// let structured: Failure = ValidationError::single(FieldError::new("Name", "REQUIRED", "")).into();
/// assert!(structured.as_validation_error().is_some());
///
/// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk unavailable");
/// let opaque = Failure::opaque(io);
/// assert!(opaque.as_validation_error().is_none());
/// ```
#[derive(Debug)]
pub enum Failure {
    Structured(ValidationError),
    Opaque(BoxedError),
}

impl Failure {
    /// Wraps any error as an opaque failure.
    #[inline]
    pub fn opaque<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::Opaque(Box::new(error))
    }

    /// Recovers the structured error, looking through an opaque cause chain.
    pub fn as_validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Structured(err) => Some(err),
            Self::Opaque(err) => find_validation_error(err.as_ref()),
        }
    }

    #[inline]
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    /// Converts into the structured error, if it is one.
    pub fn into_validation_error(self) -> Result<ValidationError, Self> {
        match self {
            Self::Structured(err) => Ok(err),
            other => Err(other),
        }
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured(err) => Display::fmt(err, f),
            Self::Opaque(err) => Display::fmt(err, f),
        }
    }
}

impl core::error::Error for Failure {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Structured(err) => Some(err),
            Self::Opaque(err) => Some(err.as_ref()),
        }
    }
}

impl From<ValidationError> for Failure {
    #[inline]
    fn from(err: ValidationError) -> Self {
        Self::Structured(err)
    }
}

impl From<BoxedError> for Failure {
    #[inline]
    fn from(err: BoxedError) -> Self {
        Self::Opaque(err)
    }
}
