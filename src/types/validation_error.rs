use crate::types::alloc_type::{String, Vec};
use crate::types::field_error::FieldError;
use crate::types::report::ReportBuilder;
use crate::types::FieldErrors;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered, non-empty collection of [`FieldError`]s produced by one validation.
///
/// A `ValidationError` can only be obtained through constructors that refuse
/// an empty field list, so holding one always means at least one position
/// failed. Field order is evaluation order.
///
/// # Examples
///
/// ```
/// use valid_rail::{FieldError, ValidationError};
///
/// assert!(ValidationError::from_fields(Vec::<FieldError>::new()).is_none());
///
/// let err = ValidationError::single(FieldError::new("Name", "REQUIRED", "is required"));
/// assert_eq!(err.len(), 1);
/// assert_eq!(err.to_string(), "validation failed: Name (REQUIRED)");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<FieldError>", into = "Vec<FieldError>"))]
pub struct ValidationError {
    fields: FieldErrors,
}

impl ValidationError {
    /// Builds an error from `fields`, or `None` when there are none.
    pub fn from_fields<I>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = FieldError>,
    {
        let fields: FieldErrors = fields.into_iter().collect();
        if fields.is_empty() {
            None
        } else {
            Some(Self { fields })
        }
    }

    /// Builds an error holding exactly one field.
    #[inline]
    pub fn single(field: FieldError) -> Self {
        let mut fields = FieldErrors::new();
        fields.push(field);
        Self { fields }
    }

    #[inline]
    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, FieldError> {
        self.fields.iter()
    }

    /// Number of failed positions; never zero.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Paths of every failed position, in order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldError::path)
    }

    /// First field recorded at exactly `path`.
    pub fn get(&self, path: &str) -> Option<&FieldError> {
        self.fields.iter().find(|f| f.path() == path)
    }

    /// Every field at `path` or beneath it.
    pub fn under<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.fields.iter().filter(move |f| is_under(f.path(), path))
    }

    /// Copies every field with its path placed beneath `prefix`.
    pub fn prefixed(&self, prefix: &str) -> Self {
        Self { fields: self.fields.iter().map(|f| f.prefixed(prefix)).collect() }
    }

    #[inline]
    pub fn into_fields(self) -> FieldErrors {
        self.fields
    }

    /// Starts a configurable text rendering of this error.
    #[inline]
    pub fn report(&self) -> ReportBuilder<'_> {
        ReportBuilder::new(self)
    }

    /// Renders the error with `config` applied.
    pub fn report_with(&self, config: &crate::types::report::ReportConfig) -> String {
        use crate::types::alloc_type::ToString;
        self.report().config(config.clone()).to_string()
    }
}

fn is_under(path: &str, ancestor: &str) -> bool {
    crate::types::field_error::is_same_or_descendant(path, ancestor)
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation failed: ")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} ({})", field.path(), field.code())?;
        }
        Ok(())
    }
}

impl core::error::Error for ValidationError {}

impl<'a> IntoIterator for &'a ValidationError {
    type Item = &'a FieldError;
    type IntoIter = core::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl IntoIterator for ValidationError {
    type Item = FieldError;
    type IntoIter = smallvec::IntoIter<[FieldError; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl From<FieldError> for ValidationError {
    fn from(field: FieldError) -> Self {
        Self::single(field)
    }
}

impl From<ValidationError> for Vec<FieldError> {
    fn from(err: ValidationError) -> Self {
        err.fields.into_vec()
    }
}

/// Rejection returned when converting an empty field list into a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyFields;

impl Display for EmptyFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation error must contain at least one field")
    }
}

impl core::error::Error for EmptyFields {}

impl TryFrom<Vec<FieldError>> for ValidationError {
    type Error = EmptyFields;

    fn try_from(fields: Vec<FieldError>) -> Result<Self, Self::Error> {
        Self::from_fields(fields).ok_or(EmptyFields)
    }
}

/// Finds a [`ValidationError`] in `err` or anywhere along its `source()` chain.
///
/// # Examples
///
/// ```
/// use valid_rail::{find_validation_error, FieldError, ValidationError};
///
/// let inner = ValidationError::single(FieldError::new("X", "ERR", ""));
/// let found = find_validation_error(&inner).map(|e| e.len());
/// assert_eq!(found, Some(1));
/// ```
pub fn find_validation_error<'a>(
    err: &'a (dyn core::error::Error + 'static),
) -> Option<&'a ValidationError> {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(found) = err.downcast_ref::<ValidationError>() {
            return Some(found);
        }
        current = err.source();
    }
    None
}
