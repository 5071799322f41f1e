use crate::types::{PathMapping, ValidationError};

/// Path renaming for possibly-absent validation errors.
///
/// Renaming nothing yields nothing; the success side of a `Result` passes
/// through untouched.
///
/// # Examples
///
/// ```
/// use valid_rail::traits::RenameExt;
/// use valid_rail::{FieldError, PathMapping, ValidationError};
///
/// let mapping = PathMapping::from([("Reference", "reference")]);
///
/// let none: Option<ValidationError> = None;
/// assert!(none.rename_paths(&mapping).is_none());
///
/// let res: Result<(), ValidationError> =
///     Err(ValidationError::single(FieldError::new("Reference", "REQUIRED", "")));
/// let renamed = res.rename_paths(&mapping).unwrap_err();
/// assert_eq!(renamed.fields()[0].path(), "reference");
/// ```
pub trait RenameExt {
    type Output;

    fn rename_paths(self, mapping: &PathMapping) -> Self::Output;
}

impl RenameExt for Option<ValidationError> {
    type Output = Option<ValidationError>;

    #[inline]
    fn rename_paths(self, mapping: &PathMapping) -> Self::Output {
        self.map(|err| err.rename(mapping))
    }
}

impl RenameExt for Option<&ValidationError> {
    type Output = Option<ValidationError>;

    #[inline]
    fn rename_paths(self, mapping: &PathMapping) -> Self::Output {
        self.map(|err| err.rename(mapping))
    }
}

impl<T> RenameExt for Result<T, ValidationError> {
    type Output = Result<T, ValidationError>;

    #[inline]
    fn rename_paths(self, mapping: &PathMapping) -> Self::Output {
        self.map_err(|err| err.rename(mapping))
    }
}
