use crate::context::Context;
use crate::types::FieldErrors;

/// A deferred producer of field errors, evaluated once by
/// [`validate_struct`](crate::validation::validate_struct).
///
/// The leaf constructors in [`validation`](crate::validation) all return
/// field groups. Closures of the form `|ctx| -> FieldErrors` are field groups
/// as well, which covers cross-field checks.
///
/// # Examples
///
/// ```
/// use valid_rail::traits::FieldGroup;
/// use valid_rail::{Context, FieldError, FieldErrors};
///
/// let (start, end) = (10, 5);
/// let range = move |_: &Context| -> FieldErrors {
///     let mut errors = FieldErrors::new();
///     if start > end {
///         errors.push(FieldError::new("End", "GTE", "must be >= start"));
///     }
///     errors
/// };
///
/// assert_eq!(range.evaluate(&Context::new()).len(), 1);
/// ```
pub trait FieldGroup {
    fn evaluate(&self, ctx: &Context) -> FieldErrors;
}

impl<F> FieldGroup for F
where
    F: Fn(&Context) -> FieldErrors,
{
    #[inline]
    fn evaluate(&self, ctx: &Context) -> FieldErrors {
        self(ctx)
    }
}
