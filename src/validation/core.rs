use crate::context::Context;
use crate::traits::FieldGroup;
use crate::types::accumulator::PathAccumulator;
use crate::types::ValidationResult;

/// Evaluates `groups` in order and aggregates their errors.
///
/// Within a group, errors keep the order the group produced them. An error is
/// dropped when an earlier recorded error sits at the same path or at one of
/// its dot-ancestors, so a failed `Payment` hides later `Payment.*` errors.
/// A parent recorded *after* its descendants does not retroactively remove
/// them.
///
/// [`valid_struct!`](crate::valid_struct) is the usual way to call this.
///
/// # Examples
///
/// ```
/// use valid_rail::rules::required;
/// use valid_rail::validation::{field, validate_struct};
/// use valid_rail::Context;
///
/// let ctx = Context::new();
///
/// // Descendant first: both are kept.
/// let err = validate_struct(&ctx, &[
///     &field("Address.City", "", &[&required()]),
///     &field("Address", &None::<u8>, &[&required()]),
/// ])
/// .unwrap_err();
/// assert_eq!(err.len(), 2);
///
/// // Ancestor first: the descendant is suppressed.
/// let err = validate_struct(&ctx, &[
///     &field("Address", &None::<u8>, &[&required()]),
///     &field("Address.City", "", &[&required()]),
/// ])
/// .unwrap_err();
/// assert_eq!(err.paths().collect::<Vec<_>>(), ["Address"]);
/// ```
pub fn validate_struct(ctx: &Context, groups: &[&dyn FieldGroup]) -> ValidationResult {
    validate_groups(ctx, groups.iter().copied())
}

/// Iterator form of [`validate_struct`], for group lists built at runtime.
pub fn validate_groups<'g, I>(ctx: &Context, groups: I) -> ValidationResult
where
    I: IntoIterator<Item = &'g dyn FieldGroup>,
{
    let mut acc = PathAccumulator::new();
    let mut _evaluated = 0usize;
    for group in groups {
        _evaluated += 1;
        acc.record_all(group.evaluate(ctx));
    }

    match acc.into_error() {
        None => Ok(()),
        Some(err) => {
            crate::macros::debug_event!(
                groups = _evaluated,
                errors = err.len(),
                "validation failed"
            );
            Err(err)
        },
    }
}
