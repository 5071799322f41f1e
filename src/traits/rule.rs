use crate::context::Context;
use crate::types::Violation;

/// A stateless predicate over one value.
///
/// A rule returns `None` when `value` is acceptable and a [`Violation`]
/// otherwise. Rules must not mutate anything reachable from `value`.
///
/// Any `Fn(&Context, &V) -> Option<Violation>` is a rule, so ad-hoc checks
/// can be written inline or as plain functions.
///
/// # Examples
///
/// ```
/// use valid_rail::traits::Rule;
/// use valid_rail::{Context, Violation};
///
/// fn even(_: &Context, value: &u32) -> Option<Violation> {
///     (value % 2 != 0).then(|| Violation::new("EVEN", "must be even"))
/// }
///
/// let ctx = Context::new();
/// assert!(even.check(&ctx, &4).is_none());
/// assert_eq!(even.check(&ctx, &3).unwrap().code, "EVEN");
/// ```
pub trait Rule<V: ?Sized> {
    fn check(&self, ctx: &Context, value: &V) -> Option<Violation>;
}

impl<V, F> Rule<V> for F
where
    V: ?Sized,
    F: Fn(&Context, &V) -> Option<Violation>,
{
    #[inline]
    fn check(&self, ctx: &Context, value: &V) -> Option<Violation> {
        self(ctx, value)
    }
}

/// First violation reported by `rules` in order; later rules are not run.
pub fn first_violation<V: ?Sized>(
    ctx: &Context,
    value: &V,
    rules: &[&dyn Rule<V>],
) -> Option<Violation> {
    rules.iter().find_map(|rule| rule.check(ctx, value))
}
