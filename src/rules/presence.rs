use crate::context::Context;
use crate::rules::resolve::{HasLength, Presence, Resolve};
use crate::rules::{codes, violation};
use crate::traits::Rule;
use crate::types::Violation;

/// Reports missing values; see [`Presence`] for what counts as missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Required;

#[inline]
pub fn required() -> Required {
    Required
}

impl<V: Presence + ?Sized> Rule<V> for Required {
    fn check(&self, _: &Context, value: &V) -> Option<Violation> {
        (!value.is_present()).then(|| violation(codes::REQUIRED, &[]))
    }
}

/// Reports empty text or collections. Absent values are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotEmpty;

#[inline]
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

impl<V> Rule<V> for NotEmpty
where
    V: Resolve + ?Sized,
    V::Inner: HasLength,
{
    fn check(&self, _: &Context, value: &V) -> Option<Violation> {
        let inner = value.resolve()?;
        (inner.length() == 0).then(|| violation(codes::NOT_EMPTY, &[]))
    }
}
