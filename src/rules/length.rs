use crate::context::Context;
use crate::rules::resolve::{HasLength, Resolve};
use crate::rules::{codes, violation};
use crate::traits::Rule;
use crate::types::Violation;

/// Length bounds, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length {
    min: Option<usize>,
    max: Option<usize>,
}

/// Length must lie in `[min, max]`.
#[inline]
pub fn length(min: usize, max: usize) -> Length {
    Length { min: Some(min), max: Some(max) }
}

#[inline]
pub fn min_length(min: usize) -> Length {
    Length { min: Some(min), max: None }
}

#[inline]
pub fn max_length(max: usize) -> Length {
    Length { min: None, max: Some(max) }
}

impl<V> Rule<V> for Length
where
    V: Resolve + ?Sized,
    V::Inner: HasLength,
{
    fn check(&self, _: &Context, value: &V) -> Option<Violation> {
        let len = value.resolve()?.length();
        match (self.min, self.max) {
            (Some(min), Some(max)) if len < min || len > max => {
                Some(violation(codes::LENGTH, &[("min", &min), ("max", &max)]))
            },
            (Some(min), None) if len < min => Some(violation(codes::MIN_LENGTH, &[("min", &min)])),
            (None, Some(max)) if len > max => Some(violation(codes::MAX_LENGTH, &[("max", &max)])),
            _ => None,
        }
    }
}
