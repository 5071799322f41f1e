//! Ordering, equality and membership rules.
//!
//! [`one_of`] checks a value against an allow-list; [`includes`] checks that a
//! collection holds an element.
//!
//! Limits only need to [`Borrow`] the resolved value type, so `one_of(["a"])`
//! applies to `str`, `&str` and `String` fields alike. Values that cannot be
//! ordered against the limit (NaN) are reported as violations.

use crate::context::Context;
use crate::rules::resolve::{Resolve, Zero};
use crate::rules::{codes, violation};
use crate::traits::Rule;
use crate::types::alloc_type::{String, ToString, Vec};
use crate::types::Violation;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Min,
    Max,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Op {
    fn code(self) -> &'static str {
        match self {
            Op::Min => codes::MIN,
            Op::Max => codes::MAX,
            Op::Gt => codes::GT,
            Op::Gte => codes::GTE,
            Op::Lt => codes::LT,
            Op::Lte => codes::LTE,
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Op::Min => "min",
            Op::Max => "max",
            _ => "value",
        }
    }

    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Op::Min | Op::Gte => ordering != Ordering::Less,
            Op::Max | Op::Lte => ordering != Ordering::Greater,
            Op::Gt => ordering == Ordering::Greater,
            Op::Lt => ordering == Ordering::Less,
        }
    }
}

/// Compares a value against a single limit.
#[derive(Debug, Clone, PartialEq)]
pub struct Compare<T> {
    limit: T,
    op: Op,
}

/// Value must be `>= min`.
#[inline]
pub fn min<T>(min: T) -> Compare<T> {
    Compare { limit: min, op: Op::Min }
}

/// Value must be `<= max`.
#[inline]
pub fn max<T>(max: T) -> Compare<T> {
    Compare { limit: max, op: Op::Max }
}

#[inline]
pub fn greater_than<T>(limit: T) -> Compare<T> {
    Compare { limit, op: Op::Gt }
}

#[inline]
pub fn greater_than_or_equal<T>(limit: T) -> Compare<T> {
    Compare { limit, op: Op::Gte }
}

#[inline]
pub fn less_than<T>(limit: T) -> Compare<T> {
    Compare { limit, op: Op::Lt }
}

#[inline]
pub fn less_than_or_equal<T>(limit: T) -> Compare<T> {
    Compare { limit, op: Op::Lte }
}

impl<V, T> Rule<V> for Compare<T>
where
    V: Resolve + ?Sized,
    V::Inner: PartialOrd,
    T: Borrow<V::Inner> + Display,
{
    fn check(&self, _: &Context, value: &V) -> Option<Violation> {
        let inner = value.resolve()?;
        let limit: &V::Inner = self.limit.borrow();
        match inner.partial_cmp(limit) {
            Some(ordering) if self.op.accepts(ordering) => None,
            _ => Some(violation(self.op.code(), &[(self.op.placeholder(), &self.limit)])),
        }
    }
}

/// Value must lie in the inclusive range `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Between<T> {
    min: T,
    max: T,
}

#[inline]
pub fn between<T>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

impl<V, T> Rule<V> for Between<T>
where
    V: Resolve + ?Sized,
    V::Inner: PartialOrd,
    T: Borrow<V::Inner> + Display,
{
    fn check(&self, _: &Context, value: &V) -> Option<Violation> {
        let inner = value.resolve()?;
        let (min, max): (&V::Inner, &V::Inner) = (self.min.borrow(), self.max.borrow());
        let above_min = matches!(inner.partial_cmp(min), Some(Ordering::Greater | Ordering::Equal));
        let below_max = matches!(inner.partial_cmp(max), Some(Ordering::Less | Ordering::Equal));
        if above_min && below_max {
            None
        } else {
            Some(violation(codes::BETWEEN, &[("min", &self.min), ("max", &self.max)]))
        }
    }
}

/// Value must equal the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Equal<T> {
    target: T,
}

#[inline]
pub fn equal<T>(target: T) -> Equal<T> {
    Equal { target }
}

impl<V, T> Rule<V> for Equal<T>
where
    V: Resolve + ?Sized,
    V::Inner: PartialEq,
    T: Borrow<V::Inner> + Display,
{
    fn check(&self, _: &Context, value: &V) -> Option<Violation> {
        let inner = value.resolve()?;
        let target: &V::Inner = self.target.borrow();
        (inner != target).then(|| violation(codes::EQ, &[("value", &self.target)]))
    }
}

/// Value must be one of an allow-list.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf<T> {
    allowed: Vec<T>,
}

/// Builds an allow-list rule from any iterator of accepted values.
pub fn one_of<T, I>(allowed: I) -> OneOf<T>
where
    I: IntoIterator<Item = T>,
{
    OneOf { allowed: allowed.into_iter().collect() }
}

impl<T: Display> OneOf<T> {
    fn listing(&self) -> String {
        let mut listing = String::new();
        for (i, value) in self.allowed.iter().enumerate() {
            if i > 0 {
                listing.push_str(", ");
            }
            listing.push_str(&value.to_string());
        }
        listing
    }
}

impl<V, T> Rule<V> for OneOf<T>
where
    V: Resolve + ?Sized,
    V::Inner: PartialEq,
    T: Borrow<V::Inner> + Display,
{
    fn check(&self, _: &Context, value: &V) -> Option<Violation> {
        let inner = value.resolve()?;
        let accepted = self.allowed.iter().any(|allowed| {
            let allowed: &V::Inner = allowed.borrow();
            allowed == inner
        });
        if accepted {
            return None;
        }
        Some(violation(codes::ONE_OF, &[("values", &self.listing())]))
    }
}

/// Collection must hold an element equal to `element`.
///
/// The collection counterpart of [`contains`](crate::rules::contains), reported
/// with the same `CONTAINS` code.
///
/// # Examples
///
/// ```
/// use valid_rail::rules::{codes, includes};
/// use valid_rail::traits::Rule;
/// use valid_rail::Context;
///
/// let tags = vec![String::from("urgent")];
/// let violation = includes("promo").check(&Context::new(), &tags).unwrap();
/// assert_eq!(violation.code, codes::CONTAINS);
/// assert_eq!(violation.message, "must contain promo");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Includes<T> {
    element: T,
}

#[inline]
pub fn includes<T>(element: T) -> Includes<T> {
    Includes { element }
}

impl<V, E, T> Rule<V> for Includes<T>
where
    V: Resolve<Inner = [E]> + ?Sized,
    E: PartialEq<T>,
    T: Display,
{
    fn check(&self, _: &Context, value: &V) -> Option<Violation> {
        let items = value.resolve()?;
        if items.iter().any(|item| *item == self.element) {
            return None;
        }
        Some(violation(codes::CONTAINS, &[("value", &self.element)]))
    }
}

/// Value must be strictly greater than zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Positive;

#[inline]
pub fn positive() -> Positive {
    Positive
}

impl<V> Rule<V> for Positive
where
    V: Resolve + ?Sized,
    V::Inner: Zero + Sized,
{
    fn check(&self, _: &Context, value: &V) -> Option<Violation> {
        let inner = value.resolve()?;
        match inner.partial_cmp(&<V::Inner as Zero>::zero()) {
            Some(Ordering::Greater) => None,
            _ => Some(violation(codes::POSITIVE, &[])),
        }
    }
}

/// Value must be zero or greater.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonNegative;

#[inline]
pub fn non_negative() -> NonNegative {
    NonNegative
}

impl<V> Rule<V> for NonNegative
where
    V: Resolve + ?Sized,
    V::Inner: Zero + Sized,
{
    fn check(&self, _: &Context, value: &V) -> Option<Violation> {
        let inner = value.resolve()?;
        match inner.partial_cmp(&<V::Inner as Zero>::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => None,
            _ => Some(violation(codes::NON_NEGATIVE, &[])),
        }
    }
}
