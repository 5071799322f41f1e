//! Value projections used by the bundled rules.
//!
//! [`Resolve`] replaces runtime type probing: an `Option<T>` resolves to
//! `None` (the rule is skipped) or to the projection of its content, and owned
//! text resolves to `str` so that `String`, `&str` and `str` fields share the
//! same rules.

use crate::types::alloc_type::{BTreeMap, BTreeSet, Box, Cow, String, Vec};
#[cfg(feature = "std")]
use crate::types::alloc_type::{HashMap, HashSet};

/// Projection of a field value onto the type a rule compares against.
///
/// Returns `None` when the value is absent; constraint rules then report
/// nothing.
pub trait Resolve {
    type Inner: ?Sized;

    fn resolve(&self) -> Option<&Self::Inner>;
}

macro_rules! resolve_to_self {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Resolve for $ty {
                type Inner = $ty;

                #[inline]
                fn resolve(&self) -> Option<&Self::Inner> {
                    Some(self)
                }
            }
        )*
    };
}

resolve_to_self!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str
);

impl Resolve for String {
    type Inner = str;

    #[inline]
    fn resolve(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Resolve for Cow<'_, str> {
    type Inner = str;

    #[inline]
    fn resolve(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T> Resolve for [T] {
    type Inner = [T];

    #[inline]
    fn resolve(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T> Resolve for Vec<T> {
    type Inner = [T];

    #[inline]
    fn resolve(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T, const N: usize> Resolve for [T; N] {
    type Inner = [T];

    #[inline]
    fn resolve(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T: Resolve + ?Sized> Resolve for &T {
    type Inner = T::Inner;

    #[inline]
    fn resolve(&self) -> Option<&Self::Inner> {
        (**self).resolve()
    }
}

impl<T: Resolve + ?Sized> Resolve for Box<T> {
    type Inner = T::Inner;

    #[inline]
    fn resolve(&self) -> Option<&Self::Inner> {
        (**self).resolve()
    }
}

impl<T: Resolve> Resolve for Option<T> {
    type Inner = T::Inner;

    #[inline]
    fn resolve(&self) -> Option<&Self::Inner> {
        self.as_ref().and_then(Resolve::resolve)
    }
}

/// Whether a value counts as provided for [`required`](crate::rules::required).
///
/// Zero numbers, `false`, `'\0'`, empty text, empty collections and maps,
/// and arrays whose elements are all missing count as missing. `Some(_)` is
/// always present, whatever it holds.
pub trait Presence {
    fn is_present(&self) -> bool;
}

macro_rules! presence_non_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Presence for $ty {
                #[inline]
                fn is_present(&self) -> bool {
                    *self != <$ty>::default()
                }
            }
        )*
    };
}

presence_non_default!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

impl Presence for str {
    #[inline]
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    #[inline]
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for Cow<'_, str> {
    #[inline]
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for [T] {
    #[inline]
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    #[inline]
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

/// An array is missing when every element is.
impl<T: Presence, const N: usize> Presence for [T; N] {
    #[inline]
    fn is_present(&self) -> bool {
        self.iter().any(Presence::is_present)
    }
}

impl<T> Presence for Option<T> {
    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    #[inline]
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence + ?Sized> Presence for Box<T> {
    #[inline]
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

/// Length as measured by the length rules: bytes for text, elements for
/// slices, sets and maps.
pub trait HasLength {
    fn length(&self) -> usize;
}

impl HasLength for str {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for [T] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

/// Numeric types with a zero, for sign rules.
pub trait Zero: PartialOrd {
    fn zero() -> Self;
}

macro_rules! zero_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Zero for $ty {
                #[inline]
                fn zero() -> Self {
                    <$ty>::default()
                }
            }
        )*
    };
}

zero_default!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! container_impls {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Resolve for $ty {
                type Inner = Self;

                #[inline]
                fn resolve(&self) -> Option<&Self> {
                    Some(self)
                }
            }

            impl<$($gen)*> Presence for $ty {
                #[inline]
                fn is_present(&self) -> bool {
                    !self.is_empty()
                }
            }

            impl<$($gen)*> HasLength for $ty {
                #[inline]
                fn length(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

container_impls!([K, V] BTreeMap<K, V>, [T] BTreeSet<T>);

#[cfg(feature = "std")]
container_impls!([K, V, S] HashMap<K, V, S>, [T, S] HashSet<T, S>);
