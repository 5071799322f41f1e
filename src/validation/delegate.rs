//! Field groups that hand validation over to other code and fold the
//! resulting [`ValidationError`](crate::ValidationError)s back under a path.

use crate::context::Context;
use crate::traits::{FieldGroup, Validatable};
use crate::types::field_error::index_path;
use crate::types::{Failure, FieldError, FieldErrors};

/// Re-paths a delegate's failure under `path`.
///
/// Structured fields become `<path>.<field path>`. Anything else becomes a
/// single `invalid` marker at `path`. A field with an empty path lands at
/// `path` itself, with no trailing dot.
pub(crate) fn flatten(path: &str, failure: &Failure) -> FieldErrors {
    match failure.as_validation_error() {
        Some(err) => err.iter().map(|field| field.prefixed(path)).collect(),
        None => {
            crate::macros::trace_event!(path, error = %failure, "delegate failed without field errors");
            let mut errors = FieldErrors::new();
            errors.push(FieldError::invalid(path));
            errors
        },
    }
}

fn delegate<T: Validatable + ?Sized>(ctx: &Context, path: &str, target: &T) -> FieldErrors {
    match target.validate(ctx) {
        Ok(()) => FieldErrors::new(),
        Err(failure) => flatten(path, &failure),
    }
}

/// Field group created by [`slice`].
pub struct Slice<'a, T, F> {
    path: &'a str,
    items: &'a [T],
    validate: F,
}

/// Validates each element of `items` with `validate(ctx, index, item)`.
///
/// The function may return a [`ValidationError`](crate::ValidationError)
/// (its fields land under `<path>.<index>`), a [`Failure`], or anything else
/// convertible into one. Failures without field errors are reported as
/// `invalid` at `<path>.<index>`. A field reported at `""` keeps its code
/// and lands at `<path>.<index>` itself.
///
/// # Examples
///
/// ```
/// use valid_rail::rules::{min, required};
/// use valid_rail::traits::FieldGroup;
/// use valid_rail::validation::{field, slice};
/// use valid_rail::{valid_struct, Context};
///
/// struct Item {
///     name: &'static str,
///     quantity: i32,
/// }
///
/// let items = [Item { name: "Widget", quantity: 2 }, Item { name: "", quantity: 0 }];
/// let group = slice("Items", &items, |ctx, _, item| {
///     valid_struct!(ctx,
///         field("Name", item.name, &[&required()]),
///         field("Quantity", &item.quantity, &[&min(1)]),
///     )
/// });
///
/// let errors = group.evaluate(&Context::new());
/// let paths: Vec<_> = errors.iter().map(|e| e.path()).collect();
/// assert_eq!(paths, ["Items.1.Name", "Items.1.Quantity"]);
/// ```
pub fn slice<'a, T, F, E>(path: &'a str, items: &'a [T], validate: F) -> Slice<'a, T, F>
where
    F: Fn(&Context, usize, &T) -> Result<(), E>,
    E: Into<Failure>,
{
    Slice { path, items, validate }
}

impl<T, F, E> FieldGroup for Slice<'_, T, F>
where
    F: Fn(&Context, usize, &T) -> Result<(), E>,
    E: Into<Failure>,
{
    fn evaluate(&self, ctx: &Context) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for (index, item) in self.items.iter().enumerate() {
            if let Err(err) = (self.validate)(ctx, index, item) {
                errors.extend(flatten(&index_path(self.path, index), &err.into()));
            }
        }
        errors
    }
}

/// Shape of the value handed to [`nested`].
///
/// The shape is chosen by the caller from the field's static type: a plain
/// reference is a `Scalar`, a slice is a `Collection`, and a missing optional
/// value is `Absent`.
#[derive(Debug)]
pub enum Nested<'a, T> {
    Absent,
    Scalar(&'a T),
    Collection(&'a [T]),
}

impl<T> Clone for Nested<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Nested<'_, T> {}

impl<'a, T> Nested<'a, T> {
    #[inline]
    pub fn absent() -> Self {
        Self::Absent
    }

    #[inline]
    pub fn scalar(value: &'a T) -> Self {
        Self::Scalar(value)
    }

    /// One level of optional indirection; `None` is absent.
    #[inline]
    pub fn optional(value: Option<&'a T>) -> Self {
        value.map_or(Self::Absent, Self::Scalar)
    }

    #[inline]
    pub fn collection(items: &'a [T]) -> Self {
        Self::Collection(items)
    }

    /// An optional collection; `None` is absent.
    #[inline]
    pub fn optional_collection(items: Option<&'a [T]>) -> Self {
        items.map_or(Self::Absent, Self::Collection)
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Field group created by [`nested`].
pub struct NestedGroup<'a, T> {
    path: &'a str,
    target: Nested<'a, T>,
}

/// Delegates to `target`'s own [`Validatable`] implementation.
///
/// A scalar's fields are reported under `<path>`, a collection element's under
/// `<path>.<index>`. An absent target reports nothing: pair it with a
/// [`required`](crate::rules::required) field check, listed first, when
/// presence matters.
///
/// # Examples
///
/// ```
/// use valid_rail::rules::greater_than;
/// use valid_rail::traits::FieldGroup;
/// use valid_rail::validation::{field, nested, Nested};
/// use valid_rail::{valid_struct, Context, DelegateResult, Validatable};
///
/// struct Discount {
///     amount: u32,
/// }
///
/// impl Validatable for Discount {
///     fn validate(&self, ctx: &Context) -> DelegateResult {
///         Ok(valid_struct!(ctx, field("Amount", &self.amount, &[&greater_than(0u32)]))?)
///     }
/// }
///
/// let discounts = [Discount { amount: 0 }, Discount { amount: 5 }, Discount { amount: 0 }];
/// let errors = nested("Discounts", Nested::collection(&discounts)).evaluate(&Context::new());
///
/// let paths: Vec<_> = errors.iter().map(|e| e.path()).collect();
/// assert_eq!(paths, ["Discounts.0.Amount", "Discounts.2.Amount"]);
/// ```
pub fn nested<'a, T: Validatable>(path: &'a str, target: Nested<'a, T>) -> NestedGroup<'a, T> {
    NestedGroup { path, target }
}

impl<T: Validatable> FieldGroup for NestedGroup<'_, T> {
    fn evaluate(&self, ctx: &Context) -> FieldErrors {
        match self.target {
            Nested::Absent => FieldErrors::new(),
            Nested::Scalar(value) => delegate(ctx, self.path, value),
            Nested::Collection(items) => items
                .iter()
                .enumerate()
                .flat_map(|(index, item)| delegate(ctx, &index_path(self.path, index), item))
                .collect(),
        }
    }
}
