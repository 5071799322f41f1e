//! Macros for assembling validations.
//!
//! - [`macro@crate::valid_struct`] - Evaluates a list of field groups in order
//!   and aggregates their errors with ancestor deduplication.
//!
//! Internal event macros compile to nothing unless the `tracing` feature is on.
//!
//! # Examples
//!
//! ```
//! use valid_rail::rules::required;
//! use valid_rail::validation::field;
//! use valid_rail::{valid_struct, Context};
//!
//! let ctx = Context::new();
//! let err = valid_struct!(&ctx,
//!     field("A", "", &[&required()]),
//!     field("B", &0u8, &[&required()]),
//! )
//! .unwrap_err();
//!
//! let paths: Vec<_> = err.paths().collect();
//! assert_eq!(paths, ["A", "B"]);
//! ```

/// Evaluates field groups in the order written and aggregates their errors.
///
/// Expands to [`validate_struct`](crate::validation::validate_struct) over a
/// slice of `&dyn FieldGroup`, so differently-typed groups can be mixed.
///
/// # Syntax
///
/// `valid_struct!(ctx, group, group, ...)` where `ctx` is a `&Context`.
///
/// # Returns
///
/// `Ok(())` when nothing failed, otherwise `Err(ValidationError)`.
///
/// # Examples
///
/// ```
/// use valid_rail::rules::required;
/// use valid_rail::validation::{field, nested, Nested};
/// use valid_rail::{valid_struct, Context, DelegateResult, Validatable};
///
/// struct Payment;
///
/// impl Validatable for Payment {
///     fn validate(&self, _: &Context) -> DelegateResult {
///         Ok(())
///     }
/// }
///
/// let payment: Option<Payment> = None;
/// let reference = "";
///
/// let err = valid_struct!(&Context::new(),
///     field("Payment", &payment, &[&required()]),
///     nested("Payment", Nested::optional(payment.as_ref())),
///     field("Reference", reference, &[&required()]),
/// )
/// .unwrap_err();
///
/// let paths: Vec<_> = err.paths().collect();
/// assert_eq!(paths, ["Payment", "Reference"]);
/// ```
#[macro_export]
macro_rules! valid_struct {
    ($ctx:expr $(, $group:expr)* $(,)?) => {
        $crate::validation::validate_struct(
            $ctx,
            &[$(&$group as &dyn $crate::traits::FieldGroup),*],
        )
    };
}

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    };
}

pub(crate) use debug_event;
pub(crate) use trace_event;
