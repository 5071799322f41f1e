//! Composable struct validation with path-addressed, deduplicated reports.
//!
//! A validation is written as an ordered list of field groups. Each group
//! checks one field with predicate rules, every element of a collection, or
//! delegates to a nested value's own validation. The aggregator collects the
//! resulting [`FieldError`]s into a single [`ValidationError`], dropping errors
//! beneath a path that has already failed.
//!
//! Every module re-exports its public surface from here, so consumers can
//! depend on `valid_rail::*` or the [`prelude`].
//!
//! # Examples
//!
//! ## Field rules
//!
//! ```
//! use valid_rail::rules::{has_prefix, required};
//! use valid_rail::{field, valid_struct, Context};
//!
//! let ctx = Context::new();
//! let err = valid_struct!(&ctx, field("TransactionID", "42", &[&required(), &has_prefix("txn_")]))
//!     .unwrap_err();
//!
//! assert_eq!(err.to_string(), "validation failed: TransactionID (HAS_PREFIX)");
//! ```
//!
//! ## Nested values
//!
//! ```
//! use valid_rail::rules::{one_of, required};
//! use valid_rail::{field, nested, valid_struct, Context, DelegateResult, Nested, Validatable};
//!
//! struct Payment {
//!     method: &'static str,
//! }
//!
//! impl Validatable for Payment {
//!     fn validate(&self, ctx: &Context) -> DelegateResult {
//!         Ok(valid_struct!(ctx, field("Method", self.method, &[&one_of(["card"])]))?)
//!     }
//! }
//!
//! let payment = Some(Payment { method: "cash" });
//! let err = valid_struct!(&Context::new(),
//!     field("Payment", &payment, &[&required()]),
//!     nested("Payment", Nested::optional(payment.as_ref())),
//! )
//! .unwrap_err();
//!
//! assert_eq!(err.paths().collect::<Vec<_>>(), ["Payment.Method"]);
//! ```
//!
//! ## Renaming and recovery
//!
//! ```
//! use valid_rail::{find_validation_error, FieldError, PathMapping, ValidationError};
//!
//! let err = ValidationError::single(FieldError::new("Items.0.Name", "REQUIRED", "is required"));
//! let mapping = PathMapping::new().map("Items.*.Name", "items[*].name");
//! assert_eq!(err.rename(&mapping).paths().collect::<Vec<_>>(), ["items[0].name"]);
//!
//! let recovered = find_validation_error(&err).unwrap();
//! assert_eq!(recovered.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Request-scoped values handed to every rule and delegate
pub mod context;
/// Validation assembly macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Bundled predicate rules and their message catalog
pub mod rules;
/// Rule, Validatable and FieldGroup capability traits
pub mod traits;
/// Field errors, reports, renaming and failure recovery
pub mod types;
/// Field groups and the deduplicating aggregator
pub mod validation;

pub use context::Context;
pub use traits::{first_violation, FieldGroup, RenameExt, Rule, Validatable};
pub use types::{
    find_validation_error, BoxedError, DelegateResult, EmptyFields, Failure, FieldError,
    FieldErrors, PathAccumulator, PathMapping, ReportBuilder, ReportConfig, ValidationError,
    ValidationResult, Violation, INVALID_CODE,
};
pub use validation::{
    each, field, nested, slice, validate_groups, validate_struct, Each, Field, Nested,
    NestedGroup, Slice,
};
