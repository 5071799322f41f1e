//! Report types and utilities.
//!
//! This module holds the data produced by a validation run: individual
//! [`FieldError`]s, the non-empty [`ValidationError`] that groups them, the
//! [`Failure`] returned by delegates, and the helpers that build, deduplicate,
//! rename and render them.
//!
//! # Examples
//!
//! ```
//! use valid_rail::{FieldError, PathMapping, ValidationError};
//!
//! let err = ValidationError::from_fields([
//!     FieldError::new("BillingAddress.City", "REQUIRED", "is required"),
//! ])
//! .unwrap();
//!
//! let external = err.rename(&PathMapping::from([("BillingAddress.City", "billingAddress.city")]));
//! assert_eq!(external.to_string(), "validation failed: billingAddress.city (REQUIRED)");
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod alloc_type;
pub mod failure;
pub mod field_error;
pub mod rename;
pub mod report;
pub mod validation_error;
pub mod violation;

pub use accumulator::PathAccumulator;
pub use failure::{BoxedError, Failure};
pub use field_error::{FieldError, INVALID_CODE};
pub use rename::PathMapping;
pub use report::{ReportBuilder, ReportConfig};
pub use validation_error::{find_validation_error, EmptyFields, ValidationError};
pub use violation::Violation;

/// SmallVec-backed list of field errors.
///
/// Inline storage for one element covers the common case of a group that
/// reports a single failure.
pub type FieldErrors = SmallVec<[FieldError; 1]>;

/// Outcome of a top-level validation.
pub type ValidationResult = Result<(), ValidationError>;

/// Outcome of a delegate (a [`Validatable`](crate::traits::Validatable) or a
/// per-element function given to [`slice`](crate::validation::slice)).
pub type DelegateResult = Result<(), Failure>;
