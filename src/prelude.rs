//! Convenience re-exports for common usage patterns.
//!
//! Import everything needed to write a validation with:
//!
//! ```
//! use valid_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`valid_struct!`]
//! - **Groups**: [`field`], [`each`], [`slice`], [`nested`], [`Nested`]
//! - **Types**: [`Context`], [`ValidationError`], [`FieldError`], [`Failure`], [`PathMapping`],
//!   [`ReportConfig`], [`Violation`]
//! - **Traits**: [`Validatable`], [`Rule`], [`RenameExt`]
//! - **Rules**: everything in [`rules`](crate::rules)
//!
//! # Examples
//!
//! ```
//! use valid_rail::prelude::*;
//!
//! struct Line {
//!     sku: String,
//!     quantity: u32,
//! }
//!
//! impl Validatable for Line {
//!     fn validate(&self, ctx: &Context) -> DelegateResult {
//!         Ok(valid_struct!(ctx,
//!             field("SKU", &self.sku, &[&required(), &max_length(12)]),
//!             field("Quantity", &self.quantity, &[&between(1u32, 99u32)]),
//!         )?)
//!     }
//! }
//!
//! let line = Line { sku: String::new(), quantity: 100 };
//! let failure = line.validate(&Context::new()).unwrap_err();
//! assert_eq!(failure.as_validation_error().map(ValidationError::len), Some(2));
//! ```

// Macros
pub use crate::valid_struct;

// Groups
pub use crate::validation::{each, field, nested, slice, Nested};

// Core types
pub use crate::types::{
    DelegateResult, Failure, FieldError, PathMapping, ReportConfig, ValidationError,
    ValidationResult, Violation,
};
pub use crate::Context;

// Traits
pub use crate::traits::{RenameExt, Rule, Validatable};

// Rules
pub use crate::rules::*;
