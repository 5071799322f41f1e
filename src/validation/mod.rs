//! Field groups and the aggregator that combines them.
//!
//! A validation is a list of [`FieldGroup`](crate::traits::FieldGroup)s,
//! evaluated in order by [`validate_struct`] (usually through
//! [`valid_struct!`](crate::valid_struct)):
//!
//! - [`field`] - rules over one value, short-circuiting
//! - [`each`] - the same rules over every element of a slice
//! - [`slice`] - a per-element validation function
//! - [`nested`] - delegation to a [`Validatable`](crate::traits::Validatable)
//!   value, optional value, or collection
//!
//! Errors from delegates are re-pathed under the group's path. Delegates that
//! fail without a [`ValidationError`](crate::ValidationError) anywhere in
//! their error chain are reported as a single `invalid` error at that path.
//!
//! # Examples
//!
//! ```
//! use valid_rail::rules::{min, one_of, required};
//! use valid_rail::validation::{each, field};
//! use valid_rail::{valid_struct, Context};
//!
//! let ctx = Context::new();
//! let types = ["card", "crypto"];
//!
//! let err = valid_struct!(&ctx,
//!     field("Amount", &0, &[&required(), &min(1)]),
//!     each("Types", &types, &[&one_of(["card", "bank_transfer"])]),
//! )
//! .unwrap_err();
//!
//! assert_eq!(err.paths().collect::<Vec<_>>(), ["Amount", "Types.1"]);
//! ```
pub mod core;
pub mod delegate;
pub mod leaf;

pub use self::core::{validate_groups, validate_struct};
pub use self::delegate::{nested, slice, Nested, NestedGroup, Slice};
pub use self::leaf::{each, field, Each, Field};
