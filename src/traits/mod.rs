//! Capability traits consumed and produced by the validation core.
//!
//! - [`Rule`]: a predicate over one value, yielding an optional violation
//! - [`Validatable`]: a value that validates itself and may be delegated to
//! - [`FieldGroup`]: a deferred producer of field errors, the unit of composition
//! - [`RenameExt`]: path renaming over `Option`/`Result`-wrapped errors

pub mod field_group;
pub mod rename_ext;
pub mod rule;
pub mod validatable;

pub use field_group::FieldGroup;
pub use rename_ext::RenameExt;
pub use rule::{first_violation, Rule};
pub use validatable::Validatable;
