//! Bundled predicate rules.
//!
//! These are ordinary [`Rule`](crate::traits::Rule) implementations; the
//! validation core treats their codes and messages as opaque strings. Every
//! constraint rule skips absent values (`None`), while [`required`] is the
//! one rule that reports them.
//!
//! # Examples
//!
//! ```
//! use valid_rail::rules::{codes, has_prefix, min, one_of, required};
//! use valid_rail::traits::Rule;
//! use valid_rail::Context;
//!
//! let ctx = Context::new();
//! assert_eq!(required().check(&ctx, "").unwrap().code, codes::REQUIRED);
//! assert!(min(1).check(&ctx, &None::<i32>).is_none());
//! assert_eq!(min(1).check(&ctx, &Some(0)).unwrap().message, "must be >= 1");
//! assert!(one_of(["card", "bank_transfer"]).check(&ctx, "card").is_none());
//! assert!(has_prefix("txn_").check(&ctx, "txn_42").is_none());
//! ```

pub mod charset;
pub mod compare;
pub mod length;
pub mod messages;
pub mod presence;
pub mod resolve;
pub mod text;

pub use charset::{alpha, alphanumeric, numeric, Charset};
pub use compare::{
    between, equal, greater_than, greater_than_or_equal, includes, less_than, less_than_or_equal,
    max, min, non_negative, one_of, positive, Between, Compare, Equal, Includes, NonNegative,
    OneOf, Positive,
};
pub use length::{length, max_length, min_length, Length};
pub use messages::{format_message, template};
pub use presence::{not_empty, required, NotEmpty, Required};
pub use resolve::{HasLength, Presence, Resolve, Zero};
pub use text::{contains, has_prefix, has_suffix, Affix};

/// Violation codes reported by the bundled rules.
pub mod codes {
    pub const REQUIRED: &str = "REQUIRED";
    pub const NOT_EMPTY: &str = "NOT_EMPTY";
    pub const MIN: &str = "MIN";
    pub const MAX: &str = "MAX";
    pub const BETWEEN: &str = "BETWEEN";
    pub const GT: &str = "GT";
    pub const GTE: &str = "GTE";
    pub const LT: &str = "LT";
    pub const LTE: &str = "LTE";
    pub const EQ: &str = "EQ";
    pub const POSITIVE: &str = "POSITIVE";
    pub const NON_NEGATIVE: &str = "NON_NEGATIVE";
    pub const ONE_OF: &str = "ONE_OF";
    pub const HAS_PREFIX: &str = "HAS_PREFIX";
    pub const HAS_SUFFIX: &str = "HAS_SUFFIX";
    pub const CONTAINS: &str = "CONTAINS";
    pub const LENGTH: &str = "LENGTH";
    pub const MIN_LENGTH: &str = "MIN_LENGTH";
    pub const MAX_LENGTH: &str = "MAX_LENGTH";
    pub const NUMERIC: &str = "NUMERIC";
    pub const ALPHA: &str = "ALPHA";
    pub const ALPHANUMERIC: &str = "ALPHANUMERIC";

    pub const ALL: &[&str] = &[
        REQUIRED,
        NOT_EMPTY,
        MIN,
        MAX,
        BETWEEN,
        GT,
        GTE,
        LT,
        LTE,
        EQ,
        POSITIVE,
        NON_NEGATIVE,
        ONE_OF,
        HAS_PREFIX,
        HAS_SUFFIX,
        CONTAINS,
        LENGTH,
        MIN_LENGTH,
        MAX_LENGTH,
        NUMERIC,
        ALPHA,
        ALPHANUMERIC,
    ];
}

pub(crate) fn violation(code: &'static str, params: &[(&str, &dyn core::fmt::Display)]) -> crate::Violation {
    crate::Violation::new(code, format_message(code, params))
}
