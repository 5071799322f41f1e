use crate::context::Context;
use crate::types::alloc_type::Box;
use crate::types::DelegateResult;

/// Types that know how to validate themselves.
///
/// Implementations usually end in [`valid_struct!`](crate::valid_struct) and
/// propagate its [`ValidationError`](crate::ValidationError) with `?`, which
/// lets a parent flatten the fields under its own path.
///
/// # Examples
///
/// ```
/// use valid_rail::rules::{one_of, required};
/// use valid_rail::traits::Validatable;
/// use valid_rail::validation::field;
/// use valid_rail::{valid_struct, Context, DelegateResult};
///
/// struct Payment {
///     method: String,
/// }
///
/// impl Validatable for Payment {
///     fn validate(&self, ctx: &Context) -> DelegateResult {
///         valid_struct!(ctx, field("Method", &self.method, &[&required(), &one_of(["card"])]))?;
///         Ok(())
///     }
/// }
///
/// let payment = Payment { method: "cash".into() };
/// let err = payment.validate(&Context::new()).unwrap_err();
/// assert_eq!(err.as_validation_error().unwrap().fields()[0].code(), "ONE_OF");
/// ```
pub trait Validatable {
    fn validate(&self, ctx: &Context) -> DelegateResult;
}

impl<T: Validatable + ?Sized> Validatable for &T {
    #[inline]
    fn validate(&self, ctx: &Context) -> DelegateResult {
        (**self).validate(ctx)
    }
}

impl<T: Validatable + ?Sized> Validatable for Box<T> {
    #[inline]
    fn validate(&self, ctx: &Context) -> DelegateResult {
        (**self).validate(ctx)
    }
}

/// An absent value has nothing to validate.
impl<T: Validatable> Validatable for Option<T> {
    #[inline]
    fn validate(&self, ctx: &Context) -> DelegateResult {
        match self {
            Some(inner) => inner.validate(ctx),
            None => Ok(()),
        }
    }
}
