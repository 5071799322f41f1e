use crate::context::Context;
use crate::traits::{first_violation, FieldGroup, Rule};
use crate::types::field_error::index_path;
use crate::types::FieldErrors;

/// Field group created by [`field`].
pub struct Field<'a, V: ?Sized> {
    path: &'a str,
    value: &'a V,
    rules: &'a [&'a dyn Rule<V>],
}

/// Checks `value` against `rules` in order, stopping at the first violation.
///
/// Produces at most one error, at `path`, carrying the failing rule's code
/// and message unchanged.
///
/// # Examples
///
/// ```
/// use valid_rail::rules::{codes, has_prefix, required};
/// use valid_rail::traits::FieldGroup;
/// use valid_rail::validation::field;
/// use valid_rail::Context;
///
/// let ctx = Context::new();
/// let errors = field("TransactionID", "", &[&required(), &has_prefix("txn_")]).evaluate(&ctx);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].code(), codes::REQUIRED);
/// ```
pub fn field<'a, V: ?Sized>(
    path: &'a str,
    value: &'a V,
    rules: &'a [&'a dyn Rule<V>],
) -> Field<'a, V> {
    Field { path, value, rules }
}

impl<V: ?Sized> FieldGroup for Field<'_, V> {
    fn evaluate(&self, ctx: &Context) -> FieldErrors {
        first_violation(ctx, self.value, self.rules)
            .map(|violation| violation.at(self.path))
            .into_iter()
            .collect()
    }
}

/// Field group created by [`each`].
pub struct Each<'a, T> {
    path: &'a str,
    items: &'a [T],
    rules: &'a [&'a dyn Rule<T>],
}

/// Checks every element of `items` against `rules`, short-circuiting per
/// element.
///
/// A failing element is reported at `<path>.<index>`, in ascending index
/// order.
///
/// # Examples
///
/// ```
/// use valid_rail::rules::one_of;
/// use valid_rail::traits::FieldGroup;
/// use valid_rail::validation::each;
/// use valid_rail::Context;
///
/// let types = ["card", "crypto", "cash"];
/// let errors = each("Types", &types, &[&one_of(["card", "bank_transfer"])]).evaluate(&Context::new());
///
/// let paths: Vec<_> = errors.iter().map(|e| e.path()).collect();
/// assert_eq!(paths, ["Types.1", "Types.2"]);
/// ```
pub fn each<'a, T>(path: &'a str, items: &'a [T], rules: &'a [&'a dyn Rule<T>]) -> Each<'a, T> {
    Each { path, items, rules }
}

impl<T> FieldGroup for Each<'_, T> {
    fn evaluate(&self, ctx: &Context) -> FieldErrors {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                first_violation(ctx, item, self.rules)
                    .map(|violation| violation.at(&index_path(self.path, index)))
            })
            .collect()
    }
}
