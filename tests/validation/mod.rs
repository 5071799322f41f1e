use valid_rail::rules::{codes, min, one_of, required};
use valid_rail::traits::{FieldGroup, Rule};
use valid_rail::validation::{each, field, validate_groups, validate_struct};
use valid_rail::{valid_struct, Context, FieldError, FieldErrors, Violation};

mod delegate;

fn fixed(errors: &'static [(&'static str, &'static str)]) -> impl Fn(&Context) -> FieldErrors {
    move |_: &Context| errors.iter().map(|(path, code)| FieldError::new(*path, *code, "")).collect()
}

#[test]
fn field_with_passing_rules_reports_nothing() {
    let ctx = Context::new();
    assert!(field("Amount", &5, &[&required(), &min(1)]).evaluate(&ctx).is_empty());
    assert!(field::<i32>("Amount", &5, &[]).evaluate(&ctx).is_empty());
}

#[test]
fn field_stops_at_first_failing_rule() {
    let ctx = Context::new();
    let first = |_: &Context, _: &i32| Some(Violation::new("A", "first"));
    let second = |_: &Context, _: &i32| Some(Violation::new("B", "second"));

    let errors = field("X", &0, &[&first, &second]).evaluate(&ctx);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0], FieldError::new("X", "A", "first"));
}

#[test]
fn field_does_not_run_rules_after_a_violation() {
    use std::cell::Cell;

    let calls = Cell::new(0);
    let counting = |_: &Context, _: &str| -> Option<Violation> {
        calls.set(calls.get() + 1);
        None
    };

    let errors = field("Name", "", &[&required(), &counting]).evaluate(&Context::new());
    assert_eq!(errors[0].code(), codes::REQUIRED);
    assert_eq!(calls.get(), 0);
}

#[test]
fn each_reports_failing_indices_in_order() {
    let types = ["card", "crypto", "cash"];
    let errors = each("Types", &types, &[&one_of(["card", "bank_transfer"])]).evaluate(&Context::new());

    let paths: Vec<_> = errors.iter().map(FieldError::path).collect();
    assert_eq!(paths, ["Types.1", "Types.2"]);
    assert!(errors.iter().all(|e| e.code() == codes::ONE_OF));
}

#[test]
fn each_over_empty_slice_reports_nothing() {
    let empty: [&str; 0] = [];
    assert!(each("Types", &empty, &[&required()]).evaluate(&Context::new()).is_empty());
}

#[test]
fn struct_without_errors_is_ok() {
    let ctx = Context::new();
    assert!(valid_struct!(&ctx).is_ok());
    assert!(valid_struct!(&ctx, field("Name", "Ada", &[&required()])).is_ok());
}

#[test]
fn struct_suppresses_descendants_of_failed_paths() {
    let ctx = Context::new();
    let parent = fixed(&[("Payment", "C1")]);
    let child = fixed(&[("Payment.Method", "C2")]);

    let err = validate_struct(&ctx, &[&parent, &child]).unwrap_err();
    assert_eq!(err.fields(), [FieldError::new("Payment", "C1", "")]);

    let err = validate_struct(&ctx, &[&child, &parent]).unwrap_err();
    let paths: Vec<_> = err.paths().collect();
    assert_eq!(paths, ["Payment.Method", "Payment"]);
}

#[test]
fn struct_suppresses_repeated_paths_and_keeps_siblings() {
    let ctx = Context::new();
    let first = fixed(&[("Items.1", "A"), ("Items.10", "B")]);
    let second = fixed(&[("Items.1", "C"), ("Items.1.Name", "D"), ("Items.2", "E")]);

    let err = valid_struct!(&ctx, first, second).unwrap_err();
    let fields: Vec<_> = err.iter().map(|f| (f.path(), f.code())).collect();
    assert_eq!(fields, [("Items.1", "A"), ("Items.10", "B"), ("Items.2", "E")]);
}

#[test]
fn struct_applies_dedup_within_one_group() {
    let group = fixed(&[("A", "X"), ("A.B", "Y"), ("AB", "Z")]);
    let err = valid_struct!(&Context::new(), group).unwrap_err();
    assert_eq!(err.paths().collect::<Vec<_>>(), ["A", "AB"]);
}

#[test]
fn validate_groups_accepts_runtime_lists() {
    let ctx = Context::new();
    let names = ["First", "Middle", "Last"];
    let values = ["Ada", "", ""];
    let present = required();
    let rules: [&dyn Rule<str>; 1] = [&present];
    let groups: Vec<_> = names.iter().zip(&values).map(|(n, v)| field(n, *v, &rules)).collect();

    let err = validate_groups(&ctx, groups.iter().map(|g| g as &dyn FieldGroup)).unwrap_err();
    assert_eq!(err.paths().collect::<Vec<_>>(), ["Middle", "Last"]);
}
