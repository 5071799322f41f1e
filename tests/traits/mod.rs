use valid_rail::rules::{codes, required};
use valid_rail::traits::{first_violation, FieldGroup, Rule, Validatable};
use valid_rail::validation::field;
use valid_rail::{valid_struct, Context, DelegateResult, FieldError, FieldErrors, Violation};

struct Address {
    street: String,
    city: String,
}

impl Validatable for Address {
    fn validate(&self, ctx: &Context) -> DelegateResult {
        valid_struct!(ctx,
            field("Street", &self.street, &[&required()]),
            field("City", &self.city, &[&required()]),
        )?;
        Ok(())
    }
}

fn blank() -> Address {
    Address { street: String::new(), city: String::new() }
}

#[test]
fn validatable_forwards_through_references_boxes_and_options() {
    let ctx = Context::new();
    let boxed: Box<Address> = Box::new(blank());
    let borrowed: &Address = &boxed;

    assert!(boxed.validate(&ctx).is_err());
    assert!(borrowed.validate(&ctx).is_err());
    assert!(Some(blank()).validate(&ctx).is_err());
    assert!(None::<Address>.validate(&ctx).is_ok());
}

#[test]
fn first_violation_returns_earliest_failure() {
    let ctx = Context::new();
    let never = |_: &Context, _: &str| -> Option<Violation> { None };
    let always = |_: &Context, _: &str| Some(Violation::code("ALWAYS"));

    assert!(first_violation::<str>(&ctx, "x", &[]).is_none());
    assert!(first_violation(&ctx, "x", &[&never]).is_none());
    assert_eq!(first_violation(&ctx, "x", &[&never, &always]).unwrap().code, "ALWAYS");
    assert_eq!(first_violation(&ctx, "", &[&required(), &always]).unwrap().code, codes::REQUIRED);
}

fn positive_only(_: &Context, value: &i32) -> Option<Violation> {
    (*value <= 0).then(|| Violation::new("POSITIVE", "must be > 0"))
}

#[test]
fn plain_functions_are_rules() {
    let ctx = Context::new();
    assert!(positive_only.check(&ctx, &3).is_none());
    let errors = field("Count", &0, &[&positive_only]).evaluate(&ctx);
    assert_eq!(errors[0], FieldError::new("Count", "POSITIVE", "must be > 0"));
}

#[test]
fn closures_are_field_groups() {
    let (start, end) = (10, 5);
    let range = move |_: &Context| -> FieldErrors {
        let mut errors = FieldErrors::new();
        if start > end {
            errors.push(FieldError::new("End", "GTE", "must be >= start"));
        }
        errors
    };

    let err = valid_struct!(&Context::new(), range, field("Start", &start, &[&required()])).unwrap_err();
    assert_eq!(err.paths().collect::<Vec<_>>(), ["End"]);
}
