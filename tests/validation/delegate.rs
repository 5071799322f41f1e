use std::fmt;

use valid_rail::rules::{codes, greater_than, min, one_of, required};
use valid_rail::traits::FieldGroup;
use valid_rail::validation::{field, nested, slice, Nested};
use valid_rail::{
    valid_struct, BoxedError, Context, DelegateResult, Failure, FieldError, Validatable,
    ValidationError, INVALID_CODE,
};

#[derive(Debug, Clone)]
struct Discount {
    kind: &'static str,
    amount: u32,
}

impl Validatable for Discount {
    fn validate(&self, ctx: &Context) -> DelegateResult {
        Ok(valid_struct!(ctx,
            field("Type", self.kind, &[&required(), &one_of(["percentage", "fixed"])]),
            field("Amount", &self.amount, &[&required(), &greater_than(0u32)]),
        )?)
    }
}

#[derive(Debug)]
struct Unavailable;

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("rate service unavailable")
    }
}

impl std::error::Error for Unavailable {}

/// An opaque error that still carries a structured cause.
#[derive(Debug)]
struct Wrapped(ValidationError);

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "while checking item: {}", self.0)
    }
}

impl std::error::Error for Wrapped {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

fn discount(amount: u32) -> Discount {
    Discount { kind: "percentage", amount }
}

#[test]
fn slice_prefixes_structured_errors_with_index() {
    let quantities = [3, 0, 1, -2];
    let group = slice("Items", &quantities, |ctx, _, quantity| {
        valid_struct!(ctx, field("Quantity", quantity, &[&min(1)]))
    });

    let errors = group.evaluate(&Context::new());
    let paths: Vec<_> = errors.iter().map(FieldError::path).collect();
    assert_eq!(paths, ["Items.1.Quantity", "Items.3.Quantity"]);
    assert!(errors.iter().all(|e| e.code() == codes::MIN));
}

#[test]
fn slice_downgrades_opaque_failures_to_invalid() {
    let items = ["a", "b"];
    let group = slice("Items", &items, |_, index, _| -> Result<(), BoxedError> {
        if index == 1 {
            Err("lookup failed".into())
        } else {
            Ok(())
        }
    });

    let errors = group.evaluate(&Context::new());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0], FieldError::invalid("Items.1"));
    assert_eq!(errors[0].code(), INVALID_CODE);
    assert!(errors[0].message().is_empty());
}

#[test]
fn slice_recovers_structured_errors_through_source_chain() {
    let items = [1];
    let group = slice("Items", &items, |_, _, _| -> DelegateResult {
        let inner = ValidationError::single(FieldError::new("Name", codes::REQUIRED, "is required"));
        Err(Failure::opaque(Wrapped(inner)))
    });

    let errors = group.evaluate(&Context::new());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0], FieldError::new("Items.0.Name", codes::REQUIRED, "is required"));
}

#[test]
fn slice_places_empty_inner_paths_at_the_element() {
    let items = ["a"];
    let group = slice("Items", &items, |_, _, _| {
        Err(ValidationError::single(FieldError::new("", "UNPRICED", "has no price")))
    });

    let errors = group.evaluate(&Context::new());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path(), "Items.0");
    assert_eq!(errors[0].code(), "UNPRICED");
}

#[test]
fn slice_passes_index_to_the_function() {
    let items = ["x", "y", "z"];
    let group = slice("Slots", &items, |_, index, item| -> DelegateResult {
        match (index, *item) {
            (2, "z") => Err(Failure::opaque(Unavailable)),
            _ => Ok(()),
        }
    });

    let errors = group.evaluate(&Context::new());
    assert_eq!(errors[0].path(), "Slots.2");
}

#[test]
fn nested_absent_reports_nothing() {
    let ctx = Context::new();
    assert!(nested::<Discount>("Discount", Nested::absent()).evaluate(&ctx).is_empty());
    assert!(nested::<Discount>("Discount", Nested::optional(None)).evaluate(&ctx).is_empty());
    assert!(nested::<Discount>("Discounts", Nested::optional_collection(None))
        .evaluate(&ctx)
        .is_empty());
    assert!(nested::<Discount>("Discounts", Nested::collection(&[])).evaluate(&ctx).is_empty());
}

#[test]
fn nested_scalar_reports_fields_under_path() {
    let bad = Discount { kind: "bogus", amount: 0 };
    let errors = nested("Discount", Nested::scalar(&bad)).evaluate(&Context::new());

    let fields: Vec<_> = errors.iter().map(|e| (e.path(), e.code())).collect();
    assert_eq!(fields, [("Discount.Type", codes::ONE_OF), ("Discount.Amount", codes::REQUIRED)]);
}

#[test]
fn nested_collection_reports_only_failing_elements() {
    let discounts = [discount(0), discount(5), discount(0)];
    let errors = nested("Discounts", Nested::collection(&discounts)).evaluate(&Context::new());

    let paths: Vec<_> = errors.iter().map(FieldError::path).collect();
    assert_eq!(paths, ["Discounts.0.Amount", "Discounts.2.Amount"]);
}

#[test]
fn nested_collection_of_boxes_delegates_through_box() {
    let discounts = vec![Box::new(discount(1)), Box::new(discount(0))];
    let errors = nested("Discounts", Nested::collection(&discounts)).evaluate(&Context::new());

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path(), "Discounts.1.Amount");
}

#[test]
fn nested_collection_skips_absent_elements() {
    let discounts = vec![None, Some(Box::new(discount(0))), None];
    let errors = nested("Discounts", Nested::collection(&discounts)).evaluate(&Context::new());

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path(), "Discounts.1.Amount");
}

#[test]
fn nested_opaque_failure_becomes_invalid_marker() {
    struct Remote;

    impl Validatable for Remote {
        fn validate(&self, _: &Context) -> DelegateResult {
            Err(Failure::opaque(Unavailable))
        }
    }

    let errors = nested("Rates", Nested::scalar(&Remote)).evaluate(&Context::new());
    assert_eq!(errors.as_slice(), [FieldError::invalid("Rates")]);
}

#[test]
fn missing_payment_and_reference_report_exactly_two_errors() {
    let payment: Option<Discount> = None;
    let reference = "";

    let err = valid_struct!(&Context::new(),
        field("Payment", &payment, &[&required()]),
        nested("Payment", Nested::optional(payment.as_ref())),
        field("Reference", reference, &[&required()]),
    )
    .unwrap_err();

    let fields: Vec<_> = err.iter().map(|e| (e.path(), e.code())).collect();
    assert_eq!(fields, [("Payment", codes::REQUIRED), ("Reference", codes::REQUIRED)]);
}

#[test]
fn presence_failure_hides_nested_errors_at_same_path() {
    let payment = Discount { kind: "", amount: 0 };
    let flagged = |_: &Context, _: &Discount| Some(valid_rail::Violation::code("FROZEN"));

    let err = valid_struct!(&Context::new(),
        field("Payment", &payment, &[&flagged]),
        nested("Payment", Nested::scalar(&payment)),
    )
    .unwrap_err();

    assert_eq!(err.paths().collect::<Vec<_>>(), ["Payment"]);
}
