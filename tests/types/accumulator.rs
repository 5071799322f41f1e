use valid_rail::{FieldError, PathAccumulator};

fn at(path: &str) -> FieldError {
    FieldError::new(path, "X", "")
}

#[test]
fn test_accumulator_new() {
    let acc = PathAccumulator::new();
    assert!(acc.is_empty());
    assert_eq!(acc.len(), 0);
    assert!(acc.into_error().is_none());
}

#[test]
fn test_accumulator_drops_descendants_and_repeats() {
    let mut acc = PathAccumulator::new();
    assert!(acc.record(at("Payment")));
    assert!(!acc.record(at("Payment")));
    assert!(!acc.record(at("Payment.Method")));
    assert!(!acc.record(at("Payment.Card.Number")));
    assert!(acc.record(at("PaymentMethod")));

    let paths: Vec<_> = acc.iter().map(FieldError::path).collect();
    assert_eq!(paths, ["Payment", "PaymentMethod"]);
}

#[test]
fn test_accumulator_keeps_parent_recorded_after_child() {
    let mut acc = PathAccumulator::new();
    assert!(acc.record(at("Address.City")));
    assert!(acc.record(at("Address")));
    assert!(!acc.record(at("Address.Street")));
    assert_eq!(acc.len(), 2);
}

#[test]
fn test_accumulator_record_all_counts_kept() {
    let mut acc = PathAccumulator::new();
    let kept = acc.record_all([at("A"), at("A.B"), at("B"), at("B.0"), at("C")]);
    assert_eq!(kept, 3);
    assert_eq!(acc.failed_ancestor("B.0.Name"), Some("B"));
    assert!(acc.failed_ancestor("D").is_none());
}

#[test]
fn test_accumulator_from_iterator() {
    let acc: PathAccumulator = [at("Items.0"), at("Items.0.Name"), at("Items.1")].into_iter().collect();
    let err = acc.into_error().unwrap();
    assert_eq!(err.paths().collect::<Vec<_>>(), ["Items.0", "Items.1"]);
}
