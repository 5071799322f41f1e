use valid_rail::{FieldError, ReportConfig, ValidationError};

#[test]
fn validation_error_serializes_as_field_list() {
    let err = ValidationError::from_fields([
        FieldError::new("Payment", "REQUIRED", "is required"),
        FieldError::new("Items.0", "invalid", ""),
    ])
    .unwrap();

    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"path": "Payment", "code": "REQUIRED", "message": "is required"},
            {"path": "Items.0", "code": "invalid", "message": ""}
        ])
    );

    let back: ValidationError = serde_json::from_value(json).unwrap();
    assert_eq!(back, err);
}

#[test]
fn empty_field_list_fails_to_deserialize() {
    assert!(serde_json::from_str::<ValidationError>("[]").is_err());
}

#[test]
fn report_config_fills_missing_fields_with_defaults() {
    let config: ReportConfig = serde_json::from_str(r#"{"separator": " / "}"#).unwrap();
    assert_eq!(config.separator, " / ");
    assert_eq!(config.header, ReportConfig::default().header);
    assert!(config.show_code);
}
