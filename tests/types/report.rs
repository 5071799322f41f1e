use valid_rail::{FieldError, ReportConfig, ValidationError};

fn sample() -> ValidationError {
    ValidationError::from_fields([
        FieldError::new("Reference", "REQUIRED", "is required"),
        FieldError::new("Items.0", "invalid", ""),
    ])
    .unwrap()
}

#[test]
fn default_report_matches_display() {
    let err = sample();
    assert_eq!(err.report().to_string(), err.to_string());
    assert_eq!(err.report_with(&ReportConfig::default()), err.to_string());
}

#[test]
fn pretty_report_lists_one_field_per_line() {
    let rendered = sample().report_with(&ReportConfig::pretty());
    assert_eq!(
        rendered,
        "validation failed:\n  - Reference (REQUIRED): is required\n  - Items.0 (invalid)"
    );
}

#[test]
fn compact_and_paths_only_presets() {
    let err = sample();
    assert_eq!(err.report_with(&ReportConfig::compact()), "Reference (REQUIRED) | Items.0 (invalid)");
    assert_eq!(err.report_with(&ReportConfig::paths_only()), "Reference, Items.0");
}

#[test]
fn builder_overrides_individual_settings() {
    let rendered = sample()
        .report()
        .with_header(Some("errors: ".into()))
        .with_separator("; ")
        .show_message(true)
        .to_string();
    assert_eq!(rendered, "errors: Reference (REQUIRED): is required; Items.0 (invalid)");

    let multiline = sample().report().with_header(None).multiline(true).show_code(false).to_string();
    assert_eq!(multiline, "Reference\nItems.0");
}
