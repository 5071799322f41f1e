//! Text rendering for [`ValidationError`].

use crate::types::alloc_type::String;
use crate::types::field_error::FieldError;
use crate::types::validation_error::ValidationError;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trait for customizing how each failed field is written.
pub trait FieldFormatter {
    fn write_field(&self, f: &mut fmt::Formatter<'_>, field: &FieldError) -> fmt::Result;

    fn separator(&self) -> &str {
        ", "
    }
}

/// Configuration-based report layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReportConfig {
    pub header: Option<String>,
    pub separator: String,
    pub item_prefix: Option<String>,
    pub show_code: bool,
    pub show_message: bool,
    pub multiline: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            header: Some("validation failed: ".into()),
            separator: ", ".into(),
            item_prefix: None,
            show_code: true,
            show_message: false,
            multiline: false,
        }
    }
}

impl ReportConfig {
    /// One field per line with messages, under a header line.
    #[inline]
    pub fn pretty() -> Self {
        Self {
            header: Some("validation failed:".into()),
            separator: "\n".into(),
            item_prefix: Some("  - ".into()),
            show_message: true,
            multiline: true,
            ..Default::default()
        }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { header: None, separator: " | ".into(), ..Default::default() }
    }

    /// Comma-separated paths only.
    #[inline]
    pub fn paths_only() -> Self {
        Self { header: None, show_code: false, ..Default::default() }
    }
}

impl FieldFormatter for ReportConfig {
    fn write_field(&self, f: &mut fmt::Formatter<'_>, field: &FieldError) -> fmt::Result {
        if let Some(prefix) = &self.item_prefix {
            f.write_str(prefix)?;
        }
        f.write_str(field.path())?;
        if self.show_code {
            write!(f, " ({})", field.code())?;
        }
        if self.show_message && !field.message().is_empty() {
            write!(f, ": {}", field.message())?;
        }
        Ok(())
    }

    fn separator(&self) -> &str {
        &self.separator
    }
}

/// Builder for customizing report output. Implements [`Display`].
///
/// # Examples
///
/// ```
/// use valid_rail::{FieldError, ValidationError};
///
/// let err = ValidationError::from_fields([
///     FieldError::new("Reference", "REQUIRED", "is required"),
///     FieldError::new("Items.0.Quantity", "MIN", "must be >= 1"),
/// ])
/// .unwrap();
///
/// assert_eq!(
///     err.report().pretty().to_string(),
///     "validation failed:\n  - Reference (REQUIRED): is required\n  - Items.0.Quantity (MIN): must be >= 1"
/// );
/// assert_eq!(err.report().compact().show_code(false).to_string(), "Reference | Items.0.Quantity");
/// ```
pub struct ReportBuilder<'a> {
    pub(crate) error: &'a ValidationError,
    pub(crate) config: ReportConfig,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(error: &'a ValidationError) -> Self {
        Self { error, config: ReportConfig::default() }
    }

    pub fn config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn with_header(mut self, header: Option<String>) -> Self {
        self.config.header = header;
        self
    }

    pub fn show_code(mut self, show: bool) -> Self {
        self.config.show_code = show;
        self
    }

    pub fn show_message(mut self, show: bool) -> Self {
        self.config.show_message = show;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.config = ReportConfig::pretty();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ReportConfig::compact();
        self
    }

    pub fn multiline(mut self, enabled: bool) -> Self {
        self.config.multiline = enabled;
        if enabled && self.config.separator == ", " {
            self.config.separator = "\n".into();
        }
        self
    }
}

impl Display for ReportBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(header) = &self.config.header {
            f.write_str(header)?;
            if self.config.multiline {
                f.write_str(self.config.separator())?;
            }
        }
        for (i, field) in self.error.iter().enumerate() {
            if i > 0 {
                f.write_str(self.config.separator())?;
            }
            self.config.write_field(f, field)?;
        }
        Ok(())
    }
}
