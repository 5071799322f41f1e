//! Wildcard path translation for finished reports.
//!
//! A [`PathMapping`] is an ordered list of `(pattern, template)` pairs. Both
//! the pattern and a candidate path are split on `.`; they match when they
//! have the same number of segments and every non-`*` pattern segment is equal
//! to the path segment at the same position. Each `*` captures one segment,
//! and the captures replace the template's `*`s from left to right.
//!
//! Patterns are tried in insertion order and the first match wins.

use crate::types::alloc_type::{String, ToString, Vec};
use crate::types::validation_error::ValidationError;

/// Wildcard segment.
pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    segments: Vec<String>,
    template: String,
}

impl Entry {
    /// Captured segment values, or `None` if `path` does not fit the pattern.
    fn captures<'p>(&self, path: &[&'p str]) -> Option<Vec<&'p str>> {
        if self.segments.len() != path.len() {
            return None;
        }
        let mut captured = Vec::new();
        for (pattern, segment) in self.segments.iter().zip(path) {
            if pattern == WILDCARD {
                captured.push(*segment);
            } else if pattern != segment {
                return None;
            }
        }
        Some(captured)
    }

    fn expand(&self, captured: &[&str]) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();
        let mut captured = captured.iter();
        while let Some(at) = rest.find(WILDCARD) {
            let Some(value) = captured.next() else { break };
            out.push_str(&rest[..at]);
            out.push_str(value);
            rest = &rest[at + WILDCARD.len()..];
        }
        out.push_str(rest);
        out
    }
}

/// Ordered pattern → template table used by [`ValidationError::rename`].
///
/// # Examples
///
/// ```
/// use valid_rail::PathMapping;
///
/// let mapping = PathMapping::new()
///     .map("Items.*.Name", "items.*.name")
///     .map("Reference", "reference");
///
/// assert_eq!(mapping.translate("Items.4.Name"), Some("items.4.name".to_string()));
/// assert_eq!(mapping.translate("Reference"), Some("reference".to_string()));
/// assert_eq!(mapping.translate("Items.4"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMapping {
    entries: Vec<Entry>,
}

impl PathMapping {
    #[inline]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends a `pattern → template` pair after every existing one.
    #[must_use]
    pub fn map(mut self, pattern: impl AsRef<str>, template: impl Into<String>) -> Self {
        self.push(pattern, template);
        self
    }

    pub fn push(&mut self, pattern: impl AsRef<str>, template: impl Into<String>) {
        let segments = pattern.as_ref().split('.').map(ToString::to_string).collect();
        self.entries.push(Entry { segments, template: template.into() });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// External name for `path`, or `None` when no pattern matches.
    ///
    /// A matching pattern with an empty template also yields `None`, so the
    /// caller keeps the original path.
    pub fn translate(&self, path: &str) -> Option<String> {
        let segments: Vec<&str> = path.split('.').collect();
        self.entries.iter().find_map(|entry| {
            let captured = entry.captures(&segments)?;
            let target = entry.expand(&captured);
            (!target.is_empty()).then_some(target)
        })
    }

    /// Translated path, falling back to `path` itself.
    pub fn resolve(&self, path: &str) -> String {
        self.translate(path).unwrap_or_else(|| path.to_string())
    }
}

impl<P, T> FromIterator<(P, T)> for PathMapping
where
    P: AsRef<str>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        mapping.extend(iter);
        mapping
    }
}

impl<P, T> Extend<(P, T)> for PathMapping
where
    P: AsRef<str>,
    T: Into<String>,
{
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (pattern, template) in iter {
            self.push(pattern, template);
        }
    }
}

impl<P, T, const N: usize> From<[(P, T); N]> for PathMapping
where
    P: AsRef<str>,
    T: Into<String>,
{
    fn from(pairs: [(P, T); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl ValidationError {
    /// Returns a copy with every path translated through `mapping`.
    ///
    /// Codes, messages, field count and order are unchanged; paths without a
    /// matching pattern are kept as they are.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{FieldError, PathMapping, ValidationError};
    ///
    /// let err = ValidationError::from_fields([
    ///     FieldError::new("Items.2.Quantity", "MIN", ""),
    ///     FieldError::new("Internal.Only", "REQUIRED", ""),
    /// ])
    /// .unwrap();
    ///
    /// let renamed = err.rename(&PathMapping::from([("Items.*.Quantity", "items.*.quantity")]));
    /// let paths: Vec<_> = renamed.paths().collect();
    /// assert_eq!(paths, ["items.2.quantity", "Internal.Only"]);
    /// ```
    pub fn rename(&self, mapping: &PathMapping) -> ValidationError {
        let renamed = self.iter().map(|field| match mapping.translate(field.path()) {
            Some(target) => field.with_path(target),
            None => field.clone(),
        });
        // Same number of fields as `self`, so never empty.
        match ValidationError::from_fields(renamed) {
            Some(err) => err,
            None => self.clone(),
        }
    }
}
