use crate::types::alloc_type::{BTreeSet, String};
use crate::types::field_error::FieldError;
use crate::types::validation_error::ValidationError;
use crate::types::FieldErrors;

/// Collects [`FieldError`]s while suppressing anything beneath a path that
/// already failed.
///
/// Once an error is recorded at `P`, later errors at `P` or at any `P.<...>`
/// are dropped. The check runs against every path recorded so far, so the
/// result depends on recording order: a parent recorded after its child keeps
/// both.
///
/// # Examples
///
/// ```
/// use valid_rail::types::accumulator::PathAccumulator;
/// use valid_rail::FieldError;
///
/// let mut acc = PathAccumulator::new();
/// assert!(acc.record(FieldError::new("Payment", "REQUIRED", "")));
/// assert!(!acc.record(FieldError::new("Payment.Method", "ONE_OF", "")));
/// assert_eq!(acc.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathAccumulator {
    items: FieldErrors,
    seen: BTreeSet<String>,
}

impl PathAccumulator {
    /// Creates a new empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self { items: FieldErrors::new(), seen: BTreeSet::new() }
    }

    /// Shortest recorded path equal to `path` or one of its dot-ancestors.
    pub fn failed_ancestor(&self, path: &str) -> Option<&str> {
        if self.seen.is_empty() {
            return None;
        }
        // Shortest ancestor first: `A`, `A.B`, then `A.B.C` itself.
        path.match_indices('.')
            .map(|(at, _)| &path[..at])
            .chain(core::iter::once(path))
            .find_map(|candidate| self.seen.get(candidate).map(String::as_str))
    }

    /// Returns `true` if `path` would be dropped by [`record`](Self::record).
    #[inline]
    pub fn is_suppressed(&self, path: &str) -> bool {
        self.failed_ancestor(path).is_some()
    }

    /// Records `error` unless an ancestor path already failed.
    ///
    /// Returns whether the error was kept.
    pub fn record(&mut self, error: FieldError) -> bool {
        if let Some(_ancestor) = self.failed_ancestor(error.path()) {
            crate::macros::trace_event!(
                path = error.path(),
                code = error.code(),
                ancestor = _ancestor,
                "suppressed field error under failed path"
            );
            return false;
        }
        self.seen.insert(String::from(error.path()));
        self.items.push(error);
        true
    }

    /// Records every error of `errors` in order, returning how many were kept.
    pub fn record_all<I: IntoIterator<Item = FieldError>>(&mut self, errors: I) -> usize {
        errors.into_iter().fold(0, |kept, e| kept + usize::from(self.record(e)))
    }

    /// Returns true if nothing has been kept.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of kept errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the kept errors.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, FieldError> {
        self.items.iter()
    }

    /// Consumes the accumulator, yielding `None` when nothing was kept.
    #[inline]
    pub fn into_error(self) -> Option<ValidationError> {
        ValidationError::from_fields(self.items)
    }

    /// Consumes the accumulator and returns the kept errors.
    #[inline]
    pub fn into_inner(self) -> FieldErrors {
        self.items
    }
}

impl Extend<FieldError> for PathAccumulator {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        self.record_all(iter);
    }
}

impl FromIterator<FieldError> for PathAccumulator {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.record_all(iter);
        acc
    }
}
