use crate::context::Context;
use crate::rules::resolve::Resolve;
use crate::rules::{codes, violation};
use crate::traits::Rule;
use crate::types::alloc_type::String;
use crate::types::Violation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Prefix,
    Suffix,
    Anywhere,
}

/// Substring rule: the text must start with, end with or contain a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affix {
    fragment: String,
    position: Position,
}

#[inline]
pub fn has_prefix(prefix: impl Into<String>) -> Affix {
    Affix { fragment: prefix.into(), position: Position::Prefix }
}

#[inline]
pub fn has_suffix(suffix: impl Into<String>) -> Affix {
    Affix { fragment: suffix.into(), position: Position::Suffix }
}

/// Text must contain `fragment` somewhere.
#[inline]
pub fn contains(fragment: impl Into<String>) -> Affix {
    Affix { fragment: fragment.into(), position: Position::Anywhere }
}

impl<V> Rule<V> for Affix
where
    V: Resolve + ?Sized,
    V::Inner: AsRef<str>,
{
    fn check(&self, _: &Context, value: &V) -> Option<Violation> {
        let text: &str = value.resolve()?.as_ref();
        let fragment = self.fragment.as_str();
        let (found, code, placeholder) = match self.position {
            Position::Prefix => (text.starts_with(fragment), codes::HAS_PREFIX, "prefix"),
            Position::Suffix => (text.ends_with(fragment), codes::HAS_SUFFIX, "suffix"),
            Position::Anywhere => (text.contains(fragment), codes::CONTAINS, "value"),
        };
        (!found).then(|| violation(code, &[(placeholder, &fragment)]))
    }
}
