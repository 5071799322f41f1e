//! Ambient values threaded through a validation run.
//!
//! A [`Context`] is an immutable chain of typed values. Rules and delegates
//! may read from it (a locale, a tenant, an allowed currency); the
//! aggregation core only passes it along and never inspects it.
//!
//! # Examples
//!
//! ```
//! use valid_rail::Context;
//!
//! #[derive(Debug, PartialEq)]
//! struct Currency(&'static str);
//!
//! let ctx = Context::new().with_value(Currency("EUR"));
//! assert_eq!(ctx.value::<Currency>(), Some(&Currency("EUR")));
//! assert_eq!(Context::new().value::<Currency>(), None);
//! ```
use crate::types::alloc_type::{Arc, Box};
use core::any::{Any, TypeId};
use core::fmt;

struct Entry {
    type_id: TypeId,
    type_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
    parent: Option<Arc<Entry>>,
}

/// Cheaply clonable, immutable context shared with every rule and delegate.
///
/// Adding a value returns a child context; the parent is left untouched.
/// A value of type `T` shadows any `T` stored further up the chain.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Entry>>,
}

impl Context {
    /// An empty context.
    #[inline]
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Same as [`Context::new`]; reads naturally at the top of a call tree.
    #[inline]
    pub fn background() -> Self {
        Self::new()
    }

    /// Returns a child context that also carries `value`.
    #[must_use]
    pub fn with_value<T>(&self, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        let entry = Entry {
            type_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>(),
            value: Box::new(value),
            parent: self.head.clone(),
        };
        Self { head: Some(Arc::new(entry)) }
    }

    /// Most recently added value of type `T`.
    pub fn value<T: Any>(&self) -> Option<&T> {
        let wanted = TypeId::of::<T>();
        let mut current = self.head.as_deref();
        while let Some(entry) = current {
            if entry.type_id == wanted {
                return entry.value.downcast_ref::<T>();
            }
            current = entry.parent.as_deref();
        }
        None
    }

    #[inline]
    pub fn contains<T: Any>(&self) -> bool {
        self.value::<T>().is_some()
    }

    /// Number of values stored along the chain, shadowed ones included.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.head.as_deref();
        while let Some(entry) = current {
            depth += 1;
            current = entry.parent.as_deref();
        }
        depth
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut current = self.head.as_deref();
        while let Some(entry) = current {
            list.entry(&entry.type_name);
            current = entry.parent.as_deref();
        }
        list.finish()
    }
}
