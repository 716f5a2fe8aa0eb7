//! Lazily evaluated optional.
//!
//! [`OptLazy`] is the optional whose present value is a [`Lazy`]: presence
//! is known immediately, the value itself is computed on first request and
//! memoized afterwards.

use std::fmt;

use twofold_common::error::{CommonError, Result};

use crate::lazy::Lazy;
use crate::opt::Opt;

/// An optional holding a lazily evaluated value.
pub enum OptLazy<T> {
    /// A present, possibly not yet evaluated value.
    Some(Lazy<T>),
    /// No value.
    None,
}

impl<T> OptLazy<T> {
    /// Creates a present lazy optional.
    pub fn some(lazy: Lazy<T>) -> Self {
        Self::Some(lazy)
    }

    /// Creates a present, already-evaluated lazy optional.
    pub fn evaluated(value: T) -> Self {
        Self::Some(Lazy::evaluated(value))
    }

    /// Creates an absent lazy optional.
    pub fn none() -> Self {
        Self::None
    }

    /// Returns true if a value is present (evaluated or not).
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns true if no value is present.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns true if the held value has been evaluated, or if absent.
    pub fn is_evaluated(&self) -> bool {
        match self {
            Self::Some(lazy) => lazy.is_evaluated(),
            Self::None => true,
        }
    }

    /// The value, evaluating it on first call.
    ///
    /// # Panics
    ///
    /// Panics if absent; use [`OptLazy::try_get`] when presence is not
    /// statically known.
    pub fn get(&self) -> &T {
        match self {
            Self::Some(lazy) => lazy.get(),
            Self::None => panic!("called `get` on an absent lazy optional"),
        }
    }

    /// The value, or a [`CommonError::NoValue`] if absent.
    ///
    /// Evaluates on first call when present.
    pub fn try_get(&self) -> Result<&T> {
        match self {
            Self::Some(lazy) => Ok(lazy.get()),
            Self::None => Err(CommonError::no_value(
                "requested the value of an absent lazy optional",
            )),
        }
    }

    /// Lazily maps the held value; absent stays absent.
    ///
    /// `f` runs only when the mapped value is first requested, and never
    /// for the absent case.
    pub fn map<U, F>(self, f: F) -> OptLazy<U>
    where
        T: Send + 'static,
        F: Fn(&T) -> U + Send + 'static,
    {
        match self {
            Self::Some(lazy) => OptLazy::Some(lazy.map(f)),
            Self::None => OptLazy::None,
        }
    }

    /// Returns self if present, otherwise the lazy optional produced by `f`.
    pub fn or<F: FnOnce() -> OptLazy<T>>(self, f: F) -> Self {
        match self {
            Self::Some(lazy) => Self::Some(lazy),
            Self::None => f(),
        }
    }

    /// Converts to a plain [`Opt`], forcing evaluation when present.
    pub fn into_opt(self) -> Opt<T> {
        match self {
            Self::Some(lazy) => Opt::Some(lazy.into_value()),
            Self::None => Opt::None,
        }
    }

    /// Converts to an optional of the underlying lazy cell, without
    /// forcing evaluation.
    pub fn into_lazy_opt(self) -> Opt<Lazy<T>> {
        match self {
            Self::Some(lazy) => Opt::Some(lazy),
            Self::None => Opt::None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OptLazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(lazy) => f.debug_tuple("Some").field(lazy).finish(),
            Self::None => f.write_str("None"),
        }
    }
}

impl<T> From<Lazy<T>> for OptLazy<T> {
    fn from(lazy: Lazy<T>) -> Self {
        Self::Some(lazy)
    }
}
