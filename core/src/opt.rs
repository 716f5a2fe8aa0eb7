//! Two-state optional box.
//!
//! [`Opt`] is either `Some(value)` or `None`, with combinators that never
//! invoke a closure for the absent case. One generic type covers what the
//! boxed-value-averse JVM world spells as a hand-specialized optional per
//! primitive kind; monomorphization makes `Opt<i32>` and friends unboxed
//! for free.
//!
//! [`Opt`] interconverts freely with [`std::option::Option`]; it exists so
//! the variant family exposes one coherent surface (`try_get`, eager and
//! deferred defaults, `or` chaining) across the optional and either types.

use serde::{Deserialize, Serialize};
use twofold_common::error::{CommonError, Result};

/// A value that is exactly one of `Some(T)` or `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Opt<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

impl<T> Opt<T> {
    /// Creates a present optional holding `value`.
    pub fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an absent optional.
    pub fn none() -> Self {
        Self::None
    }

    /// Returns true if a value is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns true if no value is present.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The held value.
    ///
    /// # Panics
    ///
    /// Panics if absent. Asking an absent optional for its value is a
    /// caller bug; use [`Opt::try_get`] when presence is not statically
    /// known.
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("called `unwrap` on an absent optional"),
        }
    }

    /// The held value, or a [`CommonError::NoValue`] if absent.
    pub fn try_get(self) -> Result<T> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(CommonError::no_value(
                "requested the value of an absent optional",
            )),
        }
    }

    /// Maps the held value if present; absent stays absent.
    ///
    /// `f` is never invoked for the absent case.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Opt<U> {
        match self {
            Self::Some(value) => Opt::Some(f(value)),
            Self::None => Opt::None,
        }
    }

    /// Flat-maps the held value if present; absent stays absent.
    pub fn flat_map<U, F: FnOnce(T) -> Opt<U>>(self, f: F) -> Opt<U> {
        match self {
            Self::Some(value) => f(value),
            Self::None => Opt::None,
        }
    }

    /// Keeps the held value only if it matches `predicate`.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// The held value, or `default` if absent.
    ///
    /// `default` is eagerly evaluated by the caller; use
    /// [`Opt::value_or_else`] for a deferred default.
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// The held value, or the value produced by `f` if absent.
    pub fn value_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => f(),
        }
    }

    /// Returns self if present, otherwise the optional produced by `f`.
    pub fn or<F: FnOnce() -> Opt<T>>(self, f: F) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => f(),
        }
    }

    /// Consumes the held value with `f` if present; does nothing otherwise.
    pub fn if_present<F: FnOnce(T)>(self, f: F) {
        if let Self::Some(value) = self {
            f(value);
        }
    }

    /// Consumes the held value with `f` if present, otherwise runs `absent`.
    pub fn if_present_or_else<F: FnOnce(T), G: FnOnce()>(self, f: F, absent: G) {
        match self {
            Self::Some(value) => f(value),
            Self::None => absent(),
        }
    }

    /// Borrows the held value.
    pub fn as_ref(&self) -> Opt<&T> {
        match self {
            Self::Some(value) => Opt::Some(value),
            Self::None => Opt::None,
        }
    }

    /// Converts to the standard library optional.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T> Default for Opt<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<T> for Opt<T> {
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(opt: Opt<T>) -> Self {
        opt.into_option()
    }
}
