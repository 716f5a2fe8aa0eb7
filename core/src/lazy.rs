//! Memoizing deferred computation.
//!
//! [`Lazy`] owns a producer closure and runs it on first access, caching the
//! result for every later access. First evaluation is synchronized: exactly
//! one producer invocation succeeds even under concurrent access, and every
//! caller observes the same memoized value.

use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::trace;

type Producer<T> = Box<dyn Fn() -> T + Send>;

/// A lazily evaluated value of type `T`.
///
/// The producer runs at most once per *successful* evaluation. If it panics,
/// the panic propagates to the caller, nothing is memoized, and the next
/// access runs the producer again; caching a failure would turn one bad read
/// into a permanently poisoned value, so failures are deliberately retried.
pub struct Lazy<T> {
    cell: OnceLock<T>,
    producer: Mutex<Option<Producer<T>>>,
}

impl<T> Lazy<T> {
    /// Creates a lazy value evaluated by `producer` on first access.
    pub fn new<F: Fn() -> T + Send + 'static>(producer: F) -> Self {
        Self {
            cell: OnceLock::new(),
            producer: Mutex::new(Some(Box::new(producer))),
        }
    }

    /// Creates an already-evaluated lazy value.
    pub fn evaluated(value: T) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(value);
        Self {
            cell,
            producer: Mutex::new(None),
        }
    }

    /// Returns true if the value has been evaluated.
    pub fn is_evaluated(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The value, evaluating it on first call.
    ///
    /// Concurrent first calls race on an internal lock; exactly one runs the
    /// producer and the rest observe its result. A panicking producer leaves
    /// the cell unset and is retried on the next call.
    pub fn get(&self) -> &T {
        if let Some(value) = self.cell.get() {
            return value;
        }

        // A poisoned lock means a previous producer run panicked; the cell
        // is still unset, so recovering the guard and retrying is sound.
        let guard = self
            .producer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        self.cell.get_or_init(|| {
            trace!("evaluating lazy value");
            // the producer is absent only for pre-evaluated cells, which
            // the early return above already handled
            let producer = guard
                .as_ref()
                .expect("lazy value has neither producer nor memoized value");
            producer()
        })
    }

    /// Evaluates (if needed) and returns the value by move.
    pub fn into_value(mut self) -> T {
        self.get();
        self.cell
            .take()
            .expect("lazy value evaluated by the preceding get")
    }

    /// Lazily maps this value through `f`.
    ///
    /// `f` runs only when the resulting lazy value is first accessed.
    pub fn map<U, F>(self, f: F) -> Lazy<U>
    where
        T: Send + 'static,
        F: Fn(&T) -> U + Send + 'static,
    {
        Lazy::new(move || f(self.get()))
    }
}

impl<T: fmt::Debug> fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_struct("Lazy").field("value", value).finish(),
            None => f.debug_struct("Lazy").field("value", &"<unevaluated>").finish(),
        }
    }
}

impl<T> From<T> for Lazy<T> {
    fn from(value: T) -> Self {
        Self::evaluated(value)
    }
}
