//! Failure capture into [`Either`] values.
//!
//! This module is the single point where raised failures become values.
//! Two explicit catch scopes exist: [`attempt`] captures only the error
//! channel of a fallible closure, while [`attempt_catching`] additionally
//! catches unwinding panics. Nothing else in this workspace converts,
//! retries, or suppresses a failure.

use std::any::Any;
use std::fmt;
use std::panic::{self, UnwindSafe};

use tracing::trace;
use twofold_common::error::CommonError;

use crate::either::Either;

/// Runs `f`, capturing its error channel.
///
/// A normal return becomes `Right(value)`; an `Err` becomes `Left(error)`.
/// Panics are not caught; use [`attempt_catching`] for that scope.
pub fn attempt<R, E, F>(f: F) -> Either<E, R>
where
    F: FnOnce() -> Result<R, E>,
{
    match f() {
        Ok(value) => Either::Right(value),
        Err(error) => {
            trace!("attempt captured an error value");
            Either::Left(error)
        }
    }
}

/// Runs `f` on `value`, capturing its error channel.
pub fn attempt_on<T, R, E, F>(value: T, f: F) -> Either<E, R>
where
    F: FnOnce(T) -> Result<R, E>,
{
    attempt(|| f(value))
}

/// Runs `f`, capturing unwinding panics as well.
///
/// A normal return becomes `Right(value)`; a panic is caught and packaged
/// as `Left(CaughtPanic)`. This is the widest catch scope the library
/// offers and exists for boundaries that must not unwind (FFI edges, task
/// pools); inside ordinary code prefer [`attempt`] and a real error type.
pub fn attempt_catching<R, F>(f: F) -> Either<CaughtPanic, R>
where
    F: FnOnce() -> R + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(value) => Either::Right(value),
        Err(payload) => {
            trace!("attempt captured a panic");
            Either::Left(CaughtPanic::new(payload))
        }
    }
}

/// A panic payload captured by [`attempt_catching`].
pub struct CaughtPanic {
    payload: Box<dyn Any + Send + 'static>,
}

impl CaughtPanic {
    fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// The panic message, when the payload was a string.
    ///
    /// `panic!("...")` and `panic!("{}", ...)` produce string payloads;
    /// `panic_any` payloads of other types yield `None`.
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Some(message)
        } else {
            self.payload.downcast_ref::<String>().map(String::as_str)
        }
    }

    /// The raw panic payload.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Converts the captured panic into a [`CommonError::Producer`] value.
    pub fn into_error(self) -> CommonError {
        match self.message() {
            Some(message) => CommonError::producer(message),
            None => CommonError::producer("panicked with a non-string payload"),
        }
    }

    /// Resumes unwinding with the original payload.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaughtPanic")
            .field("message", &self.message())
            .finish()
    }
}

impl fmt::Display for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "caught panic: {}", message),
            None => write!(f, "caught panic with a non-string payload"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::panic::panic_any;

    use super::*;

    #[test]
    fn test_attempt_success() {
        let result: Either<String, i32> = attempt(|| Ok(5));
        assert!(result.is_right());
        assert_eq!(result.unwrap_right(), 5);
    }

    #[test]
    fn test_attempt_failure() {
        let result: Either<String, i32> = attempt(|| Err("boom".to_string()));
        assert!(result.is_left());
        assert_eq!(result.unwrap_left(), "boom");
    }

    #[test]
    fn test_attempt_on() {
        let parsed = attempt_on("42", |s: &str| s.parse::<i32>());
        assert_eq!(parsed.unwrap_right(), 42);

        let failed = attempt_on("x", |s: &str| s.parse::<i32>());
        assert!(failed.is_left());
    }

    #[test]
    fn test_attempt_composes_with_question_mark() {
        fn parse_both(a: &str, b: &str) -> Result<i32, std::num::ParseIntError> {
            let a = attempt(|| a.parse::<i32>()).into_result()?;
            let b = attempt(|| b.parse::<i32>()).into_result()?;
            Ok(a + b)
        }

        assert_eq!(parse_both("2", "3").unwrap(), 5);
        assert!(parse_both("2", "x").is_err());
    }

    #[test]
    fn test_attempt_catching_success() {
        let result = attempt_catching(|| 5);
        assert_eq!(result.unwrap_right(), 5);
    }

    #[test]
    fn test_attempt_catching_captures_panic_message() {
        let result: Either<CaughtPanic, ()> = attempt_catching(|| panic!("it broke"));
        let caught = result.unwrap_left();
        assert_eq!(caught.message(), Some("it broke"));
        assert!(format!("{}", caught).contains("it broke"));
    }

    #[test]
    fn test_attempt_catching_formatted_panic() {
        let result: Either<CaughtPanic, ()> =
            attempt_catching(|| panic!("code {}", 7));
        assert_eq!(result.unwrap_left().message(), Some("code 7"));
    }

    #[test]
    fn test_non_string_payload() {
        let result: Either<CaughtPanic, ()> = attempt_catching(|| panic_any(17_i32));
        let caught = result.unwrap_left();
        assert_eq!(caught.message(), None);

        let payload = caught.into_payload();
        assert_eq!(payload.downcast_ref::<i32>(), Some(&17));
    }

    #[test]
    fn test_into_error() {
        let result: Either<CaughtPanic, ()> = attempt_catching(|| panic!("deferred failure"));
        let error = result.unwrap_left().into_error();
        assert!(!error.is_programmer_error());
        assert_eq!(error.message(), "deferred failure");
    }

    #[test]
    #[should_panic(expected = "resumed")]
    fn test_resume_rethrows_original_payload() {
        let result: Either<CaughtPanic, ()> = attempt_catching(|| panic!("resumed"));
        result.unwrap_left().resume();
    }
}
