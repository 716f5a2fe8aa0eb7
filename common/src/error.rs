//! Error handling for the twofold-common crate.

use thiserror::Error;

/// Error type shared by the twofold value types.
///
/// Every variant carries a message plus an optional source error so that
/// callers converting between error representations keep the full chain.
#[derive(Error, Debug)]
pub enum CommonError {
    /// The wrong side of a two-variant union was requested.
    #[error("Wrong side accessed: {message}")]
    WrongSide {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// An absent optional was asked for its value.
    #[error("No value present: {message}")]
    NoValue {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// A deferred computation failed during evaluation.
    #[error("Producer failed: {message}")]
    Producer {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

/// Result type alias for twofold operations.
pub type Result<T> = std::result::Result<T, CommonError>;

impl CommonError {
    /// Create a wrong-side error with a custom message.
    pub fn wrong_side<S: Into<String>>(message: S) -> Self {
        Self::WrongSide {
            message: message.into(),
            source: None,
        }
    }

    /// Create a wrong-side error with a custom message and source error.
    pub fn wrong_side_with_source<S: Into<String>, E: Into<anyhow::Error>>(
        message: S,
        source: E,
    ) -> Self {
        Self::WrongSide {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a no-value error with a custom message.
    pub fn no_value<S: Into<String>>(message: S) -> Self {
        Self::NoValue {
            message: message.into(),
            source: None,
        }
    }

    /// Create a no-value error with a custom message and source error.
    pub fn no_value_with_source<S: Into<String>, E: Into<anyhow::Error>>(
        message: S,
        source: E,
    ) -> Self {
        Self::NoValue {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a producer error with a custom message.
    pub fn producer<S: Into<String>>(message: S) -> Self {
        Self::Producer {
            message: message.into(),
            source: None,
        }
    }

    /// Create a producer error with a custom message and source error.
    pub fn producer_with_source<S: Into<String>, E: Into<anyhow::Error>>(
        message: S,
        source: E,
    ) -> Self {
        Self::Producer {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns true for errors that indicate a caller bug rather than a
    /// runtime condition.
    ///
    /// Asking a left-tagged union for its right value or an absent optional
    /// for its value is an assertion failure on the caller's side; a failed
    /// deferred computation is not.
    pub fn is_programmer_error(&self) -> bool {
        matches!(self, Self::WrongSide { .. } | Self::NoValue { .. })
    }

    /// The message attached at construction, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::WrongSide { message, .. }
            | Self::NoValue { message, .. }
            | Self::Producer { message, .. } => message,
        }
    }
}
