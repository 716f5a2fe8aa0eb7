//! Common utilities for the Twofold project.
//!
//! This module provides the shared error type used by the value-type crates.

pub mod error;

pub use error::{CommonError, Result};
