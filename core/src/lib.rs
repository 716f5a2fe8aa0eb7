//! Twofold Core - tagged-variant value types
//!
//! This is the core module of the Twofold project, providing the closed
//! two-variant union, the optional and lazy value boxes, and the failure
//! capture funnel built on top of them.

pub mod attempt;
pub mod either;
pub mod lazy;
pub mod opt;
pub mod opt_lazy;

pub use attempt::{CaughtPanic, attempt, attempt_catching, attempt_on};
pub use either::Either;
pub use lazy::Lazy;
pub use opt::Opt;
pub use opt_lazy::OptLazy;
