//! Closed two-variant union type.
//!
//! [`Either`] holds exactly one of a left value or a right value. The payload
//! lives inside the variant, so a "neither side" state cannot be constructed
//! and the collapsing operations are total. By convention the left side
//! carries the alternate/error value and the right side the primary value,
//! which is what the [`Result`] conversions assume.

use serde::{Deserialize, Serialize};
use twofold_common::error::{CommonError, Result};

/// A value that is exactly one of `Left(L)` or `Right(R)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Either<L, R> {
    /// The alternate (conventionally error) side.
    Left(L),
    /// The primary (conventionally success) side.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Creates a left-tagged instance.
    pub fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a right-tagged instance.
    pub fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Returns true if the left value is the present value.
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns true if the right value is the present value.
    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The left value, if this is left-tagged.
    pub fn left_value(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// The right value, if this is right-tagged.
    pub fn right_value(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// The left value, or a [`CommonError::WrongSide`] if this is right-tagged.
    pub fn try_left(self) -> Result<L> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(CommonError::wrong_side(
                "requested the left value of a right-tagged either",
            )),
        }
    }

    /// The right value, or a [`CommonError::WrongSide`] if this is left-tagged.
    pub fn try_right(self) -> Result<R> {
        match self {
            Self::Left(_) => Err(CommonError::wrong_side(
                "requested the right value of a left-tagged either",
            )),
            Self::Right(value) => Ok(value),
        }
    }

    /// The left value.
    ///
    /// # Panics
    ///
    /// Panics if this is right-tagged. Calling this on the wrong side is a
    /// caller bug, not a recoverable condition; use [`Either::try_left`]
    /// when the tag is not statically known.
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `unwrap_left` on a right-tagged either"),
        }
    }

    /// The right value.
    ///
    /// # Panics
    ///
    /// Panics if this is left-tagged.
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `unwrap_right` on a left-tagged either"),
            Self::Right(value) => value,
        }
    }

    /// The left value, or `default` if this is right-tagged.
    ///
    /// `default` is eagerly evaluated by the caller; use
    /// [`Either::left_or_else`] for a deferred default.
    pub fn left_or(self, default: L) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => default,
        }
    }

    /// The left value, or the value produced by `f` if this is right-tagged.
    pub fn left_or_else<F: FnOnce() -> L>(self, f: F) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => f(),
        }
    }

    /// The right value, or `default` if this is left-tagged.
    ///
    /// `default` is eagerly evaluated by the caller; use
    /// [`Either::right_or_else`] for a deferred default.
    pub fn right_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// The right value, or the value produced by `f` if this is left-tagged.
    pub fn right_or_else<F: FnOnce() -> R>(self, f: F) -> R {
        match self {
            Self::Left(_) => f(),
            Self::Right(value) => value,
        }
    }

    /// Borrows both sides.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Mutably borrows both sides.
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps whichever side is present, producing a new either.
    ///
    /// Only the mapper matching the current tag is invoked.
    pub fn map<L2, R2, FL, FR>(self, left_mapper: FL, right_mapper: FR) -> Either<L2, R2>
    where
        FL: FnOnce(L) -> L2,
        FR: FnOnce(R) -> R2,
    {
        match self {
            Self::Left(value) => Either::Left(left_mapper(value)),
            Self::Right(value) => Either::Right(right_mapper(value)),
        }
    }

    /// Maps the left value if present; a right-tagged either passes through
    /// unchanged.
    pub fn map_left<L2, F: FnOnce(L) -> L2>(self, f: F) -> Either<L2, R> {
        match self {
            Self::Left(value) => Either::Left(f(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps the right value if present; a left-tagged either passes through
    /// unchanged.
    pub fn map_right<R2, F: FnOnce(R) -> R2>(self, f: F) -> Either<L, R2> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(f(value)),
        }
    }

    /// Flat-maps whichever side is present to a new either.
    pub fn flat_map<L2, R2, FL, FR>(self, left_mapper: FL, right_mapper: FR) -> Either<L2, R2>
    where
        FL: FnOnce(L) -> Either<L2, R2>,
        FR: FnOnce(R) -> Either<L2, R2>,
    {
        match self {
            Self::Left(value) => left_mapper(value),
            Self::Right(value) => right_mapper(value),
        }
    }

    /// Flat-maps the left value if present.
    pub fn flat_map_left<L2, F: FnOnce(L) -> Either<L2, R>>(self, f: F) -> Either<L2, R> {
        match self {
            Self::Left(value) => f(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Flat-maps the right value if present.
    pub fn flat_map_right<R2, F: FnOnce(R) -> Either<L, R2>>(self, f: F) -> Either<L, R2> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => f(value),
        }
    }

    /// Moves a left value to the right side through `f`; a right-tagged
    /// either is returned unchanged.
    pub fn map_left_to_right<F: FnOnce(L) -> R>(self, f: F) -> Either<L, R> {
        match self {
            Self::Left(value) => Either::Right(f(value)),
            right => right,
        }
    }

    /// Moves a right value to the left side through `f`; a left-tagged
    /// either is returned unchanged.
    pub fn map_right_to_left<F: FnOnce(R) -> L>(self, f: F) -> Either<L, R> {
        match self {
            Self::Right(value) => Either::Left(f(value)),
            left => left,
        }
    }

    /// Collapses both sides into a single value through the matching mapper.
    ///
    /// Total by construction: one of the two mappers always applies.
    pub fn fold<B, FL, FR>(self, left_mapper: FL, right_mapper: FR) -> B
    where
        FL: FnOnce(L) -> B,
        FR: FnOnce(R) -> B,
    {
        match self {
            Self::Left(value) => left_mapper(value),
            Self::Right(value) => right_mapper(value),
        }
    }

    /// Swaps the sides.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Consumes the left value with `f` if present; does nothing otherwise.
    pub fn if_left<F: FnOnce(L)>(self, f: F) {
        if let Self::Left(value) = self {
            f(value);
        }
    }

    /// Consumes the right value with `f` if present; does nothing otherwise.
    pub fn if_right<F: FnOnce(R)>(self, f: F) {
        if let Self::Right(value) = self {
            f(value);
        }
    }

    /// Consumes whichever side is present with the matching consumer.
    pub fn if_either<FL: FnOnce(L), FR: FnOnce(R)>(self, left_consumer: FL, right_consumer: FR) {
        match self {
            Self::Left(value) => left_consumer(value),
            Self::Right(value) => right_consumer(value),
        }
    }

    /// Converts to a [`Result`], treating the right side as success.
    ///
    /// This is the boundary form of "unwrap or fail": instead of raising the
    /// left value, hand it to `?`.
    pub fn into_result(self) -> std::result::Result<R, L> {
        match self {
            Self::Left(value) => Err(value),
            Self::Right(value) => Ok(value),
        }
    }

    /// Converts to a [`Result`], treating the left side as success.
    pub fn into_result_left(self) -> std::result::Result<L, R> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(value) => Err(value),
        }
    }
}

impl<T> Either<T, T> {
    /// Returns whichever value is present.
    ///
    /// No failure path exists: the tag always matches one of the two arms.
    pub fn collapse(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L, R> From<std::result::Result<R, L>> for Either<L, R> {
    fn from(result: std::result::Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for std::result::Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_tags() {
        let left: Either<i32, &str> = Either::left(7);
        assert!(left.is_left());
        assert!(!left.is_right());

        let right: Either<i32, &str> = Either::right("seven");
        assert!(right.is_right());
        assert!(!right.is_left());
    }

    #[test]
    fn test_accessors() {
        let left: Either<i32, &str> = Either::left(7);
        assert_eq!(left.left_value(), Some(7));
        assert_eq!(left.right_value(), None);
        assert_eq!(left.unwrap_left(), 7);
    }

    #[test]
    fn test_try_accessors_report_wrong_side() {
        let left: Either<i32, &str> = Either::left(7);
        assert_eq!(left.try_left().unwrap(), 7);

        let error = left.try_right().unwrap_err();
        assert!(error.is_programmer_error());
        assert!(error.message().contains("left-tagged"));
    }

    #[test]
    #[should_panic(expected = "right-tagged")]
    fn test_unwrap_left_on_right_panics() {
        let right: Either<i32, &str> = Either::right("seven");
        right.unwrap_left();
    }

    #[test]
    fn test_defaults() {
        let left: Either<i32, &str> = Either::left(7);
        let right: Either<i32, &str> = Either::right("seven");

        assert_eq!(left.left_or(0), 7);
        assert_eq!(right.left_or(0), 0);
        assert_eq!(right.left_or_else(|| -1), -1);
        assert_eq!(left.right_or("none"), "none");
        assert_eq!(right.right_or_else(|| "none"), "seven");
    }

    #[test]
    fn test_map_invokes_only_matching_mapper() {
        let left: Either<i32, &str> = Either::left(7);
        let mapped: Either<i32, &str> = left.map(|l| l + 1, |_| panic!("right mapper must not run"));
        assert_eq!(mapped.unwrap_left(), 8);

        let right: Either<i32, &str> = Either::right("seven");
        let mapped: Either<i32, usize> = right.map(|_| panic!("left mapper must not run"), str::len);
        assert_eq!(mapped.unwrap_right(), 5);
    }

    #[test]
    fn test_map_left_passes_right_through() {
        let right: Either<i32, &str> = Either::right("seven");
        let mapped = right.map_left(|l| l.to_string());
        assert_eq!(mapped.unwrap_right(), "seven");
    }

    #[test]
    fn test_map_identity_round_trip() {
        let left: Either<i32, &str> = Either::left(7);
        assert_eq!(left.map(|l| l, |r| r), left);

        let right: Either<i32, &str> = Either::right("seven");
        assert_eq!(right.map(|l| l, |r| r), right);
    }

    #[test]
    fn test_flat_map() {
        let right: Either<&str, i32> = Either::right(6);
        let doubled = right.flat_map_right(|v| Either::<&str, i32>::right(v * 2));
        assert_eq!(doubled.unwrap_right(), 12);

        let failed = Either::<&str, i32>::right(6)
            .flat_map_right(|_| Either::<&str, i32>::left("rejected"));
        assert!(failed.is_left());

        let through: Either<&str, i32> = Either::left("rejected");
        assert!(through.flat_map_right(|v| Either::right(v)).is_left());
    }

    #[test]
    fn test_side_moves() {
        let left: Either<i32, String> = Either::left(7);
        let moved = left.map_left_to_right(|l| l.to_string());
        assert_eq!(moved.unwrap_right(), "7");

        let right: Either<i32, String> = Either::right("7".to_string());
        let moved = right.map_right_to_left(|r| r.len() as i32);
        assert_eq!(moved.unwrap_left(), 1);
    }

    #[test]
    fn test_fold_and_collapse() {
        let left: Either<i32, &str> = Either::left(7);
        assert_eq!(left.fold(|l| l.to_string(), |r| r.to_string()), "7");

        let both: Either<u32, u32> = Either::right(3);
        assert_eq!(both.collapse(), 3);
        let both: Either<u32, u32> = Either::left(9);
        assert_eq!(both.collapse(), 9);
    }

    #[test]
    fn test_swap() {
        let left: Either<i32, &str> = Either::left(7);
        assert_eq!(left.swap().unwrap_right(), 7);
    }

    #[test]
    fn test_consumers_fire_only_on_matching_side() {
        let mut seen = Vec::new();
        Either::<i32, &str>::left(7).if_left(|v| seen.push(v));
        Either::<i32, &str>::right("seven").if_left(|v| seen.push(v));
        assert_eq!(seen, vec![7]);

        let tag = std::cell::Cell::new("");
        Either::<i32, &str>::right("seven").if_either(|_| tag.set("left"), |_| tag.set("right"));
        assert_eq!(tag.get(), "right");
    }

    #[test]
    fn test_result_interop() {
        let right: Either<String, i32> = Either::right(5);
        assert_eq!(right.into_result(), Ok(5));

        let left: Either<String, i32> = Either::left("boom".to_string());
        assert_eq!(left.clone().into_result(), Err("boom".to_string()));
        assert_eq!(left.into_result_left(), Ok("boom".to_string()));

        let from_ok: Either<String, i32> = Ok(5).into();
        assert!(from_ok.is_right());
        let from_err: Either<String, i32> = Err("boom".to_string()).into();
        assert!(from_err.is_left());
    }

    #[test]
    fn test_as_ref_does_not_consume() {
        let right: Either<i32, String> = Either::right("seven".to_string());
        assert_eq!(right.as_ref().right_value(), Some(&"seven".to_string()));
        assert!(right.is_right());
    }

    #[test]
    fn test_serde_round_trip() {
        let right: Either<i32, String> = Either::right("seven".to_string());
        let json = serde_json::to_string(&right).unwrap();
        assert_eq!(json, r#"{"right":"seven"}"#);

        let back: Either<i32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, right);

        let left: Either<i32, String> = Either::left(7);
        let json = serde_json::to_string(&left).unwrap();
        assert_eq!(json, r#"{"left":7}"#);
        let back: Either<i32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, left);
    }
}
