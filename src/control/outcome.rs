//! Outcome type - a computation result reified as data.
//!
//! This module provides the `Outcome<E, A>` type, which is either a
//! `Failure(E)` or a `Success(A)`. It is what `try_catch` turns a
//! possibly-failing computation into, so the caller can inspect a failure
//! without it propagating any further.
//!
//! # Examples
//!
//! ```rust
//! use effect_caps::control::Outcome;
//!
//! let success: Outcome<String, i32> = Outcome::Success(42);
//! let failure: Outcome<String, i32> = Outcome::Failure("boom".to_string());
//!
//! assert!(success.is_success());
//! assert_eq!(failure.clone().into_result(), Err("boom".to_string()));
//!
//! let summary = failure.fold(|error| format!("failed: {error}"), |value| value.to_string());
//! assert_eq!(summary, "failed: boom");
//! ```

use std::fmt;

/// The result of a computation, captured as a value.
///
/// # Type Parameters
///
/// * `E` - The error type of a failure
/// * `A` - The value type of a success
///
/// # Examples
///
/// ```rust
/// use effect_caps::control::Outcome;
///
/// let outcome: Outcome<&str, i32> = Ok(3).into();
/// assert_eq!(outcome, Outcome::Success(3));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<E, A> {
    /// The computation failed with the given error.
    Failure(E),
    /// The computation succeeded with the given value.
    Success(A),
}

impl<E, A> Outcome<E, A> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::control::Outcome;
    ///
    /// assert!(Outcome::<(), i32>::Success(1).is_success());
    /// assert!(!Outcome::<(), i32>::Failure(()).is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the outcome into an `Option<A>`, discarding any error.
    #[inline]
    pub fn success(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts the outcome into an `Option<E>`, discarding any value.
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns references to the contents.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&E, &A> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `on_failure` or `on_success` depending on the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::control::Outcome;
    ///
    /// let outcome: Outcome<String, i32> = Outcome::Success(4);
    /// assert_eq!(outcome.fold(|error| error.len() as i32, |value| value * 2), 8);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_failure: F, on_success: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Failure(error) => on_failure(error),
            Self::Success(value) => on_success(value),
        }
    }

    /// Transforms a success value, leaving a failure untouched.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(function(value)),
        }
    }

    /// Transforms a failure value, leaving a success untouched.
    #[inline]
    pub fn map_failure<E2, F>(self, function: F) -> Outcome<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(function(error)),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    /// Converts the outcome into the equivalent `Result`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` if this is a `Failure(error)`.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Failure(error) => Err(error),
            Self::Success(value) => Ok(value),
        }
    }
}

impl<E, A> From<Result<A, E>> for Outcome<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E, A> From<Outcome<E, A>> for Result<A, E> {
    #[inline]
    fn from(outcome: Outcome<E, A>) -> Self {
        outcome.into_result()
    }
}

impl<E: fmt::Debug, A: fmt::Debug> fmt::Debug for Outcome<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
        }
    }
}

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Outcome<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure(error) => write!(formatter, "Failure({error})"),
            Self::Success(value) => write!(formatter, "Success({value})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Ok(1), Outcome::Success(1))]
    #[case(Err("error"), Outcome::Failure("error"))]
    fn from_result_preserves_variant(
        #[case] result: Result<i32, &'static str>,
        #[case] expected: Outcome<&'static str, i32>,
    ) {
        assert_eq!(Outcome::from(result), expected);
    }

    #[rstest]
    fn into_result_inverts_from_result() {
        let outcome: Outcome<String, i32> = Outcome::Failure("x".to_string());
        let result: Result<i32, String> = outcome.into();
        assert_eq!(result, Err("x".to_string()));
    }

    #[rstest]
    fn map_only_touches_success() {
        let success: Outcome<&str, i32> = Outcome::Success(2);
        let failure: Outcome<&str, i32> = Outcome::Failure("no");
        assert_eq!(success.map(|n| n * 10), Outcome::Success(20));
        assert_eq!(failure.map(|n| n * 10), Outcome::Failure("no"));
    }

    #[rstest]
    fn map_failure_only_touches_failure() {
        let failure: Outcome<&str, i32> = Outcome::Failure("no");
        assert_eq!(failure.map_failure(str::len), Outcome::Failure(2));
    }

    #[rstest]
    fn extractors_return_the_matching_side() {
        let success: Outcome<&str, i32> = Outcome::Success(5);
        assert_eq!(success.success(), Some(5));
        assert_eq!(success.failure(), None);
        assert_eq!(success.as_ref(), Outcome::Success(&5));
    }

    #[rstest]
    fn display_names_the_variant() {
        let failure: Outcome<&str, i32> = Outcome::Failure("boom");
        assert_eq!(failure.to_string(), "Failure(boom)");
        assert_eq!(format!("{:?}", Outcome::<(), i32>::Success(1)), "Success(1)");
    }
}
