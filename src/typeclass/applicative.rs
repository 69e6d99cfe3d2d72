//! Applicative type class - lifting plain values into a computation.
//!
//! This module provides the `Applicative` trait and its `pure` primitive
//! (the `of` operation of the capability contracts). `pure` must never
//! produce a failure: `try_catch` relies on it to reify errors as data.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fmap(pure(a), |x| x) == pure(a)
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! fmap(pure(a), f) == pure(f(a))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effect_caps::typeclass::{Applicative, OptionBrand, ResultBrand};
//!
//! assert_eq!(OptionBrand::<()>::pure(42), Some(42));
//! assert_eq!(ResultBrand::<String>::pure(42), Ok(42));
//! ```

use super::functor::Functor;
use super::higher::{OptionBrand, ResultBrand};

/// A type class for computations that can be built from a plain value.
///
/// # Laws
///
/// ## Homomorphism Law
///
/// ```text
/// fmap(pure(a), f) == pure(f(a))
/// ```
///
/// ## Failure Freedom
///
/// `pure(a)` always denotes a success. Backends whose `pure` can fail do not
/// conform.
pub trait Applicative: Functor {
    /// Lifts a value into a successful computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::typeclass::{Applicative, ResultBrand};
    ///
    /// let lifted: Result<&str, ()> = ResultBrand::<()>::pure("hello");
    /// assert_eq!(lifted, Ok("hello"));
    /// ```
    fn pure<A>(value: A) -> Self::WithType<A>
    where
        A: 'static;

    /// Lifts a value without producing a meaningful result.
    #[inline]
    fn unit() -> Self::WithType<()> {
        Self::pure(())
    }
}

impl<E: 'static> Applicative for OptionBrand<E> {
    #[inline]
    fn pure<A>(value: A) -> Option<A>
    where
        A: 'static,
    {
        Some(value)
    }
}

impl<E: 'static> Applicative for ResultBrand<E> {
    #[inline]
    fn pure<A>(value: A) -> Result<A, E>
    where
        A: 'static,
    {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-7)]
    #[case(i32::MAX)]
    fn option_pure_creates_some(#[case] value: i32) {
        assert_eq!(OptionBrand::<()>::pure(value), Some(value));
    }

    #[rstest]
    fn result_pure_creates_ok() {
        assert_eq!(ResultBrand::<String>::pure("value"), Ok("value"));
    }

    #[rstest]
    fn unit_is_pure_unit() {
        assert_eq!(OptionBrand::<()>::unit(), Some(()));
        assert_eq!(ResultBrand::<String>::unit(), Ok(()));
    }

    #[rstest]
    fn homomorphism_law_holds_for_result() {
        let function = |n: i32| n.to_string();
        let left = ResultBrand::<String>::fmap(ResultBrand::<String>::pure(5), function);
        let right: Result<String, String> = ResultBrand::<String>::pure(function(5));
        assert_eq!(left, right);
    }
}
