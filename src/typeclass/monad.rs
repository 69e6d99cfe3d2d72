//! Monad type class - sequencing computations.
//!
//! This module provides the `Monad` trait and its `flat_map` primitive (the
//! `chain` operation of the capability contracts). Each step may depend on the
//! result of the previous step; a failed step stops the sequence.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! flat_map(pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! flat_map(m, pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! flat_map(flat_map(m, f), g) == flat_map(m, |x| flat_map(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effect_caps::typeclass::{Monad, OptionBrand};
//!
//! fn parse_positive(text: &str) -> Option<i32> {
//!     text.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = OptionBrand::<()>::flat_map(Some("42"), parse_positive);
//! assert_eq!(result, Some(42));
//! ```

use super::applicative::Applicative;
use super::higher::{OptionBrand, ResultBrand};

/// A type class for computations that can be sequenced.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// flat_map(pure(a), f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// flat_map(m, pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// flat_map(flat_map(m, f), g) == flat_map(m, |x| flat_map(f(x), g))
/// ```
pub trait Monad: Applicative {
    /// Feeds the result of `computation` into `function` and runs what it returns.
    ///
    /// In Haskell, this is `>>=` (bind).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::typeclass::{Monad, ResultBrand};
    ///
    /// let chained = ResultBrand::<String>::flat_map(Ok(5), |n| Ok(n * 2));
    /// assert_eq!(chained, Ok(10));
    /// ```
    fn flat_map<A, B, F>(computation: Self::WithType<A>, function: F) -> Self::WithType<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Self::WithType<B> + 'static;

    /// Sequences two computations, discarding the first result.
    ///
    /// In Haskell, this is the `>>` operator. If `computation` fails, `next`
    /// is dropped without being run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::typeclass::{Monad, OptionBrand};
    ///
    /// assert_eq!(OptionBrand::<()>::then(Some(1), Some("next")), Some("next"));
    /// assert_eq!(OptionBrand::<()>::then(None::<i32>, Some("next")), None);
    /// ```
    #[inline]
    fn then<A, B>(computation: Self::WithType<A>, next: Self::WithType<B>) -> Self::WithType<B>
    where
        A: 'static,
        B: 'static,
    {
        Self::flat_map(computation, move |_| next)
    }

    /// Removes one layer of nesting.
    #[inline]
    fn flatten<A>(computation: Self::WithType<Self::WithType<A>>) -> Self::WithType<A>
    where
        A: 'static,
    {
        Self::flat_map(computation, |inner| inner)
    }
}

impl<E: 'static> Monad for OptionBrand<E> {
    #[inline]
    fn flat_map<A, B, F>(computation: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Option<B> + 'static,
    {
        computation.and_then(function)
    }
}

impl<E: 'static> Monad for ResultBrand<E> {
    #[inline]
    fn flat_map<A, B, F>(computation: Result<A, E>, function: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Result<B, E> + 'static,
    {
        computation.and_then(function)
    }
}
