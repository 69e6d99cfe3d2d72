//! Functor type class - mapping over computation results.
//!
//! This module provides the `Functor` trait, the `map` primitive every
//! capability builds on. It transforms the result of a computation without
//! otherwise changing what the computation does.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fmap(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fmap(fmap(fa, f), g) == fmap(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effect_caps::typeclass::{Functor, OptionBrand, ResultBrand};
//!
//! let transformed = OptionBrand::<()>::fmap(Some(5), |n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let failed: Result<i32, String> = Err("boom".to_string());
//! assert_eq!(ResultBrand::<String>::fmap(failed, |n| n + 1), Err("boom".to_string()));
//! ```

use super::higher::{OptionBrand, ResultBrand, TypeConstructor};

/// A type class for computations whose result can be transformed.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fmap(fa, |x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fmap(fmap(fa, f), g) == fmap(fa, |x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the result of the computation.
    ///
    /// Failures (where the backend has them) pass through and the function
    /// is not invoked.
    ///
    /// # Arguments
    ///
    /// * `computation` - The computation to transform
    /// * `function` - A function that transforms the result
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::typeclass::{Functor, OptionBrand};
    ///
    /// assert_eq!(OptionBrand::<()>::fmap(Some(5), |n| n * 2), Some(10));
    /// assert_eq!(OptionBrand::<()>::fmap(None::<i32>, |n| n * 2), None);
    /// ```
    fn fmap<A, B, F>(computation: Self::WithType<A>, function: F) -> Self::WithType<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static;

    /// Replaces the result of the computation with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::typeclass::{Functor, ResultBrand};
    ///
    /// let replaced = ResultBrand::<String>::replace(Ok(1), "done");
    /// assert_eq!(replaced, Ok("done"));
    /// ```
    #[inline]
    fn replace<A, B>(computation: Self::WithType<A>, value: B) -> Self::WithType<B>
    where
        A: 'static,
        B: 'static,
    {
        Self::fmap(computation, move |_| value)
    }

    /// Discards the result of the computation.
    #[inline]
    fn void<A>(computation: Self::WithType<A>) -> Self::WithType<()>
    where
        A: 'static,
    {
        Self::replace(computation, ())
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

impl<E: 'static> Functor for OptionBrand<E> {
    #[inline]
    fn fmap<A, B, F>(computation: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        computation.map(function)
    }
}

// =============================================================================
// Result Implementation
// =============================================================================

impl<E: 'static> Functor for ResultBrand<E> {
    #[inline]
    fn fmap<A, B, F>(computation: Result<A, E>, function: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        computation.map(function)
    }
}
