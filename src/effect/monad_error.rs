//! `MonadError` type class - failure signalling and recovery.
//!
//! This module provides the `MonadError` capability, whose only primitives
//! are `throw_error` and `catch_error`, and the [`ErrorCombinators`]
//! extension, which derives `catch_just`, `try_catch`, `with_resource` and a
//! handful of smaller helpers from those primitives alone. The combinators are
//! written once and work for every backend that implements the capability.
//!
//! # Laws
//!
//! All `MonadError` implementations must satisfy these laws:
//!
//! ## Left Zero Law
//!
//! Sequencing anything after a failure reproduces the same failure:
//!
//! ```text
//! flat_map(throw_error(e), f) == throw_error(e)
//! ```
//!
//! ## Catch Law
//!
//! Recovering a freshly signalled failure runs the handler on it:
//!
//! ```text
//! catch_error(throw_error(e), f) == f(e)
//! ```
//!
//! ## Pure Catch Law
//!
//! Recovering a success is a no-op:
//!
//! ```text
//! catch_error(pure(a), f) == pure(a)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effect_caps::effect::{ErrorCombinators, MonadError};
//! use effect_caps::typeclass::ResultBrand;
//!
//! fn inverse<M: MonadError<String>>(x: f64) -> M::WithType<f64> {
//!     if x == 0.0 {
//!         M::throw_error("cannot divide by zero".to_string())
//!     } else {
//!         M::pure(1.0 / x)
//!     }
//! }
//!
//! assert_eq!(inverse::<ResultBrand<String>>(2.0), Ok(0.5));
//! assert_eq!(
//!     inverse::<ResultBrand<String>>(0.0),
//!     Err("cannot divide by zero".to_string())
//! );
//!
//! let recovered = ResultBrand::<String>::catch_just(
//!     |error: &String| error.starts_with("cannot").then_some(0.0),
//!     inverse::<ResultBrand<String>>(0.0),
//!     |fallback| Ok(fallback),
//! );
//! assert_eq!(recovered, Ok(0.0));
//! ```

use crate::control::Outcome;
use crate::typeclass::{Monad, OptionBrand, ResultBrand};

/// A type class for computations that can fail and recover.
///
/// `MonadError<E>` extends `Monad` with a single failure channel carrying
/// values of type `E`.
///
/// # Type Parameters
///
/// - `E`: The error type
///
/// # Laws
///
/// ## Left Zero Law
///
/// ```text
/// flat_map(throw_error(e), f) == throw_error(e)
/// ```
///
/// ## Catch Law
///
/// ```text
/// catch_error(throw_error(e), f) == f(e)
/// ```
///
/// ## Pure Catch Law
///
/// ```text
/// catch_error(pure(a), f) == pure(a)
/// ```
///
/// # Implementations
///
/// - [`ResultBrand<E>`]: `Err(e)` is a failure carrying `e`.
/// - [`OptionBrand<E>`]: `None` is a failure. The error value is discarded on
///   `throw_error`, and `catch_error` hands the handler `E::default()`. With
///   `E = ()` nothing is lost and every law holds exactly.
/// - `TaskResultBrand<E>` (feature `async`): a deferred `Result<A, E>`.
pub trait MonadError<E>: Monad {
    /// Signals a failure carrying `error`.
    ///
    /// The result type is unconstrained: a failure can stand in for a
    /// computation of any type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::effect::MonadError;
    /// use effect_caps::typeclass::ResultBrand;
    ///
    /// let failed: Result<i32, String> = ResultBrand::<String>::throw_error("oops".to_string());
    /// assert_eq!(failed, Err("oops".to_string()));
    /// ```
    fn throw_error<A>(error: E) -> Self::WithType<A>
    where
        A: 'static;

    /// Recovers from a failure.
    ///
    /// If `computation` fails with `e`, the result is `handler(e)`. Otherwise
    /// the result is `computation` unchanged and `handler` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::effect::MonadError;
    /// use effect_caps::typeclass::ResultBrand;
    ///
    /// let failing: Result<usize, String> = Err("error".to_string());
    /// let recovered = ResultBrand::<String>::catch_error(failing, |error| Ok(error.len()));
    /// assert_eq!(recovered, Ok(5));
    /// ```
    fn catch_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        A: 'static,
        F: FnOnce(E) -> Self::WithType<A> + 'static;
}

// =============================================================================
// Option Implementation
// =============================================================================

impl<E: Default + 'static> MonadError<E> for OptionBrand<E> {
    #[inline]
    fn throw_error<A>(_error: E) -> Option<A>
    where
        A: 'static,
    {
        None
    }

    #[inline]
    fn catch_error<A, F>(computation: Option<A>, handler: F) -> Option<A>
    where
        A: 'static,
        F: FnOnce(E) -> Option<A> + 'static,
    {
        match computation {
            Some(value) => Some(value),
            None => handler(E::default()),
        }
    }
}

// =============================================================================
// Result Implementation
// =============================================================================

impl<E: 'static> MonadError<E> for ResultBrand<E> {
    #[inline]
    fn throw_error<A>(error: E) -> Result<A, E>
    where
        A: 'static,
    {
        Err(error)
    }

    #[inline]
    fn catch_error<A, F>(computation: Result<A, E>, handler: F) -> Result<A, E>
    where
        A: 'static,
        F: FnOnce(E) -> Result<A, E> + 'static,
    {
        match computation {
            Ok(value) => Ok(value),
            Err(error) => handler(error),
        }
    }
}

// =============================================================================
// Generic Combinators
// =============================================================================

/// Combinators derived from the `MonadError` primitives.
///
/// This trait is implemented for every `MonadError<E>` through a blanket
/// implementation and cannot be implemented by hand, so each combinator has
/// exactly one definition shared by all backends. Only `fmap`, `pure`,
/// `flat_map`, `throw_error` and `catch_error` are ever called.
pub trait ErrorCombinators<E>: MonadError<E>
where
    E: 'static,
{
    /// Recovers only from the failures `predicate` selects.
    ///
    /// On failure `e`, `predicate(&e)` decides: `Some(b)` runs `handler(b)`,
    /// `None` re-signals the original `e` untouched. On success neither
    /// `predicate` nor `handler` is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::effect::ErrorCombinators;
    /// use effect_caps::typeclass::ResultBrand;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Error {
    ///     A,
    ///     B,
    /// }
    ///
    /// let select_a = |error: &Error| (*error == Error::A).then_some(());
    ///
    /// let handled = ResultBrand::<Error>::catch_just(select_a, Err::<i32, _>(Error::A), |()| Ok(2));
    /// assert_eq!(handled, Ok(2));
    ///
    /// let passed = ResultBrand::<Error>::catch_just(select_a, Err::<i32, _>(Error::B), |()| Ok(2));
    /// assert_eq!(passed, Err(Error::B));
    /// ```
    fn catch_just<A, B, P, H>(
        predicate: P,
        computation: Self::WithType<A>,
        handler: H,
    ) -> Self::WithType<A>
    where
        A: 'static,
        B: 'static,
        P: FnOnce(&E) -> Option<B> + 'static,
        H: FnOnce(B) -> Self::WithType<A> + 'static,
    {
        Self::catch_error(computation, move |error| match predicate(&error) {
            Some(selected) => handler(selected),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!("catch_just: error not selected, re-signalling");
                Self::throw_error(error)
            }
        })
    }

    /// Turns a computation into one that never fails.
    ///
    /// A success `a` becomes `Outcome::Success(a)`; a failure `e` is recovered
    /// into `pure(Outcome::Failure(e))`. Relies on `pure` being failure-free.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::control::Outcome;
    /// use effect_caps::effect::ErrorCombinators;
    /// use effect_caps::typeclass::OptionBrand;
    ///
    /// assert_eq!(OptionBrand::<()>::try_catch(None::<i32>), Some(Outcome::Failure(())));
    /// assert_eq!(OptionBrand::<()>::try_catch(Some(1)), Some(Outcome::Success(1)));
    /// ```
    fn try_catch<A>(computation: Self::WithType<A>) -> Self::WithType<Outcome<E, A>>
    where
        A: 'static,
    {
        Self::catch_error(
            Self::fmap(computation, Outcome::<E, A>::Success),
            |error| Self::pure(Outcome::Failure(error)),
        )
    }

    /// Runs `program` on an acquired resource and always releases it.
    ///
    /// 1. `acquire` runs first. If it fails, the failure propagates and
    ///    neither `release` nor `program` is invoked.
    /// 2. `program(r)` runs with its outcome captured by `try_catch`, so a
    ///    failure cannot skip the cleanup.
    /// 3. `release(r)` runs exactly once, whatever `program` did.
    /// 4. The captured outcome is re-surfaced: the original error, or the
    ///    original value.
    ///
    /// A failing `release` is sequenced before step 4, so by the left zero
    /// law its failure replaces the outcome of `program`. Cleanup failures
    /// take priority over body failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// use effect_caps::effect::ErrorCombinators;
    /// use effect_caps::typeclass::OptionBrand;
    ///
    /// let released = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&released);
    ///
    /// let result = OptionBrand::<()>::with_resource(
    ///     Some(1),
    ///     move |_| {
    ///         counter.set(counter.get() + 1);
    ///         Some(())
    ///     },
    ///     |_| None::<i32>,
    /// );
    ///
    /// assert_eq!(result, None);
    /// assert_eq!(released.get(), 1);
    /// ```
    fn with_resource<R, A, Release, Program>(
        acquire: Self::WithType<R>,
        release: Release,
        program: Program,
    ) -> Self::WithType<A>
    where
        R: Clone + 'static,
        A: 'static,
        Release: FnOnce(R) -> Self::WithType<()> + 'static,
        Program: FnOnce(R) -> Self::WithType<A> + 'static,
    {
        Self::flat_map(acquire, move |resource: R| {
            let captured = Self::try_catch(program(resource.clone()));
            Self::flat_map(captured, move |outcome: Outcome<E, A>| {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    program_failed = outcome.is_failure(),
                    "with_resource: releasing resource"
                );
                Self::flat_map(release(resource), move |()| match outcome {
                    Outcome::Failure(error) => Self::throw_error(error),
                    Outcome::Success(value) => Self::pure(value),
                })
            })
        })
    }

    /// Lifts a `Result` into the computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::effect::ErrorCombinators;
    /// use effect_caps::typeclass::OptionBrand;
    ///
    /// assert_eq!(OptionBrand::<()>::from_result(Ok::<i32, ()>(1)), Some(1));
    /// assert_eq!(OptionBrand::<()>::from_result(Err::<i32, ()>(())), None);
    /// ```
    fn from_result<A>(result: Result<A, E>) -> Self::WithType<A>
    where
        A: 'static,
    {
        match result {
            Ok(value) => Self::pure(value),
            Err(error) => Self::throw_error(error),
        }
    }

    /// Recovers from any failure with a plain value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::effect::ErrorCombinators;
    /// use effect_caps::typeclass::ResultBrand;
    ///
    /// let failing: Result<i32, String> = Err("error".to_string());
    /// assert_eq!(ResultBrand::<String>::handle_error(failing, |_| 0), Ok(0));
    /// ```
    fn handle_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        A: 'static,
        F: FnOnce(E) -> A + 'static,
    {
        Self::catch_error(computation, move |error| Self::pure(handler(error)))
    }

    /// Transforms the error of a failure, which stays a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::effect::ErrorCombinators;
    /// use effect_caps::typeclass::ResultBrand;
    ///
    /// let failing: Result<i32, String> = Err("file not found".to_string());
    /// let adapted = ResultBrand::<String>::adapt_error(failing, |error| format!("config: {error}"));
    /// assert_eq!(adapted, Err("config: file not found".to_string()));
    /// ```
    fn adapt_error<A, F>(computation: Self::WithType<A>, transform: F) -> Self::WithType<A>
    where
        A: 'static,
        F: FnOnce(E) -> E + 'static,
    {
        Self::catch_error(computation, move |error| Self::throw_error(transform(error)))
    }

    /// Fails with `error()` when the success value does not satisfy `predicate`.
    ///
    /// An existing failure passes through; neither function is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::effect::ErrorCombinators;
    /// use effect_caps::typeclass::ResultBrand;
    ///
    /// let checked = ResultBrand::<String>::ensure(Ok(-5), || "negative".to_string(), |n: &i32| *n >= 0);
    /// assert_eq!(checked, Err("negative".to_string()));
    /// ```
    fn ensure<A, F, P>(computation: Self::WithType<A>, error: F, predicate: P) -> Self::WithType<A>
    where
        A: 'static,
        F: FnOnce() -> E + 'static,
        P: FnOnce(&A) -> bool + 'static,
    {
        Self::flat_map(computation, move |value| {
            if predicate(&value) {
                Self::pure(value)
            } else {
                Self::throw_error(error())
            }
        })
    }

    /// Folds both channels into a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::effect::ErrorCombinators;
    /// use effect_caps::typeclass::ResultBrand;
    ///
    /// let message = ResultBrand::<String>::redeem(
    ///     Err::<i32, String>("not found".to_string()),
    ///     |error| format!("Error: {error}"),
    ///     |value| format!("Value: {value}"),
    /// );
    /// assert_eq!(message, Ok("Error: not found".to_string()));
    /// ```
    fn redeem<A, B, Recover, Transform>(
        computation: Self::WithType<A>,
        recover: Recover,
        transform: Transform,
    ) -> Self::WithType<B>
    where
        A: 'static,
        B: 'static,
        Recover: FnOnce(E) -> B + 'static,
        Transform: FnOnce(A) -> B + 'static,
    {
        Self::fmap(Self::try_catch(computation), move |outcome| {
            outcome.fold(recover, transform)
        })
    }
}

impl<E: 'static, M: MonadError<E>> ErrorCombinators<E> for M {}
