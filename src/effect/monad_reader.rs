//! `MonadReader` type class - access to a read-only environment.
//!
//! The capability has two primitives: `ask`, which yields the environment, and
//! `local`, which runs a nested computation under a modified environment.
//! [`ReaderCombinators`] derives `asks` and `local_ask` from them.
//!
//! `local` is a primitive rather than a combinator: substituting the
//! environment for a nested computation cannot be expressed with `ask` and
//! `fmap`. Written against `ask` alone, `local(f)` collapses into the
//! projection `fmap(ask(), f)`, which never touches the nested computation.
//! That projection is still available as [`ReaderCombinators::local_ask`],
//! and it coincides with `asks`.
//!
//! # Laws
//!
//! ## Local Identity Law
//!
//! ```text
//! local(|r| r, m) == m
//! ```
//!
//! ## Local Composition Law
//!
//! ```text
//! local(f, local(g, m)) == local(|r| g(f(r)), m)
//! ```
//!
//! ## Asks Law
//!
//! ```text
//! asks(f) == fmap(ask(), f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effect_caps::effect::{MonadReader, ReaderBrand, ReaderCombinators};
//!
//! type Env = ReaderBrand<u32>;
//!
//! let doubled = Env::local(|limit| limit * 2, Env::asks(|limit: u32| limit + 1));
//! assert_eq!(doubled.run(10), 21);
//! ```

use crate::typeclass::Functor;

/// A type class for computations that read an environment of type `R`.
///
/// # Laws
///
/// ```text
/// local(|r| r, m) == m
/// local(f, local(g, m)) == local(|r| g(f(r)), m)
/// ```
pub trait MonadReader<R>: Functor
where
    R: 'static,
{
    /// Yields the current environment.
    fn ask() -> Self::WithType<R>;

    /// Runs `computation` under the environment `modifier(current)`.
    ///
    /// Only `computation` sees the modified environment. Anything sequenced
    /// after the result still reads the outer one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::effect::{MonadReader, ReaderBrand};
    ///
    /// let reader = ReaderBrand::<String>::local(
    ///     |name| name.to_uppercase(),
    ///     ReaderBrand::<String>::ask(),
    /// );
    /// assert_eq!(reader.run("alice".to_string()), "ALICE");
    /// ```
    fn local<A, F>(modifier: F, computation: Self::WithType<A>) -> Self::WithType<A>
    where
        A: 'static,
        F: FnOnce(R) -> R + 'static;
}

/// Combinators derived from the `MonadReader` primitives.
///
/// Blanket-implemented for every `MonadReader<R>`.
pub trait ReaderCombinators<R>: MonadReader<R>
where
    R: 'static,
{
    /// Projects the environment through `projection`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::effect::{ReaderBrand, ReaderCombinators};
    ///
    /// let length = ReaderBrand::<String>::asks(|name: String| name.len());
    /// assert_eq!(length.run("effect".to_string()), 6);
    /// ```
    fn asks<A, F>(projection: F) -> Self::WithType<A>
    where
        A: 'static,
        F: FnOnce(R) -> A + 'static,
    {
        Self::fmap(Self::ask(), projection)
    }

    /// Reads the environment as seen under `modifier`.
    ///
    /// Equal to `local(modifier, ask())` and therefore to `asks(modifier)`:
    /// with `ask` as the nested computation, substitution and projection
    /// cannot be told apart.
    fn local_ask<F>(modifier: F) -> Self::WithType<R>
    where
        F: FnOnce(R) -> R + 'static,
    {
        Self::local(modifier, Self::ask())
    }
}

impl<R: 'static, M: MonadReader<R>> ReaderCombinators<R> for M {}
