//! `MonadState` type class - threading a mutable state.
//!
//! The capability has two primitives: `get` reads the current state and `put`
//! replaces it. [`StateCombinators`] derives `gets`, `modify`, `state` and
//! `modify_get` from them together with `fmap` and `flat_map`.
//!
//! # Laws
//!
//! ## Get Put Law
//!
//! Writing back what was just read changes nothing:
//!
//! ```text
//! flat_map(get(), put) == pure(())
//! ```
//!
//! ## Put Get Law
//!
//! Reading right after a write yields the written state:
//!
//! ```text
//! then(put(s), get()) == then(put(s), pure(s))
//! ```
//!
//! ## Put Put Law
//!
//! Only the last write is observable:
//!
//! ```text
//! then(put(s1), put(s2)) == put(s2)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effect_caps::effect::{StateBrand, StateCombinators};
//! use effect_caps::typeclass::Monad;
//!
//! type Counter = StateBrand<u32>;
//!
//! let program = Counter::then(Counter::modify(|count| count + 1), Counter::gets(|count| count * 10));
//! assert_eq!(program.run(4), (50, 5));
//! ```

use crate::typeclass::Monad;

/// A type class for computations that thread a state of type `S`.
///
/// # Laws
///
/// ```text
/// flat_map(get(), put) == pure(())
/// then(put(s), get()) == then(put(s), pure(s))
/// then(put(s1), put(s2)) == put(s2)
/// ```
pub trait MonadState<S>: Monad
where
    S: 'static,
{
    /// Reads the current state without changing it.
    fn get() -> Self::WithType<S>;

    /// Replaces the current state with `state`.
    fn put(state: S) -> Self::WithType<()>;
}

/// Combinators derived from the `MonadState` primitives.
///
/// Blanket-implemented for every `MonadState<S>`.
pub trait StateCombinators<S>: MonadState<S>
where
    S: 'static,
{
    /// Reads the state through `projection`, leaving it unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::effect::{StateBrand, StateCombinators};
    ///
    /// let length = StateBrand::<Vec<i32>>::gets(|items| items.len());
    /// assert_eq!(length.run(vec![1, 2, 3]), (3, vec![1, 2, 3]));
    /// ```
    fn gets<A, F>(projection: F) -> Self::WithType<A>
    where
        A: 'static,
        F: FnOnce(S) -> A + 'static,
    {
        Self::fmap(Self::get(), projection)
    }

    /// Replaces the state with `function(current)` in one step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::effect::{StateBrand, StateCombinators};
    ///
    /// let increment = StateBrand::<i32>::modify(|count| count + 1);
    /// assert_eq!(increment.run(41), ((), 42));
    /// ```
    fn modify<F>(function: F) -> Self::WithType<()>
    where
        F: FnOnce(S) -> S + 'static,
    {
        Self::flat_map(Self::get(), move |state| Self::put(function(state)))
    }

    /// Runs a whole transition `S -> (A, S)` as one step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_caps::effect::{StateBrand, StateCombinators};
    ///
    /// let pop = StateBrand::<Vec<i32>>::state(|mut stack| {
    ///     let top = stack.pop();
    ///     (top, stack)
    /// });
    /// assert_eq!(pop.run(vec![1, 2]), (Some(2), vec![1]));
    /// ```
    fn state<A, F>(transition: F) -> Self::WithType<A>
    where
        A: 'static,
        F: FnOnce(S) -> (A, S) + 'static,
    {
        Self::flat_map(Self::get(), move |current| {
            let (value, next) = transition(current);
            Self::fmap(Self::put(next), move |()| value)
        })
    }

    /// Modifies the state and yields the new state.
    fn modify_get<F>(function: F) -> Self::WithType<S>
    where
        F: FnOnce(S) -> S + 'static,
    {
        Self::flat_map(Self::modify(function), |()| Self::get())
    }
}

impl<S: 'static, M: MonadState<S>> StateCombinators<S> for M {}
