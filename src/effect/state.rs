//! State backend - computations that thread a state.
//!
//! A `State<S, A>` wraps a transition `S -> (A, S)`: it takes the current
//! state, produces a result and hands on the next state. [`StateBrand<S>`]
//! exposes the backend to the generic combinators.
//!
//! # Laws
//!
//! State satisfies the Functor and Monad laws, plus the `MonadState` laws:
//!
//! - Get Put Law: `flat_map(get(), put) == pure(())`
//! - Put Get Law: `then(put(s), get())` returns `s`
//! - Put Put Law: `then(put(s1), put(s2)) == put(s2)`
//! - Modify Composition: `then(modify(f), modify(g)) == modify(|s| g(f(s)))`
//!
//! # Examples
//!
//! ```rust
//! use effect_caps::effect::{MonadState, State, StateBrand, StateCombinators};
//! use effect_caps::typeclass::Monad;
//!
//! type Counter = StateBrand<i32>;
//!
//! let next_id: State<i32, i32> = Counter::flat_map(Counter::get(), |id| {
//!     Counter::then(Counter::put(id + 1), Counter::gets(move |_| id))
//! });
//!
//! assert_eq!(next_id.run(7), (7, 8));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::monad_state::MonadState;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A computation that threads a state of type `S` and produces an `A`.
///
/// A `State` runs once: [`State::run`] consumes it.
///
/// # Examples
///
/// ```rust
/// use effect_caps::effect::State;
///
/// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
/// assert_eq!(state.run(10), (20, 11));
/// ```
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    transition: Box<dyn FnOnce(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a new State from a transition function.
    pub fn new<F>(transition: F) -> Self
    where
        F: FnOnce(S) -> (A, S) + 'static,
    {
        Self {
            transition: Box::new(transition),
        }
    }

    /// Runs the transition, returning the result and the final state.
    pub fn run(self, initial_state: S) -> (A, S) {
        (self.transition)(initial_state)
    }

    /// Runs the transition and keeps only the result.
    pub fn eval(self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the transition and keeps only the final state.
    pub fn exec(self, initial_state: S) -> S {
        self.run(initial_state).1
    }
}

impl<S, A> fmt::Debug for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("State(<function>)")
    }
}

/// Brand for the [`State`] backend with state type `S`.
pub struct StateBrand<S> {
    _state: PhantomData<fn() -> S>,
}

static_assertions::assert_impl_all!(StateBrand<Vec<u8>>: Send, Sync);

impl<S: 'static> TypeConstructor for StateBrand<S> {
    type WithType<A>
        = State<S, A>
    where
        A: 'static;
}

impl<S: 'static> Functor for StateBrand<S> {
    fn fmap<A, B, F>(computation: State<S, A>, function: F) -> State<S, B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        State::new(move |state| {
            let (value, next) = computation.run(state);
            (function(value), next)
        })
    }
}

impl<S: 'static> Applicative for StateBrand<S> {
    fn pure<A>(value: A) -> State<S, A>
    where
        A: 'static,
    {
        State::new(move |state| (value, state))
    }
}

impl<S: 'static> Monad for StateBrand<S> {
    fn flat_map<A, B, F>(computation: State<S, A>, function: F) -> State<S, B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> State<S, B> + 'static,
    {
        State::new(move |state| {
            let (value, next) = computation.run(state);
            function(value).run(next)
        })
    }
}

/// `get` returns the state and keeps it, hence `S: Clone`.
impl<S: Clone + 'static> MonadState<S> for StateBrand<S> {
    fn get() -> State<S, S> {
        State::new(|state: S| (state.clone(), state))
    }

    fn put(state: S) -> State<S, ()> {
        State::new(move |_| ((), state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Counter = StateBrand<i32>;

    #[rstest]
    fn run_eval_exec_agree() {
        let make = || State::new(|s: i32| (s.to_string(), s * 2));
        assert_eq!(make().run(3), ("3".to_string(), 6));
        assert_eq!(make().eval(3), "3");
        assert_eq!(make().exec(3), 6);
    }

    #[rstest]
    fn fmap_keeps_state() {
        let state = Counter::fmap(State::new(|s: i32| (s, s + 1)), |value| value * 10);
        assert_eq!(state.run(2), (20, 3));
    }

    #[rstest]
    fn pure_keeps_state() {
        assert_eq!(Counter::pure('x').run(5), ('x', 5));
    }

    #[rstest]
    fn flat_map_threads_state_in_order() {
        let state = Counter::flat_map(State::new(|s: i32| (s, s + 1)), |first| {
            State::new(move |s: i32| ((first, s), s * 10))
        });
        assert_eq!(state.run(1), ((1, 2), 20));
    }

    #[rstest]
    #[case(0)]
    #[case(99)]
    fn get_returns_state_unchanged(#[case] initial: i32) {
        assert_eq!(Counter::get().run(initial), (initial, initial));
    }

    #[rstest]
    fn put_replaces_state() {
        assert_eq!(Counter::put(3).run(100), ((), 3));
    }

    #[rstest]
    fn get_clones_owned_state() {
        let state = StateBrand::<String>::get();
        assert_eq!(state.run("s".to_string()), ("s".to_string(), "s".to_string()));
    }
}
