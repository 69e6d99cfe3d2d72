//! Reusable law checkers for capability backends.
//!
//! Every check builds both sides of one law for a backend `M`, runs them
//! through a caller-supplied `observe` function and returns the two
//! observations as an [`Equation`]. Observing is what makes the checks work
//! for deferred backends: a `Reader` is observed by running it against an
//! environment, a `State` by running it from an initial state, a
//! `TaskResult` by awaiting it.
//!
//! The checks only use the public capability traits, so a backend defined
//! outside this crate can be verified the same way.
//!
//! # Examples
//!
//! ```rust
//! use effect_caps::laws::ErrorLaws;
//! use effect_caps::typeclass::ResultBrand;
//!
//! type Laws = ErrorLaws<ResultBrand<String>, String>;
//!
//! let equation = Laws::left_zero("boom".to_string(), |n: i32| Ok(n + 1), |result| result);
//! assert!(equation.holds());
//! ```

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::control::Outcome;
use crate::effect::{ErrorCombinators, ReaderCombinators, StateCombinators};

/// The observed left and right sides of a law.
#[derive(Clone, PartialEq, Eq)]
pub struct Equation<T> {
    /// Observation of the left-hand side.
    pub left: T,
    /// Observation of the right-hand side.
    pub right: T,
}

impl<T: PartialEq> Equation<T> {
    /// Returns `true` if both sides were observed equal.
    pub fn holds(&self) -> bool {
        self.left == self.right
    }
}

impl<T: fmt::Debug> fmt::Debug for Equation<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:?} == {:?}", self.left, self.right)
    }
}

/// Result of a `with_resource` check: the law plus how often each callback ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCheck<T> {
    /// Observed `with_resource` result against the expected one.
    pub equation: Equation<T>,
    /// Number of times `release` ran while observing.
    pub releases: usize,
    /// Number of times `program` ran while observing.
    pub program_runs: usize,
}

fn counter() -> (Rc<Cell<usize>>, Rc<Cell<usize>>) {
    let count = Rc::new(Cell::new(0));
    (Rc::clone(&count), count)
}

// =============================================================================
// Error Laws
// =============================================================================

/// Law checks for `MonadError<E>` backends.
pub struct ErrorLaws<M, E> {
    _marker: PhantomData<fn() -> (M, E)>,
}

impl<M, E> ErrorLaws<M, E>
where
    M: ErrorCombinators<E>,
    E: Clone + 'static,
{
    /// `flat_map(throw_error(e), f) == throw_error(e)`
    pub fn left_zero<A, B, F, O, T>(error: E, function: F, observe: O) -> Equation<T>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> M::WithType<B> + 'static,
        O: Fn(M::WithType<B>) -> T,
    {
        Equation {
            left: observe(M::flat_map(M::throw_error(error.clone()), function)),
            right: observe(M::throw_error(error)),
        }
    }

    /// `catch_error(throw_error(e), f) == f(e)`
    pub fn catch<A, H, O, T>(error: E, handler: H, observe: O) -> Equation<T>
    where
        A: 'static,
        H: Fn(E) -> M::WithType<A> + Clone + 'static,
        O: Fn(M::WithType<A>) -> T,
    {
        Equation {
            left: observe(M::catch_error(M::throw_error(error.clone()), handler.clone())),
            right: observe(handler(error)),
        }
    }

    /// `catch_error(pure(a), f) == pure(a)`
    pub fn pure_catch<A, H, O, T>(value: A, handler: H, observe: O) -> Equation<T>
    where
        A: Clone + 'static,
        H: FnOnce(E) -> M::WithType<A> + 'static,
        O: Fn(M::WithType<A>) -> T,
    {
        Equation {
            left: observe(M::catch_error(M::pure(value.clone()), handler)),
            right: observe(M::pure(value)),
        }
    }

    /// `catch_just(p, throw_error(e), h)` is `h(b)` when `p(&e) == Some(b)`
    /// and `throw_error(e)` otherwise.
    pub fn catch_just_selective<A, B, P, H, O, T>(
        error: E,
        predicate: P,
        handler: H,
        observe: O,
    ) -> Equation<T>
    where
        A: 'static,
        B: 'static,
        P: Fn(&E) -> Option<B> + Clone + 'static,
        H: Fn(B) -> M::WithType<A> + Clone + 'static,
        O: Fn(M::WithType<A>) -> T,
    {
        let expected = match predicate(&error) {
            Some(selected) => handler(selected),
            None => M::throw_error(error.clone()),
        };
        Equation {
            left: observe(M::catch_just(predicate, M::throw_error(error), handler)),
            right: observe(expected),
        }
    }

    /// `try_catch(pure(a)) == pure(Success(a))`
    pub fn try_catch_success<A, O, T>(value: A, observe: O) -> Equation<T>
    where
        A: Clone + 'static,
        O: Fn(M::WithType<Outcome<E, A>>) -> T,
    {
        Equation {
            left: observe(M::try_catch(M::pure(value.clone()))),
            right: observe(M::pure(Outcome::Success(value))),
        }
    }

    /// `try_catch(throw_error(e)) == pure(Failure(e))`
    pub fn try_catch_failure<A, O, T>(error: E, observe: O) -> Equation<T>
    where
        A: 'static,
        O: Fn(M::WithType<Outcome<E, A>>) -> T,
    {
        Equation {
            left: observe(M::try_catch(M::throw_error::<A>(error.clone()))),
            right: observe(M::pure(Outcome::Failure(error))),
        }
    }

    /// Runs `with_resource` over a successful acquire.
    ///
    /// `release` and `program` are the results the two callbacks produce. The
    /// expected result is `release`'s failure if it has one, `program`'s
    /// result otherwise.
    pub fn with_resource_releases<R, A, O, T>(
        resource: R,
        release: Result<(), E>,
        program: Result<A, E>,
        observe: O,
    ) -> ResourceCheck<T>
    where
        R: Clone + 'static,
        A: Clone + 'static,
        O: Fn(M::WithType<A>) -> T,
    {
        let (release_count, releases) = counter();
        let (program_count, program_runs) = counter();
        let expected = match &release {
            Err(error) => Err(error.clone()),
            Ok(()) => program.clone(),
        };
        let left = observe(M::with_resource(
            M::pure(resource),
            move |_| {
                release_count.set(release_count.get() + 1);
                M::from_result(release)
            },
            move |_| {
                program_count.set(program_count.get() + 1);
                M::from_result(program)
            },
        ));
        ResourceCheck {
            equation: Equation {
                left,
                right: observe(M::from_result(expected)),
            },
            releases: releases.get(),
            program_runs: program_runs.get(),
        }
    }

    /// Runs `with_resource` over a failing acquire; nothing else may run.
    pub fn with_resource_failed_acquire<R, A, O, T>(error: E, observe: O) -> ResourceCheck<T>
    where
        R: Clone + 'static,
        A: 'static,
        O: Fn(M::WithType<A>) -> T,
    {
        let (release_count, releases) = counter();
        let (program_count, program_runs) = counter();
        let program_error = error.clone();
        let left = observe(M::with_resource(
            M::throw_error::<R>(error.clone()),
            move |_| {
                release_count.set(release_count.get() + 1);
                M::pure(())
            },
            move |_| {
                program_count.set(program_count.get() + 1);
                M::throw_error::<A>(program_error)
            },
        ));
        ResourceCheck {
            equation: Equation {
                left,
                right: observe(M::throw_error(error)),
            },
            releases: releases.get(),
            program_runs: program_runs.get(),
        }
    }
}

// =============================================================================
// Reader Laws
// =============================================================================

/// Law checks for `MonadReader<R>` backends.
///
/// Reader computations may be single-use, so checks that need the same
/// computation twice take a `make` function that builds a fresh one.
pub struct ReaderLaws<M, R> {
    _marker: PhantomData<fn() -> (M, R)>,
}

impl<M, R> ReaderLaws<M, R>
where
    M: ReaderCombinators<R>,
    R: 'static,
{
    /// `asks(f) == fmap(ask(), f)`
    pub fn asks_projection<A, F, O, T>(projection: F, observe: O) -> Equation<T>
    where
        A: 'static,
        F: Fn(R) -> A + Clone + 'static,
        O: Fn(M::WithType<A>) -> T,
    {
        Equation {
            left: observe(M::asks(projection.clone())),
            right: observe(M::fmap(M::ask(), projection)),
        }
    }

    /// `local(|r| r, m) == m`
    pub fn local_identity<A, K, O, T>(make: K, observe: O) -> Equation<T>
    where
        A: 'static,
        K: Fn() -> M::WithType<A>,
        O: Fn(M::WithType<A>) -> T,
    {
        Equation {
            left: observe(M::local(|environment| environment, make())),
            right: observe(make()),
        }
    }

    /// `local(f, local(g, m)) == local(|r| g(f(r)), m)`
    pub fn local_composition<A, F, G, K, O, T>(
        outer: F,
        inner: G,
        make: K,
        observe: O,
    ) -> Equation<T>
    where
        A: 'static,
        F: Fn(R) -> R + Clone + 'static,
        G: Fn(R) -> R + Clone + 'static,
        K: Fn() -> M::WithType<A>,
        O: Fn(M::WithType<A>) -> T,
    {
        let nested = M::local(outer.clone(), M::local(inner.clone(), make()));
        let composed = M::local(move |environment| inner(outer(environment)), make());
        Equation {
            left: observe(nested),
            right: observe(composed),
        }
    }

    /// `local(f, ask()) == asks(f)`
    ///
    /// The one place where substituting the environment and projecting it
    /// coincide.
    pub fn local_ask_is_asks<F, O, T>(modifier: F, observe: O) -> Equation<T>
    where
        F: Fn(R) -> R + Clone + 'static,
        O: Fn(M::WithType<R>) -> T,
    {
        Equation {
            left: observe(M::local_ask(modifier.clone())),
            right: observe(M::asks(modifier)),
        }
    }
}

// =============================================================================
// State Laws
// =============================================================================

/// Law checks for `MonadState<S>` backends.
pub struct StateLaws<M, S> {
    _marker: PhantomData<fn() -> (M, S)>,
}

impl<M, S> StateLaws<M, S>
where
    M: StateCombinators<S>,
    S: Clone + 'static,
{
    /// `flat_map(get(), put) == pure(())`
    pub fn get_put<O, T>(observe: O) -> Equation<T>
    where
        O: Fn(M::WithType<()>) -> T,
    {
        Equation {
            left: observe(M::flat_map(M::get(), M::put)),
            right: observe(M::pure(())),
        }
    }

    /// `then(put(s), get()) == then(put(s), pure(s))`
    pub fn put_get<O, T>(state: S, observe: O) -> Equation<T>
    where
        O: Fn(M::WithType<S>) -> T,
    {
        Equation {
            left: observe(M::then(M::put(state.clone()), M::get())),
            right: observe(M::then(M::put(state.clone()), M::pure(state))),
        }
    }

    /// `then(put(s1), put(s2)) == put(s2)`
    pub fn put_put<O, T>(first: S, second: S, observe: O) -> Equation<T>
    where
        O: Fn(M::WithType<()>) -> T,
    {
        Equation {
            left: observe(M::then(M::put(first), M::put(second.clone()))),
            right: observe(M::put(second)),
        }
    }

    /// `gets(f) == fmap(get(), f)`
    pub fn gets_projection<A, F, O, T>(projection: F, observe: O) -> Equation<T>
    where
        A: 'static,
        F: Fn(S) -> A + Clone + 'static,
        O: Fn(M::WithType<A>) -> T,
    {
        Equation {
            left: observe(M::gets(projection.clone())),
            right: observe(M::fmap(M::get(), projection)),
        }
    }

    /// `modify(f) == flat_map(get(), |s| put(f(s)))`
    pub fn modify_is_get_put<F, O, T>(function: F, observe: O) -> Equation<T>
    where
        F: Fn(S) -> S + Clone + 'static,
        O: Fn(M::WithType<()>) -> T,
    {
        let manual = M::flat_map(M::get(), {
            let function = function.clone();
            move |state| M::put(function(state))
        });
        Equation {
            left: observe(M::modify(function)),
            right: observe(manual),
        }
    }

    /// `then(modify(f), modify(g)) == modify(|s| g(f(s)))`
    pub fn modify_composition<F, G, O, T>(first: F, second: G, observe: O) -> Equation<T>
    where
        F: Fn(S) -> S + Clone + 'static,
        G: Fn(S) -> S + Clone + 'static,
        O: Fn(M::WithType<()>) -> T,
    {
        let sequenced = M::then(M::modify(first.clone()), M::modify(second.clone()));
        Equation {
            left: observe(sequenced),
            right: observe(M::modify(move |state| second(first(state)))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{MonadReader, ReaderBrand, StateBrand};
    use crate::typeclass::{OptionBrand, ResultBrand};
    use rstest::rstest;

    #[rstest]
    fn equation_debug_shows_both_sides() {
        let equation = Equation { left: 1, right: 2 };
        assert!(!equation.holds());
        assert_eq!(format!("{equation:?}"), "1 == 2");
    }

    #[rstest]
    fn option_with_resource_counts_callbacks() {
        let check = ErrorLaws::<OptionBrand, ()>::with_resource_releases(
            1,
            Ok(()),
            Err::<i32, ()>(()),
            |option| option,
        );
        assert!(check.equation.holds());
        assert_eq!((check.releases, check.program_runs), (1, 1));
    }

    #[rstest]
    fn result_failed_acquire_runs_nothing() {
        let check = ErrorLaws::<ResultBrand<String>, String>::with_resource_failed_acquire::<
            i32,
            i32,
            _,
            _,
        >("acquire".to_string(), |result| result);
        assert!(check.equation.holds());
        assert_eq!((check.releases, check.program_runs), (0, 0));
    }

    #[rstest]
    fn reader_local_composition_holds() {
        let equation = ReaderLaws::<ReaderBrand<i32>, i32>::local_composition(
            |r| r + 1,
            |r| r * 2,
            || ReaderBrand::<i32>::ask(),
            |reader| reader.run(5),
        );
        assert_eq!(equation.left, 12);
        assert!(equation.holds());
    }

    #[rstest]
    fn state_put_get_holds() {
        let equation = StateLaws::<StateBrand<i32>, i32>::put_get(7, |state| state.run(0));
        assert_eq!(equation.left, (7, 7));
        assert!(equation.holds());
    }
}
