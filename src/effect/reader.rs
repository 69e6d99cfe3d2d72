//! Reader backend - computations that depend on an environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Sequencing readers threads the
//! same environment through every step; [`ReaderBrand<R>`] exposes the
//! backend to the generic combinators.
//!
//! # Laws
//!
//! Reader satisfies the Functor and Monad laws, plus the `MonadReader` laws:
//!
//! - Local Identity: `local(|r| r, m) == m`
//! - Local Composition: `local(f, local(g, m)) == local(|r| g(f(r)), m)`
//! - Ask Retrieval: `ask().run(r) == r`
//!
//! # Examples
//!
//! ```rust
//! use effect_caps::effect::{MonadReader, Reader, ReaderBrand, ReaderCombinators};
//! use effect_caps::typeclass::Monad;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     host: String,
//! }
//!
//! type Env = ReaderBrand<Config>;
//!
//! let address: Reader<Config, String> = Env::flat_map(
//!     Env::asks(|config: Config| config.host),
//!     |host| Env::asks(move |config: Config| format!("{host}:{}", config.port)),
//! );
//!
//! let config = Config {
//!     port: 8080,
//!     host: "localhost".to_string(),
//! };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::monad_reader::MonadReader;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A computation that reads an environment of type `R` and produces an `A`.
///
/// A `Reader` runs once: [`Reader::run`] consumes it.
///
/// # Examples
///
/// ```rust
/// use effect_caps::effect::Reader;
///
/// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
/// assert_eq!(reader.run(21), 42);
/// ```
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    run_function: Box<dyn FnOnce(R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a new Reader from a function.
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(R) -> A + 'static,
    {
        Self {
            run_function: Box::new(function),
        }
    }

    /// Runs the Reader with the given environment.
    pub fn run(self, environment: R) -> A {
        (self.run_function)(environment)
    }
}

impl<R, A> fmt::Debug for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Reader(<function>)")
    }
}

/// Brand for the [`Reader`] backend with environment type `R`.
pub struct ReaderBrand<R> {
    _environment: PhantomData<fn() -> R>,
}

static_assertions::assert_impl_all!(ReaderBrand<String>: Send, Sync);

impl<R: 'static> TypeConstructor for ReaderBrand<R> {
    type WithType<A>
        = Reader<R, A>
    where
        A: 'static;
}

impl<R: 'static> Functor for ReaderBrand<R> {
    fn fmap<A, B, F>(computation: Reader<R, A>, function: F) -> Reader<R, B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        Reader::new(move |environment| function(computation.run(environment)))
    }
}

impl<R: 'static> Applicative for ReaderBrand<R> {
    fn pure<A>(value: A) -> Reader<R, A>
    where
        A: 'static,
    {
        Reader::new(move |_| value)
    }
}

/// Each step sees its own copy of the environment, hence `R: Clone`.
impl<R: Clone + 'static> Monad for ReaderBrand<R> {
    fn flat_map<A, B, F>(computation: Reader<R, A>, function: F) -> Reader<R, B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Reader<R, B> + 'static,
    {
        Reader::new(move |environment: R| {
            let value = computation.run(environment.clone());
            function(value).run(environment)
        })
    }
}

impl<R: 'static> MonadReader<R> for ReaderBrand<R> {
    fn ask() -> Reader<R, R> {
        Reader::new(|environment| environment)
    }

    fn local<A, F>(modifier: F, computation: Reader<R, A>) -> Reader<R, A>
    where
        A: 'static,
        F: FnOnce(R) -> R + 'static,
    {
        Reader::new(move |environment| computation.run(modifier(environment)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Env = ReaderBrand<i32>;

    #[rstest]
    fn fmap_transforms_result() {
        let reader = Env::fmap(Env::ask(), |environment| environment.to_string());
        assert_eq!(reader.run(42), "42");
    }

    #[rstest]
    fn pure_ignores_environment() {
        assert_eq!(Env::pure("constant").run(7), "constant");
    }

    #[rstest]
    fn flat_map_shares_environment() {
        let reader = Env::flat_map(Env::ask(), |first| {
            Env::fmap(Env::ask(), move |second| first + second)
        });
        assert_eq!(reader.run(10), 20);
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    #[case(100)]
    fn ask_returns_environment(#[case] environment: i32) {
        assert_eq!(Env::ask().run(environment), environment);
    }

    #[rstest]
    fn local_substitutes_environment() {
        let reader = Env::local(|environment| environment * 10, Env::ask());
        assert_eq!(reader.run(4), 40);
    }

    #[rstest]
    fn local_does_not_leak_into_later_steps() {
        let reader = Env::flat_map(Env::local(|environment| environment + 1, Env::ask()), |inner| {
            Env::fmap(Env::ask(), move |outer| (inner, outer))
        });
        assert_eq!(reader.run(1), (2, 1));
    }

    #[rstest]
    fn debug_hides_function() {
        assert_eq!(format!("{:?}", Env::ask()), "Reader(<function>)");
    }
}
