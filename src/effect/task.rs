//! Deferred asynchronous dual-outcome backend.
//!
//! A `TaskResult<A, E>` describes an asynchronous computation that ends in
//! `Ok(A)` or `Err(E)`. It is lazy: building, mapping and chaining task
//! results runs nothing, and the work only starts when [`TaskResult::run`] is
//! awaited. [`TaskResultBrand<E>`] implements `MonadError<E>`, so every error
//! combinator works unchanged over asynchronous computations.
//!
//! Futures are boxed with [`LocalBoxFuture`] and carry no `Send` bound.
//! Picking an executor is left to the caller.
//!
//! # Examples
//!
//! ```rust
//! use effect_caps::effect::{ErrorCombinators, MonadError, TaskResult, TaskResultBrand};
//! use effect_caps::typeclass::Applicative;
//!
//! type Task = TaskResultBrand<String>;
//!
//! let task: TaskResult<i32, String> = Task::catch_just(
//!     |error: &String| (error == "timeout").then_some(0),
//!     Task::throw_error("timeout".to_string()),
//!     Task::pure,
//! );
//!
//! assert_eq!(futures::executor::block_on(task.run()), Ok(0));
//! ```

use std::fmt;
use std::future::{Future, IntoFuture};
use std::marker::PhantomData;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use super::monad_error::MonadError;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A lazily evaluated asynchronous computation yielding `Result<A, E>`.
///
/// # Examples
///
/// ```rust
/// use effect_caps::effect::TaskResult;
///
/// let task = TaskResult::new(|| async { Ok::<i32, String>(21 * 2) });
/// assert_eq!(futures::executor::block_on(task.run()), Ok(42));
/// ```
pub struct TaskResult<A, E>
where
    A: 'static,
    E: 'static,
{
    run_task: Box<dyn FnOnce() -> LocalBoxFuture<'static, Result<A, E>>>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<A, E> TaskResult<A, E>
where
    A: 'static,
    E: 'static,
{
    /// Creates a new task from a closure returning a future.
    ///
    /// The closure is not called until the task is run.
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<A, E>> + 'static,
    {
        Self {
            run_task: Box::new(move || action().boxed_local()),
        }
    }

    /// Creates a task that completes immediately with `result`.
    pub fn from_result(result: Result<A, E>) -> Self {
        Self::new(move || async move { result })
    }

    /// Runs the task to completion.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` if the computation failed.
    pub async fn run(self) -> Result<A, E> {
        (self.run_task)().await
    }
}

impl<A, E> IntoFuture for TaskResult<A, E>
where
    A: 'static,
    E: 'static,
{
    type Output = Result<A, E>;
    type IntoFuture = LocalBoxFuture<'static, Result<A, E>>;

    fn into_future(self) -> Self::IntoFuture {
        (self.run_task)()
    }
}

impl<A, E> fmt::Debug for TaskResult<A, E>
where
    A: 'static,
    E: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("TaskResult(<deferred>)")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

/// Brand for the [`TaskResult`] backend with error type `E`.
pub struct TaskResultBrand<E> {
    _error: PhantomData<fn() -> E>,
}

static_assertions::assert_impl_all!(TaskResultBrand<String>: Send, Sync);

impl<E: 'static> TypeConstructor for TaskResultBrand<E> {
    type WithType<A>
        = TaskResult<A, E>
    where
        A: 'static;
}

impl<E: 'static> Functor for TaskResultBrand<E> {
    fn fmap<A, B, F>(computation: TaskResult<A, E>, function: F) -> TaskResult<B, E>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        TaskResult::new(move || async move { computation.run().await.map(function) })
    }
}

impl<E: 'static> Applicative for TaskResultBrand<E> {
    fn pure<A>(value: A) -> TaskResult<A, E>
    where
        A: 'static,
    {
        TaskResult::from_result(Ok(value))
    }
}

impl<E: 'static> Monad for TaskResultBrand<E> {
    fn flat_map<A, B, F>(computation: TaskResult<A, E>, function: F) -> TaskResult<B, E>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> TaskResult<B, E> + 'static,
    {
        TaskResult::new(move || async move {
            match computation.run().await {
                Ok(value) => function(value).run().await,
                Err(error) => Err(error),
            }
        })
    }
}

impl<E: 'static> MonadError<E> for TaskResultBrand<E> {
    fn throw_error<A>(error: E) -> TaskResult<A, E>
    where
        A: 'static,
    {
        TaskResult::from_result(Err(error))
    }

    fn catch_error<A, F>(computation: TaskResult<A, E>, handler: F) -> TaskResult<A, E>
    where
        A: 'static,
        F: FnOnce(E) -> TaskResult<A, E> + 'static,
    {
        TaskResult::new(move || async move {
            match computation.run().await {
                Ok(value) => Ok(value),
                Err(error) => handler(error).run().await,
            }
        })
    }
}
