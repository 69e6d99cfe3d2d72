//! Capabilities and the backends that satisfy them.
//!
//! # Capabilities
//!
//! - [`MonadError`]: Failure signalling and recovery
//! - [`MonadReader`]: Reading from an environment
//! - [`MonadState`]: Stateful computations
//!
//! Each capability comes with an extension trait of derived combinators
//! ([`ErrorCombinators`], [`ReaderCombinators`], [`StateCombinators`]). The
//! extension traits are implemented for every backend of the capability and
//! cannot be implemented by hand.
//!
//! # Backends
//!
//! - `OptionBrand` / `ResultBrand` (in [`crate::typeclass`]): `MonadError`
//! - [`ReaderBrand`]: `MonadReader` over [`Reader`]
//! - [`StateBrand`]: `MonadState` over [`State`]
//! - `TaskResultBrand` (feature `async`): `MonadError` over a deferred future
//!
//! # Examples
//!
//! ```rust
//! use effect_caps::control::Outcome;
//! use effect_caps::effect::{ErrorCombinators, MonadError};
//! use effect_caps::typeclass::{OptionBrand, ResultBrand};
//!
//! fn checked_half<M: MonadError<String>>(n: i32) -> M::WithType<i32> {
//!     if n % 2 == 0 {
//!         M::pure(n / 2)
//!     } else {
//!         M::throw_error(format!("{n} is odd"))
//!     }
//! }
//!
//! assert_eq!(
//!     ResultBrand::<String>::try_catch(checked_half::<ResultBrand<String>>(3)),
//!     Ok(Outcome::Failure("3 is odd".to_string()))
//! );
//! assert_eq!(checked_half::<OptionBrand<String>>(8), Some(4));
//! ```

mod monad_error;
mod monad_reader;
mod monad_state;
mod reader;
mod state;

#[cfg(feature = "async")]
mod task;

pub use monad_error::{ErrorCombinators, MonadError};
pub use monad_reader::{MonadReader, ReaderCombinators};
pub use monad_state::{MonadState, StateCombinators};
pub use reader::{Reader, ReaderBrand};
pub use state::{State, StateBrand};

#[cfg(feature = "async")]
pub use task::{TaskResult, TaskResultBrand};
