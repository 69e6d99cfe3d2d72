//! # effect-caps
//!
//! Capability interfaces for effectful computations, and generic combinators
//! written once against them.
//!
//! ## Overview
//!
//! A capability is the minimal set of primitives a computation representation
//! must provide for a family of combinators to work. Three are defined:
//!
//! - **Error** ([`effect::MonadError`]): `throw_error`, `catch_error`, with
//!   `catch_just`, `try_catch`, `with_resource` and friends derived from them
//! - **Reader** ([`effect::MonadReader`]): `ask`, `local`, with `asks`
//! - **State** ([`effect::MonadState`]): `get`, `put`, with `gets`, `modify`
//!
//! Every combinator only calls the primitives, so it behaves the same for
//! each backend: `Option`, `Result`, the asynchronous `TaskResult`, `Reader`
//! and `State`. The [`laws`] module lets any backend prove it conforms.
//!
//! ## Feature Flags
//!
//! - `typeclass`: HKT emulation and the Functor/Applicative/Monad primitives
//! - `control`: The `Outcome` type
//! - `effect`: Capabilities, combinators, `Reader`/`State` backends and laws
//! - `async`: The `TaskResult` backend
//! - `tracing`: Trace events from `with_resource` and `catch_just`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use effect_caps::prelude::*;
//!
//! fn inverse<M: MonadError<String>>(x: f64) -> M::WithType<f64> {
//!     if x == 0.0 {
//!         M::throw_error("cannot divide by zero".to_string())
//!     } else {
//!         M::pure(1.0 / x)
//!     }
//! }
//!
//! assert_eq!(inverse::<OptionBrand<String>>(0.0), None);
//! assert_eq!(
//!     ResultBrand::<String>::try_catch(inverse::<ResultBrand<String>>(0.0)),
//!     Ok(Outcome::Failure("cannot divide by zero".to_string()))
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use effect_caps::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "effect")]
pub mod laws;
