//! Base type classes every capability builds on.
//!
//! This module provides the three primitives the capability contracts assume
//! from a backend:
//!
//! - [`Functor`]: `fmap` (the `map` primitive)
//! - [`Applicative`]: `pure` (the `of` primitive)
//! - [`Monad`]: `flat_map` (the `chain` primitive)
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) on zero-sized *brand*
//! types to emulate HKT behaviour. A brand such as [`ResultBrand<E>`] stands
//! for the partially applied constructor `Result<_, E>`; every type class is
//! implemented on the brand, once per backend.
//!
//! ## Backends
//!
//! - [`OptionBrand`]: `Option<A>`, failure is absence
//! - [`ResultBrand`]: `Result<A, E>`, failure carries an error value
//!
//! # Examples
//!
//! ```rust
//! use effect_caps::typeclass::{Applicative, Functor, Monad, ResultBrand};
//!
//! type Checked = ResultBrand<String>;
//!
//! let result = Checked::flat_map(Checked::pure(20), |n| Checked::fmap(Ok(n), |m| m + 22));
//! assert_eq!(result, Ok(42));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::{OptionBrand, ResultBrand, TypeConstructor};
pub use monad::Monad;
