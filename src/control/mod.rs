//! Control structures shared by the capabilities.
//!
//! - [`Outcome`]: A computation result captured as data (produced by
//!   `try_catch`)
//!
//! # Examples
//!
//! ```rust
//! use effect_caps::control::Outcome;
//!
//! let outcome: Outcome<String, u8> = Err("bad input".to_string()).into();
//! assert!(outcome.is_failure());
//! ```

mod outcome;

pub use outcome::Outcome;
