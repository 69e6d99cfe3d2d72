//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a bare type constructor such as `Option` or
//! `Result<_, E>`: a trait can be implemented for `Option<i32>`, never for
//! `Option` on its own. This module works around that with *brands*:
//! zero-sized marker types that stand for a partially applied constructor and
//! expose the applied form through a generic associated type.
//!
//! A brand is never instantiated. Every capability trait in this crate
//! (`Functor`, `Monad`, `MonadError`, ...) is implemented on a brand, and the
//! computation values it talks about are `Brand::WithType<A>`.
//!
//! # Example
//!
//! ```rust
//! use effect_caps::typeclass::{OptionBrand, ResultBrand, TypeConstructor};
//!
//! fn assert_applied<T: TypeConstructor<WithType<i32> = Option<i32>>>() {}
//! assert_applied::<OptionBrand>();
//!
//! let value: <ResultBrand<String> as TypeConstructor>::WithType<i32> = Ok(1);
//! assert_eq!(value, Ok(1));
//! ```

use std::marker::PhantomData;

/// A trait representing a type constructor awaiting its value type.
///
/// The implementing type is a brand: a marker for a constructor such as
/// `Option<_>` or `Result<_, E>`. `WithType<A>` is the constructor applied to
/// `A`.
///
/// # Example
///
/// ```rust
/// use effect_caps::typeclass::{OptionBrand, TypeConstructor};
///
/// fn none<F: TypeConstructor>() -> F::WithType<String>
/// where
///     F::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// assert_eq!(none::<OptionBrand>(), None);
/// ```
pub trait TypeConstructor: 'static {
    /// The type constructor applied to `A`.
    ///
    /// Computation values are moved into `'static` continuations, hence the
    /// `'static` bound on the applied type.
    type WithType<A>: 'static
    where
        A: 'static;
}

// =============================================================================
// Standard Library Brands
// =============================================================================

/// Brand for the optional-value backend, `Option<A>`.
///
/// `E` is the error type the backend accepts through `MonadError<E>`. Absence
/// carries no information, so the error value is discarded when a failure is
/// signalled; see [`MonadError`](crate::effect::MonadError) for how recovery
/// reconstructs one.
pub struct OptionBrand<E = ()> {
    _error: PhantomData<fn() -> E>,
}

/// Brand for the dual-outcome backend, `Result<A, E>`.
pub struct ResultBrand<E> {
    _error: PhantomData<fn() -> E>,
}

impl<E: 'static> TypeConstructor for OptionBrand<E> {
    type WithType<A>
        = Option<A>
    where
        A: 'static;
}

impl<E: 'static> TypeConstructor for ResultBrand<E> {
    type WithType<A>
        = Result<A, E>
    where
        A: 'static;
}

static_assertions::assert_impl_all!(OptionBrand: Send, Sync);
static_assertions::assert_impl_all!(ResultBrand<String>: Send, Sync);
static_assertions::assert_impl_all!(ResultBrand<std::rc::Rc<String>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_brand_applies_to_option() {
        fn assert_applied<T: TypeConstructor<WithType<i32> = Option<i32>>>() {}
        assert_applied::<OptionBrand>();
        assert_applied::<OptionBrand<String>>();
    }

    #[test]
    fn result_brand_preserves_error_type() {
        fn assert_applied<E: 'static, B: 'static>()
        where
            ResultBrand<E>: TypeConstructor<WithType<B> = Result<B, E>>,
        {
        }

        assert_applied::<String, i32>();
        assert_applied::<(), bool>();
        assert_applied::<std::io::Error, Vec<u8>>();
    }

    #[test]
    fn nested_application_is_a_plain_type() {
        type Nested = <OptionBrand as TypeConstructor>::WithType<Option<i32>>;
        let value: Nested = Some(Some(1));
        assert_eq!(value, Some(Some(1)));
    }
}
