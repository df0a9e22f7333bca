//! Arithmetic modulo a precomputed [`Modulus`][`crate::Modulus`].
//!
//! Reduction of arbitrary values goes limb-by-limb through
//! [`Nat::shift_in`][`crate::Nat::shift_in`]; multiplication and
//! exponentiation run in Montgomery form against the modulus constants.

mod add;
mod mul;
mod pow;
mod reduce;
mod sub;

pub(crate) use mul::montgomery_mul;
