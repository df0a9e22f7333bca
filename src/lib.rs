//! Constant-time natural number arithmetic for modular exponentiation over
//! secret moduli, as needed by RSA.
//!
//! # About
//! Numbers are held as heap-allocated vectors of *unsaturated* limbs: 63
//! value bits per 64-bit word, with the top bit of every limb reserved
//! zero. The spare bit lets the Montgomery multiplication inner loop pack
//! its running carry into a single word instead of propagating a third.
//!
//! The length of a [`Nat`] in limbs (its *announced length*) is treated as
//! public and is the only thing an operation's control flow and memory
//! access pattern may depend on. Limb contents are secret: comparisons
//! return masked [`subtle::Choice`] values, table lookups are linear scans
//! with conditional moves, and the double-word division primitive never
//! touches a hardware divide.
//!
//! # Preconditions
//! Operations that combine two [`Nat`]s require equal announced lengths,
//! arranged by the caller via [`Nat::expand`] or [`Nat::expand_for`].
//! Violating that (or aliasing buffers where the documentation forbids it,
//! or constructing a [`Modulus`] from an even number) yields an undefined
//! *value*, never a secret-dependent crash.

#![no_std]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

mod const_choice;
mod limb;
mod modular;
mod modulus;
mod nat;
mod word;

pub use crate::{
    const_choice::ConstChoice,
    limb::Limb,
    modulus::Modulus,
    nat::Nat,
    word::{WideWord, Word},
};
pub use subtle;
pub use zeroize;
