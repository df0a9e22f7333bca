//! Unsaturated limbs: 63 value bits carried in a 64-bit word.

use crate::Word;
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::DefaultIsZeroes;

/// One limb of a [`Nat`][`crate::Nat`].
///
/// Only the low [`Limb::BITS`] bits carry value; the top bit of the inner
/// word is reserved zero. That spare bit is load-bearing: it lets the
/// Montgomery inner loop fold its running carry into a single word.
#[derive(Copy, Clone, Default)]
#[repr(transparent)]
pub struct Limb(pub Word);

impl Limb {
    /// Number of value bits per limb.
    pub const BITS: u32 = Word::BITS - 1;

    /// Mask isolating the value bits of a word.
    pub const MASK: Word = (1 << Self::BITS) - 1;

    /// The value `0`.
    pub const ZERO: Self = Limb(0);

    /// The value `1`.
    pub const ONE: Self = Limb(1);

    /// Largest value a limb can hold.
    pub const MAX: Self = Limb(Self::MASK);
}

impl ConstantTimeEq for Limb {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Limb {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Word::conditional_select(&a.0, &b.0, choice))
    }
}

impl Eq for Limb {}
impl PartialEq for Limb {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl DefaultIsZeroes for Limb {}

impl fmt::Debug for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Limb(0x{:016X})", self.0)
    }
}
