//! Heap-allocated natural numbers in unsaturated-limb form.

mod add;
mod cmp;
mod convert;
mod encoding;
mod select;
mod sub;

use crate::{ConstChoice, Limb, Modulus};
use alloc::{boxed::Box, vec};
use core::fmt;
use subtle::Choice;
use zeroize::Zeroize;

/// A natural number, stored least-significant limb first.
///
/// The limb count is the value's *announced length*: it is public, may be
/// leaked through timing, and is the only property of a `Nat` that the
/// arithmetic here branches or indexes on. Binary operations require both
/// operands to share an announced length unless documented otherwise;
/// callers line lengths up with [`Nat::expand`] or [`Nat::expand_for`].
#[derive(Clone)]
pub struct Nat {
    /// Limbs, least significant first.
    pub(crate) limbs: Box<[Limb]>,
}

impl Nat {
    /// Get the value `0` with the given announced length.
    pub fn zero_with_limbs(nlimbs: usize) -> Self {
        Self {
            limbs: vec![Limb::ZERO; nlimbs].into(),
        }
    }

    /// Get the value `1` with the given announced length.
    ///
    /// Panics if `nlimbs` is zero.
    pub fn one_with_limbs(nlimbs: usize) -> Self {
        let mut ret = Self::zero_with_limbs(nlimbs);
        ret.limbs[0] = Limb::ONE;
        ret
    }

    /// Get the number of limbs in this [`Nat`]: its announced length.
    pub fn nlimbs(&self) -> usize {
        self.limbs.len()
    }

    /// Borrow the limbs of this [`Nat`].
    pub fn as_limbs(&self) -> &[Limb] {
        self.limbs.as_ref()
    }

    /// Is this [`Nat`] an odd number?
    pub fn is_odd(&self) -> Choice {
        let lsb = self.limbs.first().unwrap_or(&Limb::ZERO).0 & 1;
        ConstChoice::from_word_lsb(lsb).into()
    }

    /// Grow the announced length to `nlimbs`, preserving the value.
    ///
    /// New high limbs are zero. No-op when the announced length is already
    /// at least `nlimbs`.
    pub fn expand(&mut self, nlimbs: usize) {
        if nlimbs <= self.nlimbs() {
            return;
        }
        let mut limbs = vec![Limb::ZERO; nlimbs];
        limbs[..self.nlimbs()].copy_from_slice(&self.limbs);
        self.limbs = limbs.into();
    }

    /// Resize the announced length to match `m`, preserving the value.
    ///
    /// The value must already be reduced modulo `m` when shrinking, so that
    /// the dropped high limbs are zero.
    pub fn expand_for(&mut self, m: &Modulus) {
        let nlimbs = m.nlimbs();
        if nlimbs == self.nlimbs() {
            return;
        }
        let mut limbs = vec![Limb::ZERO; nlimbs];
        let keep = core::cmp::min(nlimbs, self.nlimbs());
        limbs[..keep].copy_from_slice(&self.limbs[..keep]);
        self.limbs = limbs.into();
    }

    pub(crate) fn set_zero(&mut self) {
        self.limbs.as_mut().fill(Limb::ZERO);
    }
}

impl Zeroize for Nat {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl fmt::Debug for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nat(0x")?;
        for limb in self.limbs.iter().rev() {
            write!(f, "{:016X}", limb.0)?;
        }
        write!(f, ")")
    }
}
