//! Conditional limb-wise addition.

use super::Nat;
use crate::{ConstChoice, Limb, Word};

impl Nat {
    /// Computes `self += rhs` iff `on` is truthy, returning the carry out
    /// of the top limb.
    ///
    /// When `on` is falsy the limbs are left untouched, but the returned
    /// carry is still that of the attempted addition; the modular
    /// operations key their corrections off it. Requires equal announced
    /// lengths.
    pub(crate) fn conditional_add(&mut self, on: ConstChoice, rhs: &Self) -> Word {
        debug_assert_eq!(self.nlimbs(), rhs.nlimbs());
        let mut carry: Word = 0;

        for i in 0..self.nlimbs() {
            // both limbs are below 2^63, so the word sum cannot wrap
            let res = self.limbs[i]
                .0
                .wrapping_add(rhs.limbs[i].0)
                .wrapping_add(carry);
            self.limbs[i].0 = on.select_word(self.limbs[i].0, res & Limb::MASK);
            carry = res >> Limb::BITS;
        }

        carry
    }
}
