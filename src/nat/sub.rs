//! Conditional limb-wise subtraction.

use super::Nat;
use crate::{ConstChoice, Limb, Word};

impl Nat {
    /// Computes `self -= rhs` iff `on` is truthy, returning the borrow out
    /// of the top limb.
    ///
    /// When `on` is falsy the limbs are left untouched, but the returned
    /// borrow is still that of the attempted subtraction. Requires equal
    /// announced lengths.
    pub(crate) fn conditional_sub(&mut self, on: ConstChoice, rhs: &Self) -> Word {
        debug_assert_eq!(self.nlimbs(), rhs.nlimbs());
        let mut borrow: Word = 0;

        for i in 0..self.nlimbs() {
            let res = self.limbs[i]
                .0
                .wrapping_sub(rhs.limbs[i].0)
                .wrapping_sub(borrow);
            self.limbs[i].0 = on.select_word(self.limbs[i].0, res & Limb::MASK);
            borrow = res >> Limb::BITS;
        }

        borrow
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConstChoice, Limb, Nat};

    #[test]
    fn borrow_chain() {
        let mut x = Nat::zero_with_limbs(2);
        let one = Nat::one_with_limbs(2);
        let borrow = x.conditional_sub(ConstChoice::TRUE, &one);
        assert_eq!(borrow, 1);
        assert_eq!(x.as_limbs(), &[Limb::MAX, Limb::MAX]);
    }

    #[test]
    fn off_still_reports_borrow() {
        let mut x = Nat::zero_with_limbs(1);
        let one = Nat::one_with_limbs(1);
        let borrow = x.conditional_sub(ConstChoice::FALSE, &one);
        assert_eq!(borrow, 1);
        assert_eq!(x, Nat::zero_with_limbs(1));
    }
}
