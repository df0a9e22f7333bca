//! [`Nat`] comparisons. All constant-time in the announced lengths.

use super::Nat;
use crate::{ConstChoice, Limb, Word};
use core::cmp;
use subtle::{Choice, ConstantTimeEq};

impl Nat {
    /// Returns the truthy value if `self >= rhs`, via the borrow of the
    /// full subtraction.
    ///
    /// Lengths may differ; missing limbs read as zero.
    pub fn cmp_geq(&self, rhs: &Self) -> Choice {
        self.ct_geq(rhs).into()
    }

    pub(crate) fn ct_geq(&self, rhs: &Self) -> ConstChoice {
        let nlimbs = cmp::max(self.nlimbs(), rhs.nlimbs());
        let mut borrow: Word = 0;

        for i in 0..nlimbs {
            let a = self.limbs.get(i).unwrap_or(&Limb::ZERO).0;
            let b = rhs.limbs.get(i).unwrap_or(&Limb::ZERO).0;
            // with the top bit of each limb clear, the borrow out lands
            // exactly in the reserved bit
            borrow = a.wrapping_sub(b).wrapping_sub(borrow) >> Limb::BITS;
        }

        ConstChoice::from_word_lsb(borrow).not()
    }

    pub(crate) fn ct_is_eq(&self, rhs: &Self) -> ConstChoice {
        let nlimbs = cmp::max(self.nlimbs(), rhs.nlimbs());
        let mut eq = ConstChoice::TRUE;

        for i in 0..nlimbs {
            let a = self.limbs.get(i).unwrap_or(&Limb::ZERO).0;
            let b = rhs.limbs.get(i).unwrap_or(&Limb::ZERO).0;
            eq = eq.and(ConstChoice::from_word_eq(a, b));
        }

        eq
    }
}

impl ConstantTimeEq for Nat {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.ct_is_eq(other).into()
    }
}

impl Eq for Nat {}
impl PartialEq for Nat {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Limb, Nat};
    use subtle::ConstantTimeEq;

    fn nat(limbs: &[crate::Word]) -> Nat {
        Nat {
            limbs: limbs.iter().map(|&w| Limb(w)).collect(),
        }
    }

    #[test]
    fn ct_eq_ignores_high_zero_limbs() {
        let a = nat(&[5, 7]);
        let b = nat(&[5, 7, 0, 0]);
        assert!(bool::from(a.ct_eq(&b)));
        assert!(bool::from(b.ct_eq(&a)));
        assert!(!bool::from(a.ct_eq(&nat(&[5, 8]))));
    }

    #[test]
    fn cmp_geq() {
        let small = nat(&[Limb::MASK, 1]);
        let big = nat(&[0, 2]);
        assert!(bool::from(big.cmp_geq(&small)));
        assert!(!bool::from(small.cmp_geq(&big)));
        assert!(bool::from(small.cmp_geq(&small)));
    }
}
