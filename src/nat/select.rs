//! Constant-time conditional assignment.

use super::Nat;
use crate::ConstChoice;
use subtle::Choice;

impl Nat {
    /// Copies `rhs` into `self` iff `choice` is truthy.
    ///
    /// Every limb is read and written either way; only the selected value
    /// differs. Requires equal announced lengths.
    pub fn conditional_assign(&mut self, rhs: &Self, choice: Choice) {
        self.ct_assign(rhs, choice.into());
    }

    pub(crate) fn ct_assign(&mut self, rhs: &Self, choice: ConstChoice) {
        debug_assert_eq!(self.nlimbs(), rhs.nlimbs());

        for i in 0..self.nlimbs() {
            self.limbs[i].0 = choice.select_word(self.limbs[i].0, rhs.limbs[i].0);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConstChoice, Limb, Nat};
    use alloc::vec;

    #[test]
    fn ct_assign() {
        let src = Nat {
            limbs: vec![Limb(1), Limb(2)].into(),
        };
        let mut dst = Nat::zero_with_limbs(2);

        dst.ct_assign(&src, ConstChoice::FALSE);
        assert_eq!(dst, Nat::zero_with_limbs(2));

        dst.ct_assign(&src, ConstChoice::TRUE);
        assert_eq!(dst, src);
    }
}
