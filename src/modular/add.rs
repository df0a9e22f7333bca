//! Modular addition.

use crate::{ConstChoice, Modulus, Nat};

impl Nat {
    /// Computes `self = (self + rhs) mod m`.
    ///
    /// Both operands must already be reduced modulo `m` and have `m`'s
    /// announced length. Constant time: the correcting subtraction is
    /// attempted unconditionally and masked.
    pub fn add_mod_assign(&mut self, rhs: &Self, m: &Modulus) {
        let overflow = self.conditional_add(ConstChoice::TRUE, rhs);
        let underflow = self.ct_geq(m.as_nat()).not();
        // A sum of two reduced values is below 2m, so either it fit and may
        // still need one subtraction, or the carry out swallowed 2^(63 n)
        // and the in-limb comparison reads low; both subtract. The
        // remaining case (fit, already reduced) does not.
        let need_sub = ConstChoice::from_word_lsb(overflow).xor(underflow).not();
        self.conditional_sub(need_sub, m.as_nat());
    }
}
