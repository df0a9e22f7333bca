//! Modular subtraction.

use crate::{ConstChoice, Modulus, Nat};

impl Nat {
    /// Computes `self = (self - rhs) mod m`.
    ///
    /// Both operands must already be reduced modulo `m` and have `m`'s
    /// announced length. A single masked add-back corrects any underflow.
    pub fn sub_mod_assign(&mut self, rhs: &Self, m: &Modulus) {
        let borrow = self.conditional_sub(ConstChoice::TRUE, rhs);
        self.conditional_add(ConstChoice::from_word_lsb(borrow), m.as_nat());
    }
}
