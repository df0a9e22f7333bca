//! Precomputed odd moduli.

use crate::{ConstChoice, Limb, Nat, Word};
use alloc::vec::Vec;
use subtle::CtOption;

/// An odd modulus, together with the constants the reduction and
/// Montgomery machinery need.
///
/// The limb count (like the bit length of an RSA modulus) is treated as
/// public; the limb values are secret.
#[derive(Clone, Debug)]
pub struct Modulus {
    /// The modulus value, high zero limbs stripped.
    nat: Nat,
    /// Leading zero bits in the top limb, within its 63-bit field. Used to
    /// left-align the top limbs of a working value for the quotient
    /// estimate in [`Nat::shift_in`].
    leading: u32,
    /// `-nat[0]^-1 mod 2^63`, the multiplier that zeroes the bottom limb
    /// at each Montgomery iteration.
    m0inv: Word,
}

impl Modulus {
    /// Precompute a modulus from `n`, which must be odd.
    ///
    /// High zero limbs are stripped (in variable time; the bit length of a
    /// modulus is public). Returns a [`CtOption`] that is none when `n` is
    /// even, in which case the precomputed constants are meaningless.
    pub fn new(n: &Nat) -> CtOption<Self> {
        let mut limbs: Vec<Limb> = n.as_limbs().to_vec();
        // a zero-limb input encodes zero; keep one limb so the odd check
        // below rejects it without panicking
        if limbs.is_empty() {
            limbs.push(Limb::ZERO);
        }
        while limbs.len() > 1 && limbs[limbs.len() - 1].0 == 0 {
            limbs.pop();
        }

        let is_odd = ConstChoice::from_word_lsb(limbs.first().map(|l| l.0).unwrap_or(0) & 1);

        let top = limbs[limbs.len() - 1].0;
        let leading = top.leading_zeros().saturating_sub(Word::BITS - Limb::BITS);
        let m0inv = minus_inverse_mod_w(limbs[0].0);

        let nat = Nat {
            limbs: limbs.into(),
        };

        CtOption::new(
            Self {
                nat,
                leading,
                m0inv,
            },
            is_odd.into(),
        )
    }

    /// The modulus value.
    pub fn as_nat(&self) -> &Nat {
        &self.nat
    }

    /// Announced length of the modulus, in limbs.
    pub fn nlimbs(&self) -> usize {
        self.nat.nlimbs()
    }

    pub(crate) fn leading(&self) -> u32 {
        self.leading
    }

    pub(crate) fn m0inv(&self) -> Word {
        self.m0inv
    }
}

/// Computes `-m0^-1 mod 2^63` for odd `m0` by Newton iteration.
///
/// `m0` is its own inverse modulo 8, and each iteration doubles the number
/// of correct low bits, so five iterations reach well past 63.
fn minus_inverse_mod_w(m0: Word) -> Word {
    let mut y = m0;
    for _ in 0..5 {
        y = y.wrapping_mul(2u64.wrapping_sub(m0.wrapping_mul(y))) & Limb::MASK;
    }
    (1 << Limb::BITS) - y
}

#[cfg(test)]
mod tests {
    use super::minus_inverse_mod_w;
    use crate::{Limb, Modulus, Nat};
    use alloc::vec;

    #[test]
    fn newton_inversion() {
        for m0 in [1u64, 3, 13, 0x1234_5679, Limb::MASK, Limb::MASK - 2] {
            let inv = minus_inverse_mod_w(m0);
            // m0 * -m0inv == -1 mod 2^63
            assert_eq!(m0.wrapping_mul(inv) & Limb::MASK, Limb::MASK, "m0={m0:#x}");
        }
    }

    #[test]
    fn rejects_even() {
        let n = Nat {
            limbs: vec![Limb(12)].into(),
        };
        assert!(bool::from(Modulus::new(&n).is_none()));
        assert!(bool::from(Modulus::new(&Nat::zero_with_limbs(3)).is_none()));
    }

    #[test]
    fn rejects_zero_limb_input() {
        assert!(bool::from(Modulus::new(&Nat::zero_with_limbs(0)).is_none()));
    }

    #[test]
    fn strips_high_zero_limbs() {
        let n = Nat {
            limbs: vec![Limb(13), Limb::ZERO, Limb::ZERO].into(),
        };
        let m = Modulus::new(&n).unwrap();
        assert_eq!(m.nlimbs(), 1);
        // 13 = 0b1101
        assert_eq!(m.leading(), 59);
    }

    #[test]
    fn two_limb_leading() {
        let n = Nat {
            limbs: vec![Limb(13), Limb(13)].into(),
        };
        let m = Modulus::new(&n).unwrap();
        assert_eq!(m.nlimbs(), 2);
        assert_eq!(m.leading(), 59);
    }
}
