//! Montgomery multiplication over unsaturated limbs.

use crate::{ConstChoice, Limb, Modulus, Nat, WideWord, Word};
use zeroize::Zeroize;

/// Computes `out = x * y * R^-1 mod m`, where `R = 2^(63 n)` and `n` is the
/// announced length of `m`.
///
/// CIOS variant: each outer iteration folds in one limb of `x` and cancels
/// the bottom limb of the running sum with a multiple of `m`. The inputs
/// must be reduced modulo `m` and of length `n`; `out` must be a distinct
/// buffer from `x`, `y` and the modulus (`x` and `y` may alias each other,
/// as they do when squaring).
pub(crate) fn montgomery_mul(x: &Nat, y: &Nat, out: &mut Nat, m: &Modulus) {
    let size = m.nlimbs();
    debug_assert_eq!(x.nlimbs(), size);
    debug_assert_eq!(y.nlimbs(), size);
    debug_assert_eq!(out.nlimbs(), size);

    let mlimbs = m.as_nat().as_limbs();
    out.set_zero();
    let mut overflow: Word = 0;

    for i in 0..size {
        let xi = x.limbs[i].0;
        let f = out.limbs[0]
            .0
            .wrapping_add(xi.wrapping_mul(y.limbs[0].0))
            .wrapping_mul(m.m0inv())
            & Limb::MASK;

        let mut carry: Word = 0;
        for j in 0..size {
            // with 63-bit limbs this sum stays under 2^127, so the carry
            // out always fits one word
            let z = (out.limbs[j].0 as WideWord)
                + (xi as WideWord) * (y.limbs[j].0 as WideWord)
                + (f as WideWord) * (mlimbs[j].0 as WideWord)
                + (carry as WideWord);
            if j > 0 {
                out.limbs[j - 1] = Limb((z as Word) & Limb::MASK);
            }
            carry = (z >> Limb::BITS) as Word;
        }

        let z = (overflow as WideWord) + (carry as WideWord);
        out.limbs[size - 1] = Limb((z as Word) & Limb::MASK);
        overflow = (z >> Limb::BITS) as Word;
    }

    // same correction shape as modular addition: the result is below 2m
    let underflow = out.ct_geq(m.as_nat()).not();
    let need_sub = ConstChoice::from_word_lsb(overflow).xor(underflow).not();
    out.conditional_sub(need_sub, m.as_nat());
}

impl Nat {
    /// Converts `self` into Montgomery form, i.e. multiplies by
    /// `R mod m` in place.
    ///
    /// Costs one `shift_in` per modulus limb; `pow_mod` amortizes it over
    /// the whole exponentiation.
    pub(crate) fn to_montgomery(&mut self, m: &Modulus) {
        for _ in 0..m.nlimbs() {
            self.shift_in(Limb::ZERO, m);
        }
    }

    /// Computes `self = (self * rhs) mod m`.
    ///
    /// Both operands must be reduced modulo `m` and have `m`'s announced
    /// length; `rhs` must not alias `self`.
    pub fn mul_mod_assign(&mut self, rhs: &Self, m: &Modulus) {
        let mut x_monty = self.clone();
        x_monty.to_montgomery(m);
        montgomery_mul(&x_monty, rhs, self, m);
        x_monty.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::montgomery_mul;
    use crate::{Limb, Modulus, Nat};
    use alloc::vec;

    fn modulus(limbs: &[crate::Word]) -> Modulus {
        let n = Nat {
            limbs: limbs.iter().map(|&w| Limb(w)).collect(),
        };
        Modulus::new(&n).unwrap()
    }

    #[test]
    fn montgomery_round_trip() {
        let m = modulus(&[13, 13]);
        let one = Nat::one_with_limbs(2);
        for value in [0u64, 1, 5, 12, 99] {
            let mut x = Nat {
                limbs: vec![Limb(value), Limb(0)].into(),
            };
            x.to_montgomery(&m);
            let mut back = Nat::zero_with_limbs(2);
            montgomery_mul(&x, &one, &mut back, &m);
            assert_eq!(back.as_limbs(), &[Limb(value), Limb(0)]);
        }
    }

    #[test]
    fn mul_mod_small() {
        let m = modulus(&[13]);
        let mut x = Nat {
            limbs: vec![Limb(6)].into(),
        };
        let y = Nat {
            limbs: vec![Limb(7)].into(),
        };
        x.mul_mod_assign(&y, &m);
        // 42 mod 13
        assert_eq!(x.as_limbs(), &[Limb(3)]);
    }

    #[test]
    fn mul_mod_against_oracle() {
        let m = modulus(&[0x1234_5678_9ABC_DEF1, Limb::MASK, 0x42]);
        let m_big = m.as_nat().to_biguint();
        for seed in 1u64..32 {
            let a = Nat {
                limbs: vec![
                    Limb(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) & Limb::MASK),
                    Limb(seed.wrapping_mul(0xC2B2_AE3D_27D4_EB4F) & Limb::MASK),
                    Limb(0),
                ]
                .into(),
            };
            let b = Nat {
                limbs: vec![
                    Limb(seed.wrapping_mul(0x165667B19E3779F9) & Limb::MASK),
                    Limb(seed ^ 0xABCD),
                    Limb(0x17),
                ]
                .into(),
            };
            let mut x = a.clone();
            x.mul_mod_assign(&b, &m);
            assert_eq!(
                x.to_biguint(),
                (a.to_biguint() * b.to_biguint()) % &m_big,
                "seed={seed}"
            );
        }
    }
}
