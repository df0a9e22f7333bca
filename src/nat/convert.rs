//! Conversions between [`Nat`] and [`num_bigint::BigUint`].
//!
//! `BigUint` uses saturated digits, so each full-width digit spans one or
//! two 63-bit limbs; the conversions regroup bits across that boundary.
//! They are exact inverses of each other.

use super::Nat;
use crate::{Limb, Word};
use alloc::{vec, vec::Vec};
use num_bigint::BigUint;

impl Nat {
    /// Convert from a [`BigUint`].
    ///
    /// The announced length is the number of limbs covering the digits of
    /// `value`; zero gets announced length `0`.
    pub fn from_biguint(value: &BigUint) -> Self {
        let digits = value.to_u64_digits();
        let w = Limb::BITS as usize;
        let nlimbs = (Word::BITS as usize * digits.len()).div_ceil(w);
        let mut limbs = vec![Limb::ZERO; nlimbs];

        let mut out_i = 0;
        let mut shift = 0;
        for &digit in &digits {
            limbs[out_i].0 |= (digit << shift) & Limb::MASK;
            out_i += 1;
            if out_i < nlimbs {
                // the high shift + 1 bits spill into the next limb
                limbs[out_i].0 = digit >> (Limb::BITS - shift);
            }
            shift += 1;
            if shift == Limb::BITS {
                shift = 0;
                out_i += 1;
            }
        }

        Self {
            limbs: limbs.into(),
        }
    }

    /// Convert to a [`BigUint`].
    pub fn to_biguint(&self) -> BigUint {
        let w = Limb::BITS as usize;
        let ndigits = (w * self.nlimbs()).div_ceil(Word::BITS as usize);
        let mut digits: Vec<Word> = vec![0; ndigits];

        for (i, limb) in self.limbs.iter().enumerate() {
            let bit = w * i;
            let (d, off) = (bit / Word::BITS as usize, (bit % Word::BITS as usize) as u32);
            digits[d] |= limb.0 << off;
            if off >= 2 && d + 1 < ndigits {
                digits[d + 1] |= limb.0 >> (Word::BITS - off);
            }
        }

        let bytes: Vec<u8> = digits.iter().flat_map(|d| d.to_le_bytes()).collect();
        BigUint::from_bytes_le(&bytes)
    }
}
