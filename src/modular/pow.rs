//! Windowed modular exponentiation.

use super::montgomery_mul;
use crate::{ConstChoice, Modulus, Nat, Word};
use alloc::vec::Vec;
use zeroize::Zeroize;

/// Exponent bits consumed per group of squarings.
const WINDOW: u32 = 4;

/// Number of precomputed powers: `x^1 ..= x^(2^WINDOW - 1)`.
const TABLE_SIZE: usize = (1 << WINDOW) - 1;

impl Nat {
    /// Computes `self^exponent mod m`, reading the exponent as big-endian
    /// bytes. `self` must be reduced modulo `m`.
    ///
    /// The whole computation runs in Montgomery form, consuming the
    /// exponent in 4-bit windows. Each window costs four squarings and one
    /// multiplication; the power table is read by a full linear scan with
    /// conditional moves, and the multiplication for a zero window still
    /// runs with its result masked away. Only the announced lengths and
    /// `exponent.len()` shape control flow and memory access.
    #[must_use]
    pub fn pow_mod(&self, exponent: &[u8], m: &Modulus) -> Nat {
        let size = m.nlimbs();

        // Montgomery forms of self^1 ..= self^15
        let mut table: Vec<Nat> = Vec::with_capacity(TABLE_SIZE);
        let mut first = self.clone();
        first.expand_for(m);
        first.to_montgomery(m);
        table.push(first);
        for i in 1..TABLE_SIZE {
            let mut entry = Nat::zero_with_limbs(size);
            montgomery_mul(&table[i - 1], &table[0], &mut entry, m);
            table.push(entry);
        }

        // accumulator starts at 1 in Montgomery form, i.e. R mod m
        let mut out = Nat::one_with_limbs(size);
        out.to_montgomery(m);

        let mut scratch = Nat::zero_with_limbs(size);
        let mut selected = Nat::zero_with_limbs(size);

        for &byte in exponent {
            for &shift in &[WINDOW, 0] {
                montgomery_mul(&out, &out, &mut scratch, m);
                montgomery_mul(&scratch, &scratch, &mut out, m);
                montgomery_mul(&out, &out, &mut scratch, m);
                montgomery_mul(&scratch, &scratch, &mut out, m);

                let window = ((byte >> shift) & 0xF) as Word;

                // touch every table entry; never index by the window value
                for (i, entry) in table.iter().enumerate() {
                    selected.ct_assign(entry, ConstChoice::from_word_eq(window, i as Word + 1));
                }

                montgomery_mul(&out, &selected, &mut scratch, m);
                out.ct_assign(&scratch, ConstChoice::from_word_eq(window, 0).not());
            }
        }

        // multiplying by a plain 1 divides out R, leaving Montgomery form
        let one = Nat::one_with_limbs(size);
        let mut result = Nat::zero_with_limbs(size);
        montgomery_mul(&out, &one, &mut result, m);

        for entry in table.iter_mut() {
            entry.zeroize();
        }
        out.zeroize();
        scratch.zeroize();
        selected.zeroize();

        result
    }
}
