//! Division by a precomputed modulus.
//!
//! The workhorse is [`Nat::shift_in`]: it feeds one new limb into an
//! already-reduced value and re-reduces, using a two-limb quotient
//! estimate against the normalized top of the modulus. The estimate is
//! biased one low, so at most a single add-back or extra subtraction of
//! the modulus corrects it.

use crate::word::div_wide;
use crate::{ConstChoice, Limb, Modulus, Nat, WideWord, Word};

impl Nat {
    /// Reduces `self * 2^63 + y` modulo `m`, in place.
    ///
    /// `self` must already be reduced modulo `m` and have `m`'s announced
    /// length.
    pub(crate) fn shift_in(&mut self, y: Limb, m: &Modulus) {
        let size = m.nlimbs();
        debug_assert_eq!(self.nlimbs(), size);

        match size {
            0 => (),
            1 => {
                // the whole working value fits a double word
                let x0 = self.limbs[0].0;
                let (_, rem) =
                    div_wide(x0 >> 1, (x0 << Limb::BITS) | y.0, m.as_nat().limbs[0].0);
                self.limbs[0] = Limb(rem);
            }
            _ => self.shift_in_general(y, m),
        }
    }

    fn shift_in_general(&mut self, y: Limb, m: &Modulus) {
        let size = m.nlimbs();
        let w = Limb::BITS;
        let leading = m.leading();
        let mlimbs = m.as_nat().as_limbs();

        // top limb about to be displaced, and the normalized top word of
        // the extended value before the shift
        let hi = self.limbs[size - 1].0;
        let a1 = ((hi << leading) | (self.limbs[size - 2].0 >> (w - leading))) & Limb::MASK;

        for i in (1..size).rev() {
            self.limbs[i] = self.limbs[i - 1];
        }
        self.limbs[0] = y;

        let a0 =
            ((self.limbs[size - 1].0 << leading) | (self.limbs[size - 2].0 >> (w - leading)))
                & Limb::MASK;
        let b0 = ((mlimbs[size - 1].0 << leading) | (mlimbs[size - 2].0 >> (w - leading)))
            & Limb::MASK;

        // Estimate the quotient limb from the top two normalized words of
        // each side. `a1 == b0` means the true quotient overflows the
        // limb, so saturate; otherwise bias the estimate one low.
        let (raw_q, _) = div_wide(a1 >> 1, (a1 << w) | a0, b0);
        let q = ConstChoice::from_word_eq(a1, b0).select_word(
            ConstChoice::from_word_eq(raw_q, 0).select_word(raw_q.wrapping_sub(1), 0),
            Limb::MASK,
        );

        let cc = self.mul_sub(q, m.as_nat());

        // The displaced top limb must be paid back exactly by the carry
        // out of the multiply-subtract. Short means we took too much (add
        // one m back); long, or a remainder still >= m, means one more
        // subtraction.
        let under = ConstChoice::from_word_geq(hi, cc).not();
        let still_bigger = self.ct_geq(m.as_nat());
        let over = under
            .not()
            .and(still_bigger.or(ConstChoice::from_word_eq(cc, hi).not()));
        self.conditional_add(under, m.as_nat());
        self.conditional_sub(over, m.as_nat());
    }

    /// Computes `self -= q * m`, returning the carry word out of the top
    /// limb (the combined high product half and borrow).
    pub(crate) fn mul_sub(&mut self, q: Word, m: &Nat) -> Word {
        debug_assert_eq!(self.nlimbs(), m.nlimbs());
        let mut cc: Word = 0;

        for i in 0..self.nlimbs() {
            let product = (q as WideWord) * (m.limbs[i].0 as WideWord);
            let (mut hi, lo) = ((product >> Word::BITS) as Word, product as Word);
            let (lo, carried) = lo.overflowing_add(cc);
            hi = hi.wrapping_add(carried as Word);
            // the reserved limb bit guarantees hi < 2^63, so the shift
            // cannot lose the top
            cc = (hi << 1) | (lo >> Limb::BITS);
            let res = self.limbs[i].0.wrapping_sub(lo & Limb::MASK);
            cc = cc.wrapping_add((res >> Limb::BITS) & 1);
            self.limbs[i] = Limb(res & Limb::MASK);
        }

        cc
    }

    /// Reduces `self` modulo `m`, returning a value of `m`'s announced
    /// length. `self` may have any announced length.
    #[must_use]
    pub fn rem(&self, m: &Modulus) -> Nat {
        let size = m.nlimbs();
        let n = self.nlimbs();
        let mut out = Nat::zero_with_limbs(size);

        // the top size - 1 limbs already fit below m; seed them directly
        let copied = core::cmp::min(size - 1, n);
        for j in 0..copied {
            out.limbs[j] = self.limbs[n - copied + j];
        }
        for i in (0..n - copied).rev() {
            out.shift_in(self.limbs[i], m);
        }

        out
    }
}
