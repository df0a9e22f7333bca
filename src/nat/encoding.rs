//! Big-endian byte conversions for [`Nat`].
//!
//! Limbs hold 63 bits, so bytes straddle limb boundaries; both directions
//! walk byte positions and pull from (or push into) one or two limbs.

use super::Nat;
use crate::{Limb, Word};
use alloc::{boxed::Box, vec};

impl Nat {
    /// Decode a big-endian byte slice.
    ///
    /// The announced length of the result is `ceil(8 * bytes.len() / 63)`:
    /// leading zero bytes are *not* stripped, so the caller controls the
    /// working precision through the buffer size.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let w = Limb::BITS as usize;
        let nlimbs = (8 * bytes.len()).div_ceil(w);
        let mut limbs = vec![Limb::ZERO; nlimbs];

        for (k, &byte) in bytes.iter().rev().enumerate() {
            let bit = 8 * k;
            let (i, off) = (bit / w, bit % w);
            limbs[i].0 |= ((byte as Word) << off) & Limb::MASK;
            if off + 8 > w && i + 1 < nlimbs {
                limbs[i + 1].0 |= (byte as Word) >> (w - off);
            }
        }

        Self {
            limbs: limbs.into(),
        }
    }

    /// Encode into `out` as big-endian.
    ///
    /// When the number is wider than the buffer, only the least-significant
    /// `out.len()` bytes are written; when narrower, the output is padded
    /// with zeros on the left.
    pub fn fill_be_bytes(&self, out: &mut [u8]) {
        let w = Limb::BITS as usize;
        let n = out.len();

        for k in 0..n {
            let bit = 8 * k;
            let (i, off) = (bit / w, bit % w);
            let mut byte = 0u8;
            if i < self.nlimbs() {
                byte = (self.limbs[i].0 >> off) as u8;
                if off + 8 > w && i + 1 < self.nlimbs() {
                    byte |= (self.limbs[i + 1].0 << (w - off)) as u8;
                }
            }
            out[n - 1 - k] = byte;
        }
    }

    /// Encode as big-endian, sized to cover every announced bit.
    pub fn to_be_bytes(&self) -> Box<[u8]> {
        let mut out = vec![0u8; (Limb::BITS as usize * self.nlimbs()).div_ceil(8)];
        self.fill_be_bytes(&mut out);
        out.into()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Limb, Nat};
    use hex_literal::hex;

    #[test]
    fn from_be_bytes_straddles_limbs() {
        let n = Nat::from_be_bytes(&hex!("00112233445566778899aabbccddeeff"));
        // 16 bytes -> 128 bits -> 3 limbs of 63 bits
        assert_eq!(n.nlimbs(), 3);
        assert_eq!(
            n.as_limbs(),
            &[
                Limb(0x0899_aabb_ccdd_eeff),
                Limb(0x0022_4466_88aa_ccef),
                Limb(0x0000_0000_0000_0000),
            ]
        );
    }

    #[test]
    fn leading_zeros_preserved() {
        let n = Nat::from_be_bytes(&hex!("000000000000000000000001"));
        // 12 bytes -> 96 bits -> 2 limbs, high limb zero
        assert_eq!(n.nlimbs(), 2);
        assert_eq!(n.as_limbs(), &[Limb::ONE, Limb::ZERO]);
    }

    #[test]
    fn fill_truncates_to_low_bytes() {
        let n = Nat::from_be_bytes(&hex!("0102030405060708090a"));
        let mut out = [0u8; 4];
        n.fill_be_bytes(&mut out);
        assert_eq!(out, hex!("0708090a"));
    }

    #[test]
    fn fill_pads_on_the_left() {
        let n = Nat::from_be_bytes(&hex!("beef"));
        let mut out = [0u8; 6];
        n.fill_be_bytes(&mut out);
        assert_eq!(out, hex!("00000000beef"));
    }

    #[test]
    fn round_trip_via_to_be_bytes() {
        let bytes = hex!("00112233445566778899aabbccddeeff0011223344556677");
        let n = Nat::from_be_bytes(&bytes);
        let encoded = n.to_be_bytes();
        // the re-encoded buffer covers ceil(63 * nlimbs / 8) bytes; the
        // value occupies the tail
        assert_eq!(&encoded[encoded.len() - bytes.len()..], &bytes[..]);
        assert_eq!(Nat::from_be_bytes(&encoded), n);
    }
}
