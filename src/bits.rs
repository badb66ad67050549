use alloc::vec::Vec;
use core::{fmt, ops::Range};

use crate::errors::Bip39Error;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nb_bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(nb_bits),
        }
    }

    /// Each byte becomes eight bits, most significant first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut out = Self::with_capacity(bytes.len() * 8);
        for &byte in bytes {
            out.push_bits(byte as u32, 8);
        }
        out
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Appends the low `width` bits of `value`, most significant first.
    pub fn push_bits(&mut self, value: u32, width: usize) {
        for j in (0..width.min(32)).rev() {
            self.bits.push((value >> j) & 1 == 1);
        }
    }

    pub fn append(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn slice(&self, range: Range<usize>) -> Result<BitString, Bip39Error> {
        if range.start > range.end || range.end > self.len() {
            return Err(Bip39Error::MalformedBitString {
                len: self.len(),
                width: range.end.saturating_sub(range.start),
            });
        }
        Ok(Self {
            bits: self.bits[range].to_vec(),
        })
    }

    pub fn split_at(&self, mid: usize) -> Result<(BitString, BitString), Bip39Error> {
        Ok((self.slice(0..mid)?, self.slice(mid..self.len())?))
    }

    /// Big-endian integer value of the whole string; at most 32 bits.
    pub fn to_u32(&self) -> Result<u32, Bip39Error> {
        if self.len() > 32 {
            return Err(Bip39Error::MalformedBitString {
                len: self.len(),
                width: 32,
            });
        }
        Ok(self
            .bits
            .iter()
            .fold(0u32, |acc, &bit| (acc << 1) | bit as u32))
    }

    /// Inverse of [`BitString::from_bytes`]; the length must be a multiple of 8.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Bip39Error> {
        chunk(self, 8, false)?
            .iter()
            .map(|byte| byte.to_u32().map(|value| value as u8))
            .collect()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[inline]
pub fn bytes_to_bits(bytes: &[u8]) -> BitString {
    BitString::from_bytes(bytes)
}

#[inline]
pub fn bits_to_bytes(bits: &BitString) -> Result<Vec<u8>, Bip39Error> {
    bits.to_bytes()
}

/// Splits `bits` into consecutive `width`-bit groups. A shorter trailing
/// group is only produced when `allow_partial` is set; otherwise the length
/// must already be an exact multiple of `width`.
pub fn chunk(
    bits: &BitString,
    width: usize,
    allow_partial: bool,
) -> Result<Vec<BitString>, Bip39Error> {
    if width == 0 || (!allow_partial && bits.len() % width != 0) {
        return Err(Bip39Error::MalformedBitString {
            len: bits.len(),
            width,
        });
    }
    Ok(bits
        .as_slice()
        .chunks(width)
        .map(|group| BitString {
            bits: group.to_vec(),
        })
        .collect())
}

#[cfg(test)]
mod tests_bits {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_bytes_to_bits() {
        assert_eq!(bytes_to_bits(&[]).to_string(), "");
        assert_eq!(bytes_to_bits(&[0x00]).to_string(), "00000000");
        assert_eq!(bytes_to_bits(&[0x05, 0xff]).to_string(), "0000010111111111");
        assert_eq!(bytes_to_bits(&[0x80, 0x7f]).to_string(), "1000000001111111");
    }

    #[test]
    fn test_bits_to_bytes() {
        let bits = bytes_to_bits(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(bits_to_bytes(&bits).unwrap(), [0xde, 0xad, 0xbe, 0xef]);

        let mut odd = bits.clone();
        odd.push_bits(1, 3);
        assert_eq!(
            bits_to_bytes(&odd),
            Err(Bip39Error::MalformedBitString { len: 35, width: 8 })
        );
    }

    #[test]
    fn test_push_bits() {
        let mut bits = BitString::new();
        bits.push_bits(2047, 11);
        bits.push_bits(3, 11);
        assert_eq!(bits.to_string(), "1111111111100000000011");
        assert_eq!(bits.len(), 22);
    }

    #[test]
    fn test_chunk_exact() {
        let bits = bytes_to_bits(&[0b1010_1010, 0b1100_0011, 0xff]);
        let groups = chunk(&bits, 6, false).unwrap();
        let rendered: Vec<_> = groups.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["101010", "101100", "001111", "111111"]);
    }

    #[test]
    fn test_chunk_partial() {
        let bits = bytes_to_bits(&[0xff, 0x00]);
        assert_eq!(
            chunk(&bits, 11, false),
            Err(Bip39Error::MalformedBitString { len: 16, width: 11 })
        );

        let groups = chunk(&bits, 11, true).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].to_string(), "11111111000");
        assert_eq!(groups[1].to_string(), "00000");
    }

    #[test]
    fn test_chunk_zero_width() {
        let bits = bytes_to_bits(&[0x01]);
        assert!(chunk(&bits, 0, true).is_err());
    }

    #[test]
    fn test_slice_and_value() {
        let bits = bytes_to_bits(&[0b0110_0001, 0b1000_0000]);
        let (head, tail) = bits.split_at(11).unwrap();
        assert_eq!(head.to_u32().unwrap(), 0b011_0000_1100);
        assert_eq!(tail.len(), 5);
        assert!(bits.slice(4..17).is_err());

        let wide = bytes_to_bits(&[0; 5]);
        assert_eq!(
            wide.to_u32(),
            Err(Bip39Error::MalformedBitString { len: 40, width: 32 })
        );
    }
}
