use sha2::{Digest, Sha256};

use crate::{bits::BitString, errors::Bip39Error};

/// Checksum width for `nb_bytes` of entropy: one bit per 32 bits.
#[inline]
pub fn checksum_bit_len(nb_bytes: usize) -> usize {
    nb_bytes * 8 / 32
}

/// The first ENT/32 bits of SHA-256(entropy).
///
/// Used both when encoding, to append, and when decoding, to recompute and
/// compare bit-for-bit against the checksum carried by the mnemonic.
pub fn derive_checksum_bits(entropy: &[u8]) -> Result<BitString, Bip39Error> {
    let hash = Sha256::digest(entropy);
    let cs_bits = checksum_bit_len(entropy.len());

    BitString::from_bytes(&hash).slice(0..cs_bits)
}

#[cfg(test)]
mod tests_checksum {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_checksum_lengths() {
        for (nb_bytes, cs_bits) in [(16, 4), (20, 5), (24, 6), (28, 7), (32, 8)] {
            let bits = derive_checksum_bits(&[0u8; 32][..nb_bytes]).unwrap();
            assert_eq!(bits.len(), cs_bits);
        }
    }

    #[test]
    fn test_known_checksums() {
        // sha256(16 zero bytes) = 374708ff...
        assert_eq!(derive_checksum_bits(&[0u8; 16]).unwrap().to_string(), "0011");
        // sha256(32 0xff bytes) = af9613760f...
        assert_eq!(
            derive_checksum_bits(&[0xffu8; 32]).unwrap().to_string(),
            "10101111"
        );
    }

    #[test]
    fn test_checksum_is_hash_prefix() {
        let entropy = hex::decode("68a79eaca2324873eacc50cb9c6eca8cc68ea5d936f98787c60c7ebc74e6ce7c").unwrap();
        let hash = Sha256::digest(&entropy);
        let bits = derive_checksum_bits(&entropy).unwrap();
        assert_eq!(bits.to_u32().unwrap(), hash[0] as u32);
    }
}
