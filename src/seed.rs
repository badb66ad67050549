use alloc::string::String;

use crate::{errors::Bip39Error, mnemonic::SEED_BYTE_LEN, pbkdf2::pbkdf2, utils::normalize};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

pub const PBKDF2_ROUNDS: u32 = 2048;

const SALT_PREFIX: &str = "mnemonic";

pub fn mnemonic_to_seed(
    mnemonic: &str,
    passphrase: &str,
) -> Result<[u8; SEED_BYTE_LEN], Bip39Error> {
    let mnemonic = normalize(mnemonic);
    let passphrase = normalize(passphrase);

    let seed = pbkdf2(
        mnemonic.as_bytes(),
        &[SALT_PREFIX.as_bytes(), passphrase.as_bytes()],
        PBKDF2_ROUNDS,
    );

    #[cfg(feature = "zeroize")]
    {
        // only the owned copies made by normalization belong to us
        if let alloc::borrow::Cow::Owned(mut text) = mnemonic {
            text.zeroize();
        }
        if let alloc::borrow::Cow::Owned(mut text) = passphrase {
            text.zeroize();
        }
    }

    seed
}

pub fn mnemonic_to_seed_hex(mnemonic: &str, passphrase: &str) -> Result<String, Bip39Error> {
    mnemonic_to_seed(mnemonic, passphrase).map(hex::encode)
}

#[cfg(test)]
mod tests_seed {
    use super::*;

    const ZERO_PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_empty_passphrase() {
        assert_eq!(
            mnemonic_to_seed_hex(ZERO_PHRASE, "").unwrap(),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn test_salt_has_no_separator() {
        let seed = mnemonic_to_seed(ZERO_PHRASE, "TREZOR").unwrap();
        let expected = pbkdf2(ZERO_PHRASE.as_bytes(), &[b"mnemonicTREZOR"], PBKDF2_ROUNDS).unwrap();
        let spaced = pbkdf2(ZERO_PHRASE.as_bytes(), &[b"mnemonic TREZOR"], PBKDF2_ROUNDS).unwrap();
        assert_eq!(seed, expected);
        assert_ne!(seed, spaced);
    }

    #[test]
    fn test_invalid_phrase_still_derives() {
        // wrong checksum and an unknown word
        let seed = mnemonic_to_seed("abandon abandon abandon", "").unwrap();
        assert_eq!(seed.len(), SEED_BYTE_LEN);
        assert!(mnemonic_to_seed("not a bip39 phrase at all", "").is_ok());
    }

    #[test]
    fn test_passphrase_is_normalized() {
        // U+00E9 and "e" + U+0301 are the same text after NFKD
        let composed = mnemonic_to_seed(ZERO_PHRASE, "caf\u{e9}").unwrap();
        let decomposed = mnemonic_to_seed(ZERO_PHRASE, "cafe\u{301}").unwrap();
        assert_eq!(composed, decomposed);
    }
}
