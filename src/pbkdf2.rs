use hmac::{Hmac, Mac};
use sha2::{Digest, Sha512};

use crate::{errors::Bip39Error, mnemonic::SEED_BYTE_LEN};

#[inline]
fn xor(a: &mut [u8], b: &[u8]) {
    for (a_byte, b_byte) in a.iter_mut().zip(b.iter()) {
        *a_byte ^= *b_byte;
    }
}

/// PBKDF2-HMAC-SHA512 producing a 64-byte key.
///
/// The salt is given in parts and fed to the MAC back to back, so callers
/// can prefix it without building a joined buffer.
pub fn pbkdf2(
    password: &[u8],
    salt: &[&[u8]],
    c: u32,
) -> Result<[u8; SEED_BYTE_LEN], Bip39Error> {
    let prf = Hmac::<Sha512>::new_from_slice(password)?;
    let h_len = <Sha512 as Digest>::output_size();
    let mut result = [0u8; SEED_BYTE_LEN];

    for (i, chunk) in result.chunks_mut(h_len).enumerate() {
        let i_be = ((i + 1) as u32).to_be_bytes();

        let mut mac = prf.clone();
        for part in salt {
            mac.update(part);
        }
        mac.update(&i_be);
        let mut u = mac.finalize().into_bytes();

        chunk.copy_from_slice(&u[..chunk.len()]);

        for _ in 1..c {
            let mut mac = prf.clone();
            mac.update(&u);
            u = mac.finalize().into_bytes();
            xor(chunk, &u);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests_pbkdf2 {
    use super::*;

    #[test]
    fn test_xor() {
        let mut a1 = [0b10101010, 0b11001100];
        let b1 = [0b11110000, 0b00110011];
        let expected1 = [0b01011010, 0b11111111];
        xor(&mut a1, &b1);
        assert_eq!(a1, expected1);

        let mut a2 = [0xDE, 0xAD, 0xBE, 0xEF];
        let b2 = a2;
        xor(&mut a2, &b2);
        assert_eq!(a2, [0, 0, 0, 0]);
    }

    #[test]
    fn test_known_vectors() {
        let one = pbkdf2(b"password", &[b"salt"], 1).unwrap();
        assert_eq!(
            hex::encode(one),
            "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce"
        );

        let two = pbkdf2(b"password", &[b"salt"], 2).unwrap();
        assert_eq!(
            hex::encode(two),
            "e1d9c16aa681708a45f5c7c4e215ceb66e011a2e9f0040713f18aefdb866d53cf76cab2868a39b9f7840edce4fef5a82be67335c77a6068e04112754f27ccf4e"
        );
    }

    #[test]
    fn test_salt_parts_are_concatenated() {
        let joined = pbkdf2(b"key", &[b"mnemonicTREZOR"], 3).unwrap();
        let split = pbkdf2(b"key", &[b"mnemonic", b"TREZOR"], 3).unwrap();
        assert_eq!(joined, split);
    }

    #[test]
    fn test_long_password() {
        // keys longer than the SHA-512 block are hashed by the MAC itself
        let long = [b'a'; 300];
        let seed = pbkdf2(&long, &[b"salt"], 2).unwrap();
        assert_ne!(seed, [0u8; SEED_BYTE_LEN]);
        assert_eq!(seed, pbkdf2(&long, &[b"salt"], 2).unwrap());
    }
}
