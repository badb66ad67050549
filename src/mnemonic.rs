use crate::{
    bits::{chunk, BitString},
    checksum::derive_checksum_bits,
    errors::Bip39Error,
    rng::Rng,
    seed,
    utils::{is_invalid_entropy_len, is_invalid_word_count, normalize, word_count_for_entropy},
    wordlist::WordList,
};
use alloc::{string::ToString, vec::Vec};
use core::fmt;
use tracing::debug;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

pub const MIN_NB_WORDS: usize = 12;
pub const MAX_NB_WORDS: usize = 24;
pub const MAX_WORDS_DICT: usize = 2048;
pub const SEED_BYTE_LEN: usize = 64;
pub const BITS_PER_WORD: usize = 11;
pub const MIN_ENTROPY_BYTES: usize = 16;
pub const MAX_ENTROPY_BYTES: usize = 32;

/// A checksummed phrase: word indices into the list that produced them.
///
/// Only constructed through [`Mnemonic::from_entropy`], [`Mnemonic::parse`]
/// or [`Mnemonic::generate`], so the word count is always one of
/// 12, 15, 18, 21 or 24 and the embedded checksum always matches.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Mnemonic<'a> {
    word_list: WordList<'a>,
    indicators: [u16; MAX_NB_WORDS],
    word_count: usize,
}

pub struct MnemonicIter<'a, 'b> {
    mnemonic: &'b Mnemonic<'a>,
    position: usize,
}

impl<'a, 'b> Iterator for MnemonicIter<'a, 'b> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.mnemonic.word_count {
            return None;
        }
        let word_index = self.mnemonic.indicators[self.position];
        self.position += 1;
        Some(self.mnemonic.word_list.word(word_index))
    }
}

impl<'a> fmt::Display for Mnemonic<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let separator = self.word_list.separator();
        for (i, word) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

/// Rebuilds the bit stream from word indices and splits it into entropy
/// bytes and the trailing checksum bits.
///
/// ENT = 32k and CS = k, so the stream holds 33k bits and the divider is
/// `floor(len / 33) * 32`.
fn split_entropy(indices: &[u16]) -> Result<(Vec<u8>, BitString), Bip39Error> {
    let mut bits = BitString::with_capacity(indices.len() * BITS_PER_WORD);
    for &index in indices {
        bits.push_bits(index as u32, BITS_PER_WORD);
    }

    let divider = bits.len() / 33 * 32;
    let (entropy_bits, checksum_bits) = bits.split_at(divider)?;
    Ok((entropy_bits.to_bytes()?, checksum_bits))
}

impl<'a> Mnemonic<'a> {
    pub fn iter<'b>(&'b self) -> MnemonicIter<'a, 'b> {
        MnemonicIter {
            mnemonic: self,
            position: 0,
        }
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    #[inline]
    pub fn word_list(&self) -> WordList<'a> {
        self.word_list
    }

    /// The 11-bit code of each word, in phrase order.
    pub fn indices(&self) -> &[u16] {
        &self.indicators[..self.word_count]
    }

    pub fn from_entropy(word_list: WordList<'a>, entropy: &[u8]) -> Result<Self, Bip39Error> {
        let nb_bytes = entropy.len();
        if is_invalid_entropy_len(nb_bytes) {
            return Err(Bip39Error::InvalidEntropyLength(nb_bytes * 8));
        }

        let mut bits = BitString::from_bytes(entropy);
        bits.append(&derive_checksum_bits(entropy)?);

        // ENT * 33 / 32 is a multiple of 11 for every accepted length
        let groups = chunk(&bits, BITS_PER_WORD, false)?;
        debug_assert_eq!(groups.len(), word_count_for_entropy(nb_bytes));

        let mut indicators = [0u16; MAX_NB_WORDS];
        for (slot, group) in indicators.iter_mut().zip(groups.iter()) {
            *slot = group.to_u32()? as u16;
        }

        Ok(Mnemonic {
            word_list,
            indicators,
            word_count: groups.len(),
        })
    }

    /// Decodes and fully validates a phrase against `word_list`.
    ///
    /// The phrase is NFKD-normalized and split on any whitespace, so both the
    /// ordinary and the ideographic space are accepted as separators.
    pub fn parse(word_list: WordList<'a>, phrase: &str) -> Result<Self, Bip39Error> {
        let normalized = normalize(phrase);

        let word_count = normalized.split_whitespace().count();
        if word_count == 0 || word_count % 3 != 0 {
            return Err(Bip39Error::InvalidMnemonicLength(word_count));
        }
        // decodes past 32 bytes whatever the words are
        if word_count > MAX_NB_WORDS {
            return Err(Bip39Error::InvalidEntropyLength(word_count / 3 * 32));
        }

        let mut indices = Vec::with_capacity(word_count);
        for (position, word) in normalized.split_whitespace().enumerate() {
            let index = word_list
                .index_of(word)
                .ok_or(Bip39Error::WordNotInWordlist(position))?;
            indices.push(index);
        }

        let (entropy, checksum_bits) = split_entropy(&indices)?;
        let nb_bytes = entropy.len();

        let result = if derive_checksum_bits(&entropy)? != checksum_bits {
            Err(Bip39Error::ChecksumMismatch)
        } else if is_invalid_entropy_len(nb_bytes) {
            Err(Bip39Error::InvalidEntropyLength(nb_bytes * 8))
        } else {
            let mut indicators = [0u16; MAX_NB_WORDS];
            indicators[..word_count].copy_from_slice(&indices);
            Ok(Mnemonic {
                word_list,
                indicators,
                word_count,
            })
        };

        #[cfg(feature = "zeroize")]
        {
            let mut entropy = entropy;
            entropy.zeroize();
            indices.zeroize();
        }

        result
    }

    /// `true` when `phrase` decodes cleanly against `word_list`. The reason
    /// for a rejection is not reported; use [`Mnemonic::parse`] for that.
    pub fn validate(word_list: WordList<'a>, phrase: &str) -> bool {
        match Self::parse(word_list, phrase) {
            Ok(_) => true,
            Err(error) => {
                debug!(%error, "mnemonic rejected");
                false
            }
        }
    }

    pub fn to_entropy(&self) -> Result<Vec<u8>, Bip39Error> {
        let (entropy, _) = split_entropy(self.indices())?;
        Ok(entropy)
    }

    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        word_list: WordList<'a>,
        strength_bits: usize,
    ) -> Result<Self, Bip39Error> {
        if strength_bits % 32 != 0 || is_invalid_entropy_len(strength_bits / 8) {
            return Err(Bip39Error::InvalidEntropyLength(strength_bits));
        }

        let mut buffer = [0u8; MAX_ENTROPY_BYTES];
        let entropy = &mut buffer[..strength_bits / 8];
        Rng::fill_bytes(rng, entropy);

        let mnemonic = Self::from_entropy(word_list, entropy);

        #[cfg(feature = "zeroize")]
        buffer.zeroize();

        mnemonic
    }

    pub fn generate_with_word_count<R: Rng + ?Sized>(
        rng: &mut R,
        word_list: WordList<'a>,
        word_count: usize,
    ) -> Result<Self, Bip39Error> {
        if is_invalid_word_count(word_count) {
            return Err(Bip39Error::InvalidMnemonicLength(word_count));
        }

        Self::generate(rng, word_list, (word_count / 3) * 32)
    }

    /// 64-byte seed for this phrase; see [`seed::mnemonic_to_seed`].
    pub fn to_seed(&self, passphrase: &str) -> Result<[u8; SEED_BYTE_LEN], Bip39Error> {
        seed::mnemonic_to_seed(&self.to_string(), passphrase)
    }
}

#[cfg(feature = "zeroize")]
impl<'a> Zeroize for Mnemonic<'a> {
    fn zeroize(&mut self) {
        self.indicators.zeroize();
        self.word_count.zeroize();
    }
}

#[cfg(test)]
mod tests_mnemonic {
    use super::*;
    use crate::language::Language;
    use alloc::{
        string::{String, ToString},
        vec,
    };
    use rand::{rngs::StdRng, SeedableRng};

    const ZERO_PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_from_entropy_zero() {
        let mnemonic = Mnemonic::from_entropy(WordList::english(), &[0u8; 16]).unwrap();
        assert_eq!(mnemonic.word_count(), 12);
        assert_eq!(mnemonic.to_string(), ZERO_PHRASE);
        assert_eq!(mnemonic.indices()[11], 3);
    }

    #[test]
    fn test_from_entropy_word_counts() {
        for (nb_bytes, words) in [(16, 12), (20, 15), (24, 18), (28, 21), (32, 24)] {
            let entropy = vec![0x5a; nb_bytes];
            let mnemonic = Mnemonic::from_entropy(WordList::english(), &entropy).unwrap();
            assert_eq!(mnemonic.word_count(), words);
            assert_eq!(mnemonic.iter().count(), words);
            assert_eq!(mnemonic.to_entropy().unwrap(), entropy);
        }
    }

    #[test]
    fn test_from_entropy_rejects_bad_lengths() {
        for nb_bytes in [0, 4, 12, 15, 17, 30, 33, 36, 64] {
            let entropy = vec![0u8; nb_bytes];
            assert_eq!(
                Mnemonic::from_entropy(WordList::english(), &entropy),
                Err(Bip39Error::InvalidEntropyLength(nb_bytes * 8))
            );
        }
    }

    #[test]
    fn test_parse_round_trip() {
        let mnemonic = Mnemonic::parse(WordList::english(), ZERO_PHRASE).unwrap();
        assert_eq!(mnemonic.to_entropy().unwrap(), [0u8; 16]);
        assert_eq!(
            Mnemonic::parse(WordList::english(), &mnemonic.to_string()).unwrap(),
            mnemonic
        );
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let spaced = String::from("  ") + &ZERO_PHRASE.replace(' ', " \t ") + "\n";
        let mnemonic = Mnemonic::parse(WordList::english(), &spaced).unwrap();
        assert_eq!(mnemonic.to_string(), ZERO_PHRASE);
    }

    #[test]
    fn test_parse_word_count() {
        assert_eq!(
            Mnemonic::parse(WordList::english(), ""),
            Err(Bip39Error::InvalidMnemonicLength(0))
        );
        assert_eq!(
            Mnemonic::parse(WordList::english(), "abandon"),
            Err(Bip39Error::InvalidMnemonicLength(1))
        );
        assert_eq!(
            Mnemonic::parse(WordList::english(), "abandon abandon abandon abandon"),
            Err(Bip39Error::InvalidMnemonicLength(4))
        );
    }

    #[test]
    fn test_parse_unknown_word() {
        let phrase = ZERO_PHRASE.replacen("abandon", "bitcoin", 1).replace("about", "satoshi");
        assert_eq!(
            Mnemonic::parse(WordList::english(), &phrase),
            Err(Bip39Error::WordNotInWordlist(0))
        );
        assert_eq!(
            Mnemonic::parse(WordList::english(), "abandon abandon foo"),
            Err(Bip39Error::WordNotInWordlist(2))
        );
        // "abandon" is also a French word, "about" is not
        assert_eq!(
            Mnemonic::parse(WordList::of(Language::French), ZERO_PHRASE),
            Err(Bip39Error::WordNotInWordlist(11))
        );
    }

    #[test]
    fn test_parse_checksum() {
        let phrase = ZERO_PHRASE.replace("about", "above");
        assert_eq!(
            Mnemonic::parse(WordList::english(), &phrase),
            Err(Bip39Error::ChecksumMismatch)
        );
        assert_eq!(
            Mnemonic::parse(WordList::english(), "abandon abandon abandon"),
            Err(Bip39Error::ChecksumMismatch)
        );
    }

    #[test]
    fn test_parse_short_phrase_with_valid_checksum() {
        // 3, 6 and 9 word phrases whose checksum happens to match
        for phrase in [
            "abandon abandon ability",
            "abandon abandon abandon abandon abandon able",
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon",
        ] {
            let word_count = phrase.split(' ').count();
            assert_eq!(
                Mnemonic::parse(WordList::english(), phrase),
                Err(Bip39Error::InvalidEntropyLength(word_count / 3 * 32)),
                "{phrase}"
            );
        }
    }

    #[test]
    fn test_parse_too_long() {
        let phrase = vec!["abandon"; 27].join(" ");
        assert_eq!(
            Mnemonic::parse(WordList::english(), &phrase),
            Err(Bip39Error::InvalidEntropyLength(288))
        );
    }

    #[test]
    fn test_parse_rejects_long_input_before_lookup() {
        let phrase = vec!["bitcoin"; 30_000].join(" ");
        assert_eq!(
            Mnemonic::parse(WordList::english(), &phrase),
            Err(Bip39Error::InvalidEntropyLength(320_000))
        );
        assert!(!Mnemonic::validate(WordList::english(), &phrase));
    }

    #[test]
    fn test_validate() {
        assert!(Mnemonic::validate(WordList::english(), ZERO_PHRASE));
        assert!(!Mnemonic::validate(WordList::english(), "abandon"));
        assert!(!Mnemonic::validate(WordList::english(), "abandon abandon abandon"));
        assert!(!Mnemonic::validate(WordList::of(Language::Spanish), ZERO_PHRASE));

        // repeated calls agree
        for _ in 0..3 {
            assert!(Mnemonic::validate(WordList::english(), ZERO_PHRASE));
        }
    }

    #[test]
    fn test_japanese_separator() {
        let list = WordList::of(Language::Japanese);
        let mnemonic = Mnemonic::from_entropy(list, &[0u8; 16]).unwrap();
        let phrase = mnemonic.to_string();
        assert_eq!(phrase.split('\u{3000}').count(), 12);
        assert!(!phrase.contains(' '));
        assert_eq!(Mnemonic::parse(list, &phrase).unwrap(), mnemonic);
    }

    #[test]
    fn test_custom_list_uses_space() {
        let list = WordList::custom(Language::Japanese.word_list());
        let phrase = Mnemonic::from_entropy(list, &[0u8; 16]).unwrap().to_string();
        assert_eq!(phrase.split(' ').count(), 12);
    }

    #[test]
    fn test_generate() {
        let mut rng = StdRng::seed_from_u64(39);
        for (strength, words) in [(128, 12), (160, 15), (192, 18), (224, 21), (256, 24)] {
            let mnemonic = Mnemonic::generate(&mut rng, WordList::english(), strength).unwrap();
            assert_eq!(mnemonic.word_count(), words);
            assert!(Mnemonic::validate(WordList::english(), &mnemonic.to_string()));
        }

        let a = Mnemonic::generate(&mut StdRng::seed_from_u64(1), WordList::english(), 128).unwrap();
        let b = Mnemonic::generate(&mut StdRng::seed_from_u64(1), WordList::english(), 128).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_rejects_bad_strength() {
        let mut rng = StdRng::seed_from_u64(0);
        for strength in [0, 64, 96, 129, 136, 288, 512] {
            assert_eq!(
                Mnemonic::generate(&mut rng, WordList::english(), strength),
                Err(Bip39Error::InvalidEntropyLength(strength))
            );
        }
    }

    #[test]
    fn test_generate_with_word_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let mnemonic =
            Mnemonic::generate_with_word_count(&mut rng, WordList::english(), 24).unwrap();
        assert_eq!(mnemonic.to_entropy().unwrap().len(), 32);
        assert_eq!(
            Mnemonic::generate_with_word_count(&mut rng, WordList::english(), 13),
            Err(Bip39Error::InvalidMnemonicLength(13))
        );
    }

    #[test]
    fn test_to_seed() {
        let mnemonic = Mnemonic::parse(WordList::english(), ZERO_PHRASE).unwrap();
        let seed = mnemonic.to_seed("TREZOR").unwrap();
        assert_eq!(
            hex::encode(seed),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }
}
