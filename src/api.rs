use std::string::{String, ToString};

use tracing::trace;

use crate::{
    config::GenerateOptions,
    errors::Bip39Error,
    language::Language,
    mnemonic::Mnemonic,
    registry,
    rng::{os_rng, Rng},
    wordlist::WordList,
};

pub use crate::seed::{mnemonic_to_seed, mnemonic_to_seed_hex};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

#[inline]
fn resolve<'a>(word_list: Option<WordList<'a>>) -> WordList<'a> {
    word_list.unwrap_or_else(|| registry::default_word_list())
}

/// Fresh phrase from the thread-local OS-seeded CSPRNG.
pub fn generate_mnemonic(options: GenerateOptions<'_>) -> Result<String, Bip39Error> {
    generate_mnemonic_with(&mut os_rng(), options)
}

pub fn generate_mnemonic_with<R: Rng + ?Sized>(
    rng: &mut R,
    options: GenerateOptions<'_>,
) -> Result<String, Bip39Error> {
    let word_list = resolve(options.word_list);
    trace!(
        strength_bits = options.strength_bits,
        language = ?word_list.language(),
        "generating mnemonic"
    );
    Mnemonic::generate(rng, word_list, options.strength_bits).map(|m| m.to_string())
}

/// `true` if the phrase decodes cleanly; every failure collapses to `false`.
pub fn validate_mnemonic(mnemonic: &str, word_list: Option<WordList<'_>>) -> bool {
    Mnemonic::validate(resolve(word_list), mnemonic)
}

/// Entropy carried by the phrase, as lower-case hex.
pub fn mnemonic_to_entropy(
    mnemonic: &str,
    word_list: Option<WordList<'_>>,
) -> Result<String, Bip39Error> {
    let mnemonic = Mnemonic::parse(resolve(word_list), mnemonic)?;
    let entropy = mnemonic.to_entropy()?;
    let encoded = hex::encode(&entropy);

    #[cfg(feature = "zeroize")]
    {
        let mut entropy = entropy;
        entropy.zeroize();
    }

    Ok(encoded)
}

pub fn entropy_to_mnemonic(
    entropy_hex: &str,
    word_list: Option<WordList<'_>>,
) -> Result<String, Bip39Error> {
    let entropy = hex::decode(entropy_hex)?;
    let phrase = Mnemonic::from_entropy(resolve(word_list), &entropy).map(|m| m.to_string());

    #[cfg(feature = "zeroize")]
    {
        let mut entropy = entropy;
        entropy.zeroize();
    }

    phrase
}

pub fn set_default_wordlist(language_id: &str) -> Result<(), Bip39Error> {
    registry::set_default(language_id)
}

/// Language of the current default list; see [`registry::get_default_language`].
pub fn get_default_wordlist() -> Option<Language> {
    registry::get_default_language()
}

/// Identifier form of [`get_default_wordlist`], empty when there is no match.
pub fn get_default_wordlist_id() -> String {
    get_default_wordlist()
        .map(|language| language.id().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests_api {
    use super::*;
    use crate::registry::TEST_LOCK;
    use rand::{rngs::StdRng, SeedableRng};
    use std::sync::{MutexGuard, PoisonError};

    fn lock() -> MutexGuard<'static, ()> {
        TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn test_hex_round_trip() {
        let phrase = entropy_to_mnemonic("7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f", Some(WordList::english())).unwrap();
        assert_eq!(
            phrase,
            "legal winner thank year wave sausage worth useful legal winner thank yellow"
        );
        assert_eq!(
            mnemonic_to_entropy(&phrase, Some(WordList::english())).unwrap(),
            "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f"
        );
    }

    #[test]
    fn test_upper_case_hex() {
        assert_eq!(
            entropy_to_mnemonic("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF", Some(WordList::english())).unwrap(),
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong"
        );
    }

    #[test]
    fn test_bad_hex() {
        assert_eq!(
            entropy_to_mnemonic("abc", None),
            Err(Bip39Error::InvalidHex(hex::FromHexError::OddLength))
        );
        assert!(matches!(
            entropy_to_mnemonic("zz000000000000000000000000000000", None),
            Err(Bip39Error::InvalidHex(_))
        ));
        assert_eq!(
            entropy_to_mnemonic("00000000", None),
            Err(Bip39Error::InvalidEntropyLength(32))
        );
    }

    #[test]
    fn test_generate_uses_default_list() {
        let _guard = lock();

        set_default_wordlist("japanese").unwrap();
        let phrase = generate_mnemonic(GenerateOptions::default()).unwrap();
        set_default_wordlist("english").unwrap();

        let words: Vec<&str> = phrase.split('\u{3000}').collect();
        assert_eq!(words.len(), 12);
        let japanese = WordList::of(Language::Japanese);
        assert!(words.iter().all(|word| japanese.index_of(word).is_some()));
        assert!(validate_mnemonic(&phrase, Some(japanese)));
    }

    #[test]
    fn test_explicit_list_overrides_default() {
        let _guard = lock();

        set_default_wordlist("spanish").unwrap();
        let options = GenerateOptions::for_word_count(24).with_word_list(WordList::english());
        let phrase = generate_mnemonic_with(&mut StdRng::seed_from_u64(3), options).unwrap();
        assert_eq!(get_default_wordlist(), Some(Language::Spanish));
        assert_eq!(get_default_wordlist_id(), "spanish");
        set_default_wordlist("english").unwrap();

        assert_eq!(phrase.split(' ').count(), 24);
        assert!(validate_mnemonic(&phrase, None));
        assert_eq!(get_default_wordlist_id(), "");
    }

    #[test]
    fn test_generate_rejects_bad_strength() {
        assert_eq!(
            generate_mnemonic(GenerateOptions::default().with_strength_bits(100)),
            Err(Bip39Error::InvalidEntropyLength(100))
        );
    }

    #[test]
    fn test_validate_is_boolean() {
        assert!(!validate_mnemonic("abandon", Some(WordList::english())));
        assert!(!validate_mnemonic("abandon abandon abandon", Some(WordList::english())));
        assert!(!validate_mnemonic("", Some(WordList::english())));
    }

    #[test]
    fn test_seed_hex() {
        let phrase = "legal winner thank year wave sausage worth useful legal winner thank yellow";
        assert_eq!(
            mnemonic_to_seed_hex(phrase, "TREZOR").unwrap(),
            "2e8905819b8723fe2c1d161860e5ee1830318dbf49a83bd451cfb8440c28bd6fa457fe1296106559a3c80937a1c1069be3a3a5bd381ee6260e8d9739fce1f607"
        );
        assert_eq!(
            hex::encode(mnemonic_to_seed(phrase, "TREZOR").unwrap()),
            mnemonic_to_seed_hex(phrase, "TREZOR").unwrap()
        );
    }
}
