use alloc::{borrow::Cow, string::String};
use unicode_normalization::{is_nfkd_quick, IsNormalized, UnicodeNormalization};

use crate::mnemonic::{MAX_ENTROPY_BYTES, MAX_NB_WORDS, MIN_ENTROPY_BYTES, MIN_NB_WORDS};

#[inline]
pub fn is_invalid_word_count(word_count: usize) -> bool {
    word_count < MIN_NB_WORDS || word_count % 3 != 0 || word_count > MAX_NB_WORDS
}

#[inline]
pub fn is_invalid_entropy_len(nb_bytes: usize) -> bool {
    nb_bytes < MIN_ENTROPY_BYTES || nb_bytes % 4 != 0 || nb_bytes > MAX_ENTROPY_BYTES
}

/// Number of words produced by `nb_bytes` of entropy: (ENT + ENT/32) / 11.
#[inline]
pub fn word_count_for_entropy(nb_bytes: usize) -> usize {
    let nb_bits = nb_bytes * 8;
    (nb_bits + nb_bits / 32) / 11
}

/// Unicode NFKD form of `text`, borrowing when it is already normalized.
pub fn normalize(text: &str) -> Cow<'_, str> {
    if is_nfkd_quick(text.chars()) == IsNormalized::Yes {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfkd().collect::<String>())
    }
}

#[cfg(test)]
mod tests_utils {
    use super::*;

    #[test]
    fn test_word_count_bounds() {
        for valid in [12, 15, 18, 21, 24] {
            assert!(!is_invalid_word_count(valid));
        }
        for invalid in [0, 3, 9, 13, 27, 33] {
            assert!(is_invalid_word_count(invalid));
        }
    }

    #[test]
    fn test_entropy_len_bounds() {
        for valid in [16, 20, 24, 28, 32] {
            assert!(!is_invalid_entropy_len(valid));
        }
        for invalid in [0, 4, 12, 17, 30, 36, 64] {
            assert!(is_invalid_entropy_len(invalid));
        }
    }

    #[test]
    fn test_word_count_for_entropy() {
        assert_eq!(word_count_for_entropy(16), 12);
        assert_eq!(word_count_for_entropy(20), 15);
        assert_eq!(word_count_for_entropy(24), 18);
        assert_eq!(word_count_for_entropy(28), 21);
        assert_eq!(word_count_for_entropy(32), 24);
    }

    #[test]
    fn test_normalize() {
        assert!(matches!(normalize("abandon about"), Cow::Borrowed(_)));

        // precomposed "á" decomposes to "a" + combining acute accent
        let decomposed = normalize("\u{e1}baco");
        assert_eq!(decomposed, "a\u{301}baco");

        // the ideographic space is a compatibility form of U+0020
        assert_eq!(normalize("a\u{3000}b"), "a b");
    }
}
