use crate::{mnemonic::BITS_PER_WORD, wordlist::WordList};

/// 128 bits of entropy, a 12-word phrase.
pub const DEFAULT_STRENGTH_BITS: usize = 128;

/// Options for generating a fresh phrase.
///
/// `word_list: None` means the process-wide default list at the time of
/// the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions<'a> {
    pub strength_bits: usize,
    pub word_list: Option<WordList<'a>>,
}

impl<'a> Default for GenerateOptions<'a> {
    fn default() -> Self {
        Self {
            strength_bits: DEFAULT_STRENGTH_BITS,
            word_list: None,
        }
    }
}

impl<'a> GenerateOptions<'a> {
    pub fn with_strength_bits(mut self, strength_bits: usize) -> Self {
        self.strength_bits = strength_bits;
        self
    }

    pub fn with_word_list(mut self, word_list: WordList<'a>) -> Self {
        self.word_list = Some(word_list);
        self
    }

    /// Strength that yields `word_count` words (ENT = words * 11 * 32 / 33).
    /// Counts outside 12..=24 in steps of 3 are rejected when generating.
    pub fn for_word_count(word_count: usize) -> Self {
        Self::default().with_strength_bits(word_count * BITS_PER_WORD * 32 / 33)
    }
}

#[cfg(test)]
mod tests_config {
    use super::*;
    use crate::language::Language;

    #[test]
    fn test_defaults() {
        let options = GenerateOptions::default();
        assert_eq!(options.strength_bits, 128);
        assert_eq!(options.word_list, None);
    }

    #[test]
    fn test_builders() {
        let options = GenerateOptions::default()
            .with_strength_bits(256)
            .with_word_list(WordList::of(Language::Czech));
        assert_eq!(options.strength_bits, 256);
        assert_eq!(options.word_list, Some(WordList::of(Language::Czech)));
    }

    #[test]
    fn test_for_word_count() {
        for (words, bits) in [(12, 128), (15, 160), (18, 192), (21, 224), (24, 256)] {
            assert_eq!(GenerateOptions::for_word_count(words).strength_bits, bits);
        }
    }
}
