use core::fmt;

use crate::{language::Language, mnemonic::MAX_WORDS_DICT};

/// A 2048-word dictionary together with the language it belongs to.
///
/// The language tag, not the content, decides the phrase separator, so a
/// caller-supplied list built with [`WordList::custom`] always joins words
/// with an ordinary space.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct WordList<'a> {
    words: &'a [&'a str; MAX_WORDS_DICT],
    language: Option<Language>,
}

impl WordList<'static> {
    pub const fn of(language: Language) -> Self {
        Self {
            words: language.word_list(),
            language: Some(language),
        }
    }

    pub const fn english() -> Self {
        Self::of(Language::English)
    }
}

impl<'a> WordList<'a> {
    /// Wraps an arbitrary dictionary. Words are matched after NFKD
    /// normalization of the input phrase, so they should be stored in NFKD.
    pub const fn custom(words: &'a [&'a str; MAX_WORDS_DICT]) -> Self {
        Self {
            words,
            language: None,
        }
    }

    #[inline]
    pub fn words(&self) -> &'a [&'a str; MAX_WORDS_DICT] {
        self.words
    }

    #[inline]
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Word for an 11-bit code. Panics if `index` is not below 2048.
    #[inline]
    pub fn word(&self, index: u16) -> &'a str {
        self.words[index as usize]
    }

    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.words
            .iter()
            .position(|candidate| *candidate == word)
            .map(|index| index as u16)
    }

    #[inline]
    pub fn separator(&self) -> &'static str {
        self.language.map_or(" ", Language::separator)
    }

    /// Element-wise comparison of the words, ignoring the language tag.
    pub fn same_words(&self, other: &WordList<'_>) -> bool {
        self.words.iter().zip(other.words.iter()).all(|(a, b)| a == b)
    }
}

impl<'a> fmt::Debug for WordList<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("WordList")
            .field("language", &self.language)
            .field("first", &self.words[0])
            .finish()
    }
}

impl From<Language> for WordList<'static> {
    fn from(language: Language) -> Self {
        WordList::of(language)
    }
}

impl Default for WordList<'static> {
    fn default() -> Self {
        WordList::english()
    }
}

#[cfg(test)]
mod tests_wordlist {
    use super::*;

    #[test]
    fn test_lookup() {
        let list = WordList::english();
        assert_eq!(list.index_of("abandon"), Some(0));
        assert_eq!(list.index_of("about"), Some(3));
        assert_eq!(list.index_of("zoo"), Some(2047));
        assert_eq!(list.index_of("satoshi"), Some(1531));
        assert_eq!(list.index_of("bitcoin"), None);
        assert_eq!(list.index_of("Abandon"), None);
        assert_eq!(list.word(3), "about");
        assert_eq!(list.word(2047), "zoo");
    }

    #[test]
    fn test_word_indexes_directly() {
        let list = WordList::english();
        assert_eq!(list.word(0), "abandon");
        assert_eq!(list.word(1531), "satoshi");
    }

    #[test]
    #[should_panic]
    fn test_word_out_of_range() {
        WordList::english().word(2048);
    }

    #[test]
    fn test_tags_and_separators() {
        assert_eq!(WordList::english().language(), Some(Language::English));
        assert_eq!(WordList::of(Language::Japanese).separator(), "\u{3000}");
        assert_eq!(WordList::of(Language::French).separator(), " ");

        let custom = WordList::custom(Language::Japanese.word_list());
        assert_eq!(custom.language(), None);
        assert_eq!(custom.separator(), " ");
        assert!(custom.same_words(&WordList::of(Language::Japanese)));
        assert_ne!(custom, WordList::of(Language::Japanese));
    }

    #[test]
    fn test_same_words() {
        let english = WordList::english();
        assert!(english.same_words(&WordList::default()));
        assert!(!english.same_words(&WordList::of(Language::Spanish)));
        assert!(!WordList::of(Language::ChineseSimplified)
            .same_words(&WordList::of(Language::ChineseTraditional)));
    }
}
