//! The ten standard BIP39 word lists.
//!
//! Each list is exactly 2048 words in Unicode NFKD form. A word's position
//! is its 11-bit code, so the order of these arrays must never change.

use alloc::string::ToString;
use core::{fmt, str::FromStr};

use crate::{errors::Bip39Error, mnemonic::MAX_WORDS_DICT};

mod chinese_simplified;
mod chinese_traditional;
mod czech;
mod english;
mod french;
mod italian;
mod japanese;
mod korean;
mod portuguese;
mod spanish;

const IDEOGRAPHIC_SPACE: &str = "\u{3000}";
const SPACE: &str = " ";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Czech,
    #[default]
    English,
    Spanish,
    French,
    Italian,
    Japanese,
    Korean,
    Portuguese,
    ChineseSimplified,
    ChineseTraditional,
}

impl Language {
    /// Every registered language, in registry order.
    pub const ALL: [Language; 10] = [
        Language::Czech,
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Italian,
        Language::Japanese,
        Language::Korean,
        Language::Portuguese,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Language::Czech => "czech",
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Portuguese => "portuguese",
            Language::ChineseSimplified => "chinese_simplified",
            Language::ChineseTraditional => "chinese_traditional",
        }
    }

    #[inline]
    pub const fn word_list(self) -> &'static [&'static str; MAX_WORDS_DICT] {
        match self {
            Language::Czech => &czech::WORDS,
            Language::English => &english::WORDS,
            Language::Spanish => &spanish::WORDS,
            Language::French => &french::WORDS,
            Language::Italian => &italian::WORDS,
            Language::Japanese => &japanese::WORDS,
            Language::Korean => &korean::WORDS,
            Language::Portuguese => &portuguese::WORDS,
            Language::ChineseSimplified => &chinese_simplified::WORDS,
            Language::ChineseTraditional => &chinese_traditional::WORDS,
        }
    }

    /// Japanese phrases are joined with U+3000, all others with U+0020.
    #[inline]
    pub const fn separator(self) -> &'static str {
        match self {
            Language::Japanese => IDEOGRAPHIC_SPACE,
            _ => SPACE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Language {
    type Err = Bip39Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.id() == s)
            .ok_or_else(|| Bip39Error::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests_language {
    use super::*;
    use alloc::{collections::BTreeSet, string::ToString};

    #[test]
    fn test_lists_are_complete_and_unique() {
        for language in Language::ALL {
            let words = language.word_list();
            let unique: BTreeSet<_> = words.iter().collect();
            assert_eq!(unique.len(), MAX_WORDS_DICT, "{language} has duplicates");
            assert!(words.iter().all(|w| !w.is_empty()));
        }
    }

    #[test]
    fn test_lists_are_nfkd() {
        for language in Language::ALL {
            for word in language.word_list() {
                assert_eq!(crate::utils::normalize(word), *word, "{language}: {word}");
            }
        }
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(Language::English.word_list()[0], "abandon");
        assert_eq!(Language::English.word_list()[2047], "zoo");
        assert_eq!(Language::Japanese.word_list()[0], "あいこくしん");
        // stored decomposed, so the precomposed syllables only match after NFKD
        assert_eq!(
            Language::Korean.word_list()[0],
            "\u{1100}\u{1161}\u{1100}\u{1167}\u{11a8}"
        );
        assert_ne!(Language::Korean.word_list()[0], "\u{ac00}\u{aca9}");
        assert_eq!(crate::utils::normalize("\u{ac00}\u{aca9}"), Language::Korean.word_list()[0]);
        assert_eq!(Language::Italian.word_list()[2047], "zuppa");
        assert_eq!(Language::Czech.word_list()[0], "abdikace");
    }

    #[test]
    fn test_chinese_lists_differ() {
        let simplified = Language::ChineseSimplified.word_list();
        let traditional = Language::ChineseTraditional.word_list();
        assert_eq!(simplified[0], traditional[0]);
        assert_ne!(simplified, traditional);
    }

    #[test]
    fn test_parse_and_display() {
        for language in Language::ALL {
            assert_eq!(language.to_string().parse::<Language>(), Ok(language));
        }
        assert_eq!(
            "klingon".parse::<Language>(),
            Err(Bip39Error::UnknownLanguage("klingon".to_string()))
        );
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_separator() {
        assert_eq!(Language::Japanese.separator(), "\u{3000}");
        for language in Language::ALL {
            if language != Language::Japanese {
                assert_eq!(language.separator(), " ");
            }
        }
    }
}
