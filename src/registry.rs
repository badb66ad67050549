use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::{errors::Bip39Error, language::Language, wordlist::WordList};

static DEFAULT_WORD_LIST: RwLock<WordList<'static>> = RwLock::new(WordList::english());

/// Replaces the default with the built-in list for `language_id`.
pub fn set_default(language_id: &str) -> Result<(), Bip39Error> {
    let language: Language = language_id.parse()?;
    set_default_word_list(WordList::of(language));
    Ok(())
}

/// Installs any list, built-in or custom, as the default.
pub fn set_default_word_list(word_list: WordList<'static>) {
    // a WordList is Copy, so a poisoned lock can never hold a torn value
    let mut current = DEFAULT_WORD_LIST
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *current = word_list;
    debug!(language = ?word_list.language(), "default word list changed");
}

pub fn default_word_list() -> WordList<'static> {
    *DEFAULT_WORD_LIST
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

/// The registered language whose words match the current default, skipping
/// English and Japanese. `None` when the default is English, Japanese, or a
/// custom list matching no other language.
pub fn get_default_language() -> Option<Language> {
    let current = default_word_list();
    Language::ALL
        .into_iter()
        .filter(|language| !matches!(language, Language::English | Language::Japanese))
        .find(|&language| WordList::of(language).same_words(&current))
}

/// Serializes tests that touch the process-wide default.
#[cfg(test)]
pub(crate) static TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests_registry {
    use super::*;

    fn lock() -> std::sync::MutexGuard<'static, ()> {
        TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn test_set_and_get() {
        let _guard = lock();

        set_default("french").unwrap();
        assert_eq!(default_word_list(), WordList::of(Language::French));
        assert_eq!(get_default_language(), Some(Language::French));

        set_default("chinese_traditional").unwrap();
        assert_eq!(get_default_language(), Some(Language::ChineseTraditional));

        set_default("english").unwrap();
        assert_eq!(default_word_list(), WordList::english());
    }

    #[test]
    fn test_baseline_languages_are_not_reported() {
        let _guard = lock();

        set_default("japanese").unwrap();
        assert_eq!(get_default_language(), None);
        set_default("english").unwrap();
        assert_eq!(get_default_language(), None);
    }

    #[test]
    fn test_unknown_language_keeps_default() {
        let _guard = lock();

        set_default("italian").unwrap();
        assert_eq!(
            set_default("elvish"),
            Err(Bip39Error::UnknownLanguage("elvish".into()))
        );
        assert_eq!(default_word_list(), WordList::of(Language::Italian));
        set_default("english").unwrap();
    }

    #[test]
    fn test_custom_list_matching_a_language() {
        let _guard = lock();

        set_default_word_list(WordList::custom(Language::Korean.word_list()));
        assert_eq!(default_word_list().language(), None);
        assert_eq!(get_default_language(), Some(Language::Korean));
        set_default("english").unwrap();
    }
}
