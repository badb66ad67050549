use proptest::prelude::*;

use bip39_codec::{
    entropy_to_mnemonic, mnemonic_to_entropy, validate_mnemonic, Language, Mnemonic, WordList,
};

fn entropy_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![16usize, 20, 24, 28, 32])
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

fn language_strategy() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn entropy_round_trips(entropy in entropy_strategy(), language in language_strategy()) {
        let list = WordList::of(language);
        let mnemonic = Mnemonic::from_entropy(list, &entropy).unwrap();
        let parsed = Mnemonic::parse(list, &mnemonic.to_string()).unwrap();
        prop_assert_eq!(parsed.to_entropy().unwrap(), entropy);
    }

    #[test]
    fn hex_round_trips(entropy in entropy_strategy()) {
        let english = Some(WordList::english());
        let phrase = entropy_to_mnemonic(&hex::encode(&entropy), english).unwrap();
        prop_assert!(validate_mnemonic(&phrase, english));
        prop_assert_eq!(mnemonic_to_entropy(&phrase, english).unwrap(), hex::encode(&entropy));
    }

    #[test]
    fn word_count_follows_entropy(entropy in entropy_strategy()) {
        let mnemonic = Mnemonic::from_entropy(WordList::english(), &entropy).unwrap();
        let ent = entropy.len() * 8;
        prop_assert_eq!(mnemonic.word_count(), (ent + ent / 32) / 11);
        prop_assert_eq!(mnemonic.word_count() % 3, 0);
    }

    #[test]
    fn validation_is_stable(words in prop::collection::vec(0u16..2048, 0..30)) {
        let english = WordList::english();
        let phrase = words
            .iter()
            .map(|&index| english.word(index))
            .collect::<Vec<_>>()
            .join(" ");
        let first = validate_mnemonic(&phrase, Some(english));
        prop_assert_eq!(first, validate_mnemonic(&phrase, Some(english)));
        prop_assert_eq!(first, Mnemonic::parse(english, &phrase).is_ok());
    }
}
