#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod api;
pub mod bits;
pub mod checksum;
pub mod config;
pub mod errors;
pub mod language;
pub mod mnemonic;
pub mod pbkdf2;
#[cfg(feature = "std")]
pub mod registry;
pub mod rng;
pub mod seed;
pub mod utils;
pub mod wordlist;

#[cfg(feature = "std")]
pub use api::{
    entropy_to_mnemonic, generate_mnemonic, generate_mnemonic_with, get_default_wordlist,
    get_default_wordlist_id, mnemonic_to_entropy, set_default_wordlist, validate_mnemonic,
};
pub use config::{GenerateOptions, DEFAULT_STRENGTH_BITS};
pub use errors::Bip39Error;
pub use language::Language;
pub use mnemonic::Mnemonic;
pub use seed::{mnemonic_to_seed, mnemonic_to_seed_hex};
pub use wordlist::WordList;
