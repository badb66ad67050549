use alloc::string::String;
use hmac::digest::InvalidLength;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Bip39Error {
    #[error("entropy was not between 128-256 bits or not a multiple of 32 bits: {0} bits")]
    InvalidEntropyLength(usize),

    #[error("invalid word count: {0}")]
    InvalidMnemonicLength(usize),

    #[error("mnemonic contains an unknown word (word {0})")]
    WordNotInWordlist(usize),

    #[error("the mnemonic has an invalid checksum")]
    ChecksumMismatch,

    #[error("malformed bit string: {len} bits cannot be taken as {width}-bit groups")]
    MalformedBitString { len: usize, width: usize },

    #[error("could not find word list for language {0:?}")]
    UnknownLanguage(String),

    #[error("entropy is not valid hex: {0}")]
    InvalidHex(hex::FromHexError),

    #[error("HMAC key error: {0}")]
    HmacError(InvalidLength),
}

impl From<InvalidLength> for Bip39Error {
    fn from(error: InvalidLength) -> Self {
        Bip39Error::HmacError(error)
    }
}

impl From<hex::FromHexError> for Bip39Error {
    fn from(error: hex::FromHexError) -> Self {
        Bip39Error::InvalidHex(error)
    }
}
