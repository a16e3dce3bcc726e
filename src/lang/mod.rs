/*!
# Rust Language Module

This Rust module turns a ZX Spectrum BASIC listing into tokenized program
lines: keywords become single byte tokens and every numeric literal is
followed by its binary value.

*/

#[macro_use]
mod error;
mod cursor;
mod keyword;
mod number;
mod transcode;

pub use error::Error;
pub use error::ErrorCode;
pub use keyword::{KeywordTable, FIRST_TOKEN, SPECTRUM_KEYWORDS};
pub use number::{encode_float, encode_integer, encode_value, NUMBER_MARKER};
pub use transcode::{Transcoder, LINE_END};

/// Tokenize a listing with the standard Spectrum keyword table.
pub fn tokenize(source: &[u8]) -> Result<Vec<u8>, Error> {
    Transcoder::new(&KeywordTable::spectrum()).transcode(source)
}
