//! # Base64 Encoding/Decoding
//!
//! Utilities for base64 encoding and decoding.
//!
//! Encoding uses the standard padded alphabet (what HTTP Basic credentials
//! expect). Decoding accepts base64url input by translating it to the standard
//! alphabet and restoring the padding first, the way token payload segments
//! are usually handled by clients.

use base64::{
    alphabet,
    engine::{general_purpose, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};

/// Standard alphabet, padding required, trailing bits tolerated.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Encode bytes to a standard, padded base64 string.
pub fn b64_encode(content: impl AsRef<[u8]>) -> String {
    general_purpose::STANDARD.encode(content)
}

/// Decode a base64url segment to bytes.
///
/// `-` becomes `+`, `_` becomes `/`, and `=` is appended until the length is a
/// multiple of 4 before decoding with the standard alphabet.
pub fn b64u_decode_lenient(b64u: &str) -> Result<Vec<u8>, Error> {
    let mut standard: String = b64u
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let padding = (4 - standard.len() % 4) % 4;
    standard.extend(std::iter::repeat('=').take(padding));

    LENIENT
        .decode(standard.as_bytes())
        .map_err(|_| Error::FailToB64uDecode)
}

/// Decode a base64url segment to a UTF-8 string.
pub fn b64u_decode_to_string(b64u: &str) -> Result<String, Error> {
    b64u_decode_lenient(b64u)
        .and_then(|bytes| String::from_utf8(bytes).map_err(|_| Error::FailToB64uDecode))
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    FailToB64uDecode,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
