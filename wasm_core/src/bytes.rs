//! Byte representation engine: text, Base64 and hex-byte codecs around one
//! canonical byte sequence, plus the derived per-byte views.

use std::sync::Arc;

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, PAD, STANDARD};
use serde::Serialize;

use crate::error::{Base64Reason, DecodeError, FieldError, HexReason};
use crate::field::Engine as FieldEngine;
use crate::format::{ascii_char, byte_binary, byte_decimal, byte_hex, join_bytes, strip_whitespace};

// Browsers' atob ignores stray bits in the final symbol ("SGl=" decodes), so the decoder does too.
const BASE64_DECODER: GeneralPurpose =
    GeneralPurpose::new(&alphabet::STANDARD, PAD.with_decode_allow_trailing_bits(true));

/// Immutable, cheaply clonable byte buffer. Replaced wholesale on every parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ByteSequence(Arc<[u8]>);

impl ByteSequence {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ByteSequence {
    fn default() -> Self {
        Self(Arc::from(Vec::new()))
    }
}

impl From<Vec<u8>> for ByteSequence {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Arc::from(bytes))
    }
}

impl From<&[u8]> for ByteSequence {
    fn from(bytes: &[u8]) -> Self {
        Self(Arc::from(bytes))
    }
}

/// Read-only views with one entry per byte, space separated.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PerByteViews {
    pub decimal: String,
    pub binary: String,
    pub hex: String,
    pub ascii: String,
}

pub fn from_text(input: &str) -> ByteSequence {
    ByteSequence::from(input.as_bytes())
}

pub fn from_base64(input: &str) -> Result<ByteSequence, FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(ByteSequence::default());
    }
    if !trimmed.bytes().all(is_base64_symbol) {
        return Err(base64_error(Base64Reason::BadAlphabet));
    }
    if trimmed.len() % 4 != 0 {
        return Err(base64_error(Base64Reason::BadPadding));
    }
    let body = trimmed.trim_end_matches('=');
    if trimmed.len() - body.len() > 2 || body.contains('=') {
        return Err(base64_error(Base64Reason::BadPadding));
    }
    BASE64_DECODER
        .decode(trimmed.as_bytes())
        .map(ByteSequence::from)
        .map_err(|_| base64_error(Base64Reason::BadPadding))
}

pub fn from_hex_bytes(input: &str) -> Result<ByteSequence, FieldError> {
    let cleaned = strip_whitespace(input);
    if !cleaned.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(hex_error(HexReason::BadAlphabet));
    }
    if cleaned.len() % 2 != 0 {
        return Err(hex_error(HexReason::OddLength));
    }
    hex::decode(&cleaned)
        .map(ByteSequence::from)
        .map_err(|err| match err {
            hex::FromHexError::OddLength => hex_error(HexReason::OddLength),
            _ => hex_error(HexReason::BadAlphabet),
        })
}

/// Strict UTF-8 decoding; invalid sequences are reported rather than replaced.
pub fn to_text(bytes: &ByteSequence) -> Result<String, DecodeError> {
    let text = std::str::from_utf8(bytes.as_bytes())?;
    Ok(text.to_owned())
}

pub fn to_base64(bytes: &ByteSequence) -> String {
    STANDARD.encode(bytes.as_bytes())
}

pub fn to_hex_bytes(bytes: &ByteSequence) -> String {
    join_bytes(bytes.as_bytes(), byte_hex)
}

pub fn to_per_byte_views(bytes: &ByteSequence, ascii_placeholder: char) -> PerByteViews {
    let data = bytes.as_bytes();
    PerByteViews {
        decimal: join_bytes(data, byte_decimal),
        binary: join_bytes(data, byte_binary),
        hex: join_bytes(data, byte_hex),
        ascii: join_bytes(data, |b| ascii_char(b, ascii_placeholder).to_string()),
    }
}

fn is_base64_symbol(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'/' | b'=')
}

fn base64_error(reason: Base64Reason) -> FieldError {
    FieldError::InvalidBase64 { reason }
}

fn hex_error(reason: HexReason) -> FieldError {
    FieldError::InvalidHex {
        engine: FieldEngine::Bytes,
        reason,
    }
}
