//! Diagnostics produced while parsing user input.
//!
//! Every error knows which field produced it and carries a stable `code` that a
//! host can map to its own localized message; `Display` gives an English default.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::field::{Engine, Field};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base64Reason {
    BadAlphabet,
    BadPadding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexReason {
    OddLength,
    BadAlphabet,
}

impl fmt::Display for Base64Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base64Reason::BadAlphabet => {
                f.write_str("only A-Z, a-z, 0-9, '+', '/' and '=' are allowed")
            }
            Base64Reason::BadPadding => {
                f.write_str("length must be a multiple of 4 with '=' only at the end")
            }
        }
    }
}

impl fmt::Display for HexReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexReason::OddLength => f.write_str("an even number of digits is required"),
            HexReason::BadAlphabet => f.write_str("only 0-9 and A-F are allowed"),
        }
    }
}

/// A rejected edit. Recovered locally: the field keeps the raw input and its
/// siblings keep their last good values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("invalid Base64 string: {reason}")]
    InvalidBase64 { reason: Base64Reason },
    #[error("invalid hex string: {reason}")]
    InvalidHex { engine: Engine, reason: HexReason },
    #[error("invalid decimal number: only digits 0-9 are allowed")]
    InvalidDecimal,
    #[error("invalid binary number: only digits 0-1 are allowed")]
    InvalidBinary,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::InvalidBase64 { .. } => Field::Base64,
            FieldError::InvalidHex {
                engine: Engine::Bytes,
                ..
            } => Field::HexBytes,
            FieldError::InvalidHex {
                engine: Engine::Number,
                ..
            } => Field::Hex,
            FieldError::InvalidDecimal => Field::Decimal,
            FieldError::InvalidBinary => Field::Binary,
        }
    }

    pub fn engine(&self) -> Engine {
        match self {
            FieldError::InvalidBase64 { .. } => Engine::Bytes,
            FieldError::InvalidHex { engine, .. } => *engine,
            FieldError::InvalidDecimal | FieldError::InvalidBinary => Engine::Number,
        }
    }

    /// Stable message key, e.g. `base64.bad_padding`.
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::InvalidBase64 {
                reason: Base64Reason::BadAlphabet,
            } => "base64.bad_alphabet",
            FieldError::InvalidBase64 {
                reason: Base64Reason::BadPadding,
            } => "base64.bad_padding",
            FieldError::InvalidHex {
                engine: Engine::Bytes,
                reason: HexReason::BadAlphabet,
            } => "hex_bytes.bad_alphabet",
            FieldError::InvalidHex {
                engine: Engine::Bytes,
                reason: HexReason::OddLength,
            } => "hex_bytes.odd_length",
            FieldError::InvalidHex {
                engine: Engine::Number,
                reason: HexReason::BadAlphabet,
            } => "hex.bad_alphabet",
            FieldError::InvalidHex {
                engine: Engine::Number,
                reason: HexReason::OddLength,
            } => "hex.odd_length",
            FieldError::InvalidDecimal => "decimal.invalid",
            FieldError::InvalidBinary => "binary.invalid",
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            field: self.field(),
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Non-fatal: only the text view is affected, every other view stays valid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("bytes are not valid UTF-8 (valid up to byte {valid_up_to})")]
    Utf8DecodeFailure { valid_up_to: usize },
}

impl DecodeError {
    pub fn code(&self) -> &'static str {
        match self {
            DecodeError::Utf8DecodeFailure { .. } => "text.utf8",
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            field: Field::Text,
            code: self.code(),
            message: self.to_string(),
        }
    }
}

impl From<std::str::Utf8Error> for DecodeError {
    fn from(err: std::str::Utf8Error) -> Self {
        DecodeError::Utf8DecodeFailure {
            valid_up_to: err.valid_up_to(),
        }
    }
}

/// Serialized shape handed to the host for display.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub field: Field,
    pub code: &'static str,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_errors_are_tagged_by_engine() {
        let bytes = FieldError::InvalidHex {
            engine: Engine::Bytes,
            reason: HexReason::OddLength,
        };
        let number = FieldError::InvalidHex {
            engine: Engine::Number,
            reason: HexReason::BadAlphabet,
        };
        assert_eq!(bytes.field(), Field::HexBytes);
        assert_eq!(bytes.code(), "hex_bytes.odd_length");
        assert_eq!(number.field(), Field::Hex);
        assert_eq!(number.code(), "hex.bad_alphabet");
    }

    #[test]
    fn report_carries_field_code_and_message() {
        let report = FieldError::InvalidBase64 {
            reason: Base64Reason::BadPadding,
        }
        .report();
        assert_eq!(report.field, Field::Base64);
        assert_eq!(report.code, "base64.bad_padding");
        assert!(report.message.contains("multiple of 4"), "msg: {}", report.message);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["field"], "base64");
        assert_eq!(json["code"], "base64.bad_padding");
    }

    #[test]
    fn utf8_failure_reports_offset() {
        let err = DecodeError::from(std::str::from_utf8(&[0x41, 0xFF]).unwrap_err());
        assert_eq!(err, DecodeError::Utf8DecodeFailure { valid_up_to: 1 });
        assert_eq!(err.report().field, Field::Text);
        assert_eq!(err.code(), "text.utf8");
    }
}
