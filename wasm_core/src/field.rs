use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every surface the converter displays, editable or not.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Text,
    Base64,
    HexBytes,
    Ascii,
    Decimal,
    Binary,
    Hex,
}

/// Which sub-engine parses a field's input.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Bytes,
    Number,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Text,
        Field::Base64,
        Field::HexBytes,
        Field::Ascii,
        Field::Decimal,
        Field::Binary,
        Field::Hex,
    ];

    /// Fields the byte engine accepts input on.
    pub const BYTE_INPUTS: [Field; 3] = [Field::Text, Field::Base64, Field::HexBytes];

    /// Fields the integer engine accepts input on. In byte mode they carry per-byte views instead.
    pub const NUMBER_INPUTS: [Field; 3] = [Field::Decimal, Field::Binary, Field::Hex];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Text => "text",
            Field::Base64 => "base64",
            Field::HexBytes => "hexBytes",
            Field::Ascii => "ascii",
            Field::Decimal => "decimal",
            Field::Binary => "binary",
            Field::Hex => "hex",
        }
    }

    /// The engine that parses input typed into this field, `None` for pure views.
    pub fn input_engine(self) -> Option<Engine> {
        match self {
            Field::Text | Field::Base64 | Field::HexBytes => Some(Engine::Bytes),
            Field::Decimal | Field::Binary | Field::Hex => Some(Engine::Number),
            Field::Ascii => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "text" => Ok(Field::Text),
            "base64" => Ok(Field::Base64),
            "hexBytes" | "hex_bytes" => Ok(Field::HexBytes),
            "ascii" => Ok(Field::Ascii),
            "decimal" => Ok(Field::Decimal),
            "binary" => Ok(Field::Binary),
            "hex" => Ok(Field::Hex),
            other => Err(format!("unsupported field {}", other)),
        }
    }
}
