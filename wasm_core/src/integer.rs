//! Arbitrary-precision integer engine: one non-negative magnitude rendered in
//! base 10, 2 and 16 with no upper bound on digit count.

use num_bigint::BigUint;
use num_traits::Num;

use crate::error::{FieldError, HexReason};
use crate::field::Engine;

/// Non-negative integer of unbounded magnitude.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnboundedInteger(BigUint);

impl UnboundedInteger {
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl From<BigUint> for UnboundedInteger {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<u64> for UnboundedInteger {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

pub fn from_decimal(input: &str) -> Result<UnboundedInteger, FieldError> {
    parse_digits(input, 10, |b| b.is_ascii_digit()).ok_or(FieldError::InvalidDecimal)
}

pub fn from_binary(input: &str) -> Result<UnboundedInteger, FieldError> {
    parse_digits(input, 2, |b| b == b'0' || b == b'1').ok_or(FieldError::InvalidBinary)
}

pub fn from_hex(input: &str) -> Result<UnboundedInteger, FieldError> {
    parse_digits(input, 16, |b| b.is_ascii_hexdigit()).ok_or(FieldError::InvalidHex {
        engine: Engine::Number,
        reason: HexReason::BadAlphabet,
    })
}

pub fn to_decimal(value: &UnboundedInteger) -> String {
    value.0.to_str_radix(10)
}

pub fn to_binary(value: &UnboundedInteger) -> String {
    value.0.to_str_radix(2)
}

/// Uppercase, no `0x` prefix and no zero padding.
pub fn to_hex(value: &UnboundedInteger) -> String {
    value.0.to_str_radix(16).to_uppercase()
}

// BigUint's own parser tolerates a leading '+' and '_' separators, so the
// digit set is checked up front and only plain digit runs reach it.
fn parse_digits(input: &str, radix: u32, is_digit: impl Fn(u8) -> bool) -> Option<UnboundedInteger> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(is_digit) {
        return None;
    }
    BigUint::from_str_radix(trimmed, radix)
        .ok()
        .map(UnboundedInteger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_255_renders_ff_and_eight_ones() {
        let value = from_decimal("255").unwrap();
        assert_eq!(to_hex(&value), "FF");
        assert_eq!(to_binary(&value), "11111111");
        assert_eq!(to_decimal(&value), "255");
    }

    #[test]
    fn zero_renders_as_single_digit() {
        let value = from_binary("0000").unwrap();
        assert_eq!(value, UnboundedInteger::default());
        assert_eq!(to_decimal(&value), "0");
        assert_eq!(to_binary(&value), "0");
        assert_eq!(to_hex(&value), "0");
    }

    #[test]
    fn rejects_signs_prefixes_and_separators() {
        for input in ["-1", "+1", "1_000", "12a", "", "   ", "1 2"] {
            assert_eq!(from_decimal(input), Err(FieldError::InvalidDecimal), "input {input:?}");
        }
        for input in ["0b101", "102", "-1", "1_0"] {
            assert_eq!(from_binary(input), Err(FieldError::InvalidBinary), "input {input:?}");
        }
        for input in ["0xFF", "FG", "+A", "F_F"] {
            assert_eq!(
                from_hex(input),
                Err(FieldError::InvalidHex {
                    engine: Engine::Number,
                    reason: HexReason::BadAlphabet
                }),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(to_hex(&from_decimal(" 16 ").unwrap()), "10");
    }

    #[test]
    fn hex_input_is_case_insensitive_output_uppercase() {
        let value = from_hex("deadBEEF").unwrap();
        assert_eq!(to_hex(&value), "DEADBEEF");
        assert_eq!(to_decimal(&value), "3735928559");
    }

    #[test]
    fn magnitudes_beyond_u128_are_exact() {
        // 2^200
        let binary = format!("1{}", "0".repeat(200));
        let value = from_binary(&binary).unwrap();
        assert_eq!(
            to_decimal(&value),
            "1606938044258990275541962092341162602522202993782792835301376"
        );
        assert_eq!(to_hex(&value), format!("1{}", "0".repeat(50)));
        assert_eq!(from_decimal(&to_decimal(&value)).unwrap(), value);
    }
}
