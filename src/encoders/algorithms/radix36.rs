use super::errors::DecodeError;
use num_bigint::BigUint;

/// Handle digits in value order.
pub const DIGITS: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

const RADIX: u32 = 36;

/// Renders `n` in base 36, most significant digit first. Zero is `"0"`.
pub fn encode(n: &BigUint) -> String {
    n.to_str_radix(RADIX)
}

/// Parses a base-36 handle.
///
/// Only lowercase `0-9a-z` is accepted; signs, separators and uppercase letters are errors.
pub fn decode(encoded: &str) -> Result<BigUint, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let mut digits = Vec::with_capacity(encoded.len());
    for (position, c) in encoded.chars().enumerate() {
        let digit = match c {
            '0'..='9' => c as u8 - b'0',
            'a'..='z' => c as u8 - b'a' + 10,
            _ => return Err(DecodeError::invalid_character(c, position, encoded, "0-9a-z")),
        };
        digits.push(digit);
    }

    BigUint::from_radix_be(&digits, RADIX).ok_or(DecodeError::EmptyInput)
}
