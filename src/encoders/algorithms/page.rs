use super::errors::EncodeError;
use crate::core::alphabet::{Alphabet, BASE};
use num_bigint::BigUint;

/// Characters on every page.
pub const PAGE_LENGTH: usize = 3200;

/// `29^3200`, one more than the largest page number.
pub fn page_modulus() -> BigUint {
    BigUint::from(BASE).pow(PAGE_LENGTH as u32)
}

/// Reads a page as a base-29 number, most significant character first.
pub fn to_number(page: &str) -> Result<BigUint, EncodeError> {
    let alphabet = Alphabet;
    let mut digits = Vec::with_capacity(PAGE_LENGTH);

    for (position, c) in page.chars().enumerate() {
        let digit = alphabet
            .decode_char(c)
            .ok_or_else(|| EncodeError::invalid_character(c, position, page))?;
        digits.push(digit as u8);
    }

    if digits.len() != PAGE_LENGTH {
        return Err(EncodeError::InvalidLength {
            actual: digits.len(),
            expected: PAGE_LENGTH,
        });
    }

    // Every digit is below the radix, so this cannot fail.
    BigUint::from_radix_be(&digits, BASE).ok_or(EncodeError::InvalidLength {
        actual: digits.len(),
        expected: PAGE_LENGTH,
    })
}

/// Writes the low 3200 base-29 digits of `n` as a page.
///
/// Short numbers are left-padded with `'a'` (digit zero). Digits above the 3200th are
/// dropped, so callers must keep `n` below [`page_modulus`].
pub fn from_number(n: &BigUint) -> String {
    let alphabet = Alphabet;
    let mut digits = n.to_radix_le(BASE);
    digits.resize(PAGE_LENGTH, 0);

    digits
        .iter()
        .rev()
        .map(|&d| alphabet.encode_digit(u32::from(d)).unwrap_or('a'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::algorithms::{filler, lcg::Lcg};
    use num_traits::{One, Zero};

    #[test]
    fn test_all_a_is_zero() {
        let page = "a".repeat(PAGE_LENGTH);
        assert!(to_number(&page).unwrap().is_zero());
        assert_eq!(from_number(&BigUint::zero()), page);
    }

    #[test]
    fn test_last_character_is_least_significant() {
        let mut page = "a".repeat(PAGE_LENGTH - 1);
        page.push('c');
        assert_eq!(to_number(&page).unwrap(), BigUint::from(2u32));

        let mut page = String::from("b");
        page.push_str(&"a".repeat(PAGE_LENGTH - 1));
        assert_eq!(
            to_number(&page).unwrap(),
            BigUint::from(BASE).pow(PAGE_LENGTH as u32 - 1)
        );
    }

    #[test]
    fn test_all_periods_is_max() {
        let page = ".".repeat(PAGE_LENGTH);
        assert_eq!(to_number(&page).unwrap(), page_modulus() - 1u32);
    }

    #[test]
    fn test_filler_page_round_trips() {
        let lcg = Lcg::standard();
        let page = filler::generate(&lcg, &BigUint::from(123_456u32), PAGE_LENGTH);
        let n = to_number(&page).unwrap();
        assert!(n < page_modulus());
        assert_eq!(from_number(&n), page);
    }

    #[test]
    fn test_padding_on_most_significant_side() {
        let page = from_number(&BigUint::from(28u32 * 29 + 1));
        assert_eq!(page.chars().count(), PAGE_LENGTH);
        assert!(page.ends_with("a.b"));
        assert!(page[..PAGE_LENGTH - 2].chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_excess_digits_are_dropped() {
        let n = page_modulus() + BigUint::one();
        assert_eq!(from_number(&n), from_number(&BigUint::one()));
    }

    #[test]
    fn test_wrong_length_rejected() {
        let short = "a".repeat(PAGE_LENGTH - 1);
        assert_eq!(
            to_number(&short),
            Err(EncodeError::InvalidLength {
                actual: PAGE_LENGTH - 1,
                expected: PAGE_LENGTH,
            })
        );
        let long = "a".repeat(PAGE_LENGTH + 1);
        assert!(matches!(
            to_number(&long),
            Err(EncodeError::InvalidLength { actual: 3201, .. })
        ));
    }

    #[test]
    fn test_foreign_character_rejected() {
        let mut page = "a".repeat(10);
        page.push('Q');
        page.push_str(&"a".repeat(PAGE_LENGTH - 11));
        assert!(matches!(
            to_number(&page),
            Err(EncodeError::InvalidCharacter {
                char: 'Q',
                position: 10,
                ..
            })
        ));
    }
}
