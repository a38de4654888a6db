/// The 29 symbols every page is written in, in digit order.
///
/// Digit `0` is `'a'`, digit `25` is `'z'`, then space, comma and period.
pub const SYMBOLS: [char; 29] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', ' ', ',', '.',
];

/// Radix of the page alphabet.
pub const BASE: u32 = SYMBOLS.len() as u32;

/// The fixed page alphabet. Changing the symbol order changes every handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Alphabet;

impl Alphabet {
    /// Returns the radix of the alphabet (always 29).
    pub fn base(&self) -> u32 {
        BASE
    }

    /// Returns the symbols in digit order.
    pub fn symbols(&self) -> &'static [char] {
        &SYMBOLS
    }

    /// Encodes a digit (0 to 28) as a character.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: u32) -> Option<char> {
        SYMBOLS.get(digit as usize).copied()
    }

    /// Decodes a character back to its digit value.
    ///
    /// Returns `None` if the character is not in the alphabet.
    pub fn decode_char(&self, c: char) -> Option<u32> {
        match c {
            'a'..='z' => Some(c as u32 - 'a' as u32),
            ' ' => Some(26),
            ',' => Some(27),
            '.' => Some(28),
            _ => None,
        }
    }

    /// Returns the position and value of the first character outside the alphabet.
    pub fn first_invalid(&self, text: &str) -> Option<(usize, char)> {
        text.chars()
            .enumerate()
            .find(|&(_, c)| self.decode_char(c).is_none())
    }
}
