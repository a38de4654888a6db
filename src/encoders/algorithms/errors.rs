use std::fmt;

/// Errors that can occur while building a page and its handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The snippet or page text contains a character not in the page alphabet
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
    },
    /// A coordinate or offset is outside its declared range
    OutOfRange {
        field: &'static str,
        value: u64,
        limit: u64,
    },
    /// The snippet does not fit on the page at the requested offset
    SnippetTooLong { offset: usize, length: usize },
    /// Page text must be exactly one page long
    InvalidLength { actual: usize, expected: usize },
    /// The coordinates address a page beyond the scrambler's modulus, so the
    /// handle could not be decoded back to the same page
    Overflow { wall: u64, safe_walls: u64 },
}

impl EncodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str) -> Self {
        EncodeError::InvalidCharacter {
            char: c,
            position,
            input: truncate(input),
        }
    }

    pub fn out_of_range(field: &'static str, value: impl Into<u64>, limit: impl Into<u64>) -> Self {
        EncodeError::OutOfRange {
            field,
            value: value.into(),
            limit: limit.into(),
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = Style::detect();

        match self {
            EncodeError::InvalidCharacter {
                char: c,
                position,
                input,
            } => {
                style.error(f, &format!("invalid character {:?} at position {}", c, position))?;
                writeln!(f)?;
                write_caret(f, &style, input, *position)?;
                style.hint(f, "pages use only a-z, space, comma and period")
            }
            EncodeError::OutOfRange {
                field,
                value,
                limit,
            } => {
                style.error(
                    f,
                    &format!("{} {} is out of range (must be below {})", field, value, limit),
                )?;
                Ok(())
            }
            EncodeError::SnippetTooLong { offset, length } => {
                style.error(f, "snippet does not fit on the page")?;
                writeln!(f)?;
                writeln!(
                    f,
                    "  offset {} + length {} = {} characters, page holds {}",
                    offset,
                    length,
                    offset.saturating_add(*length),
                    crate::PAGE_LENGTH
                )?;
                writeln!(f)?;
                style.hint(f, "lower the offset or shorten the snippet")
            }
            EncodeError::InvalidLength { actual, expected } => {
                style.error(f, "invalid page length")?;
                writeln!(f)?;
                writeln!(f, "  page is {} characters, expected {}", actual, expected)?;
                Ok(())
            }
            EncodeError::Overflow { wall, safe_walls } => {
                style.error(f, &format!("wall {} lies beyond the library", wall))?;
                writeln!(f)?;
                style.hint(
                    f,
                    &format!(
                        "every page on walls 0 to {} round-trips; pick a lower wall",
                        safe_walls.saturating_sub(1)
                    ),
                )
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Errors that can occur while decoding a handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The handle contains a character outside `0-9a-z`
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
        valid_chars: String,
    },
    /// The handle is empty
    EmptyInput,
    /// The handle names a number no page encodes to
    OutOfRange { bits: u64, limit_bits: u64 },
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: truncate(input),
            valid_chars: valid_chars.to_string(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = Style::detect();

        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
                valid_chars,
            } => {
                style.error(f, &format!("invalid character {:?} at position {}", c, position))?;
                writeln!(f)?;
                write_caret(f, &style, input, *position)?;
                style.hint(f, &format!("valid characters: {}", valid_chars))
            }
            DecodeError::EmptyInput => style.error(f, "cannot decode empty handle"),
            DecodeError::OutOfRange { bits, limit_bits } => {
                style.error(f, "handle is too large")?;
                writeln!(f)?;
                writeln!(
                    f,
                    "  handle value has {} bits, handles are below 2^{}",
                    bits, limit_bits
                )?;
                writeln!(f)?;
                style.hint(f, "check the handle was copied completely and unchanged")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors that can occur while reading or opening a share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// The link does not follow `handle#wall-shelf-volume-page#offset$snippet`
    Malformed { part: &'static str, input: String },
    /// The handle itself failed to decode
    Decode(DecodeError),
    /// The link was built with a snippet that cannot be placed on a page
    Encode(EncodeError),
    /// The coordinates in the link disagree with the ones in the handle
    CoordinateMismatch { link: String, handle: String },
    /// The snippet is not at the offset the link claims
    SnippetMismatch { offset: usize },
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = Style::detect();

        match self {
            LinkError::Malformed { part, input } => {
                style.error(f, &format!("malformed {} in share link", part))?;
                writeln!(f)?;
                writeln!(f, "  {}", truncate(input))?;
                writeln!(f)?;
                style.hint(f, "links look like handle#wall-shelf-volume-page#offset$snippet")
            }
            LinkError::Decode(e) => fmt::Display::fmt(e, f),
            LinkError::Encode(e) => fmt::Display::fmt(e, f),
            LinkError::CoordinateMismatch { link, handle } => {
                style.error(f, "share link coordinates do not match its handle")?;
                writeln!(f)?;
                writeln!(f, "  link:   {}", link)?;
                write!(f, "  handle: {}", handle)
            }
            LinkError::SnippetMismatch { offset } => style.error(
                f,
                &format!("snippet in share link is not on the page at offset {}", offset),
            ),
        }
    }
}

impl std::error::Error for LinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinkError::Decode(e) => Some(e),
            LinkError::Encode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DecodeError> for LinkError {
    fn from(e: DecodeError) -> Self {
        LinkError::Decode(e)
    }
}

impl From<EncodeError> for LinkError {
    fn from(e: EncodeError) -> Self {
        LinkError::Encode(e)
    }
}

/// Truncate long inputs for display.
fn truncate(input: &str) -> String {
    if input.chars().count() > 60 {
        format!("{}...", input.chars().take(60).collect::<String>())
    } else {
        input.to_string()
    }
}

/// Show input with a caret under the offending character.
fn write_caret(
    f: &mut fmt::Formatter<'_>,
    style: &Style,
    input: &str,
    position: usize,
) -> fmt::Result {
    writeln!(f, "  {}", input)?;
    // Past the truncation point the caret would point at nothing.
    if position < 60 {
        write!(f, "  {}", " ".repeat(position))?;
        if style.color {
            writeln!(f, "\x1b[1;31m^\x1b[0m")?;
        } else {
            writeln!(f, "^")?;
        }
    }
    writeln!(f)
}

struct Style {
    color: bool,
}

impl Style {
    fn detect() -> Self {
        Self {
            color: should_use_color(),
        }
    }

    fn error(&self, f: &mut fmt::Formatter<'_>, msg: &str) -> fmt::Result {
        if self.color {
            write!(f, "\x1b[1;31merror:\x1b[0m {}", msg)
        } else {
            write!(f, "error: {}", msg)
        }
    }

    fn hint(&self, f: &mut fmt::Formatter<'_>, msg: &str) -> fmt::Result {
        if self.color {
            write!(f, "\x1b[1;36mhint:\x1b[0m {}", msg)
        } else {
            write!(f, "hint: {}", msg)
        }
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_color() {
        // Unsafe: environment variable access (not thread-safe). Every test that
        // touches it sets the same value and none removes it.
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
    }

    #[test]
    fn test_invalid_character_display() {
        no_color();
        let err = EncodeError::invalid_character('X', 3, "abcXyz");
        let display = format!("{}", err);

        assert!(display.contains("invalid character 'X' at position 3"));
        assert!(display.contains("abcXyz"));
        assert!(display.contains("   ^"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn test_snippet_too_long_display() {
        no_color();
        let err = EncodeError::SnippetTooLong {
            offset: 3000,
            length: 300,
        };
        let display = format!("{}", err);

        assert!(display.contains("does not fit"));
        assert!(display.contains("3300 characters, page holds 3200"));
    }

    #[test]
    fn test_snippet_too_long_display_at_max_offset() {
        no_color();
        let err = EncodeError::SnippetTooLong {
            offset: usize::MAX,
            length: 3,
        };
        let display = format!("{}", err);

        assert!(display.contains("does not fit"));
        assert!(display.contains(&format!("offset {} + length 3", usize::MAX)));
    }

    #[test]
    fn test_out_of_range_display() {
        no_color();
        let err = EncodeError::out_of_range("shelf", 7u32, 5u32);
        assert!(format!("{}", err).contains("shelf 7 is out of range (must be below 5)"));
    }

    #[test]
    fn test_decode_invalid_character_display() {
        no_color();
        let err = DecodeError::invalid_character('!', 0, "!!!", "0-9a-z");
        let display = format!("{}", err);

        assert!(display.contains("invalid character '!' at position 0"));
        assert!(display.contains("valid characters: 0-9a-z"));
    }

    #[test]
    fn test_long_input_is_truncated() {
        no_color();
        let input = "q".repeat(200);
        let err = DecodeError::invalid_character('!', 150, &input, "0-9a-z");
        if let DecodeError::InvalidCharacter { input, .. } = &err {
            assert_eq!(input.len(), 63);
            assert!(input.ends_with("..."));
        } else {
            unreachable!();
        }
        assert!(!format!("{}", err).contains('^'));
    }
}
