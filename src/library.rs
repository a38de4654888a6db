//! The encode/decode pipelines.
//!
//! A page's handle is built in layers:
//!
//! 1. the coordinate becomes a position number (mixed radix 420/32/5),
//! 2. the position number seeds the filler generator,
//! 3. the snippet is spliced into the filler at the requested offset,
//! 4. the page is read as a base-29 number,
//! 5. position and page numbers are joined and scrambled with the reversible LCG,
//! 6. the result is written in base 36.
//!
//! Decoding runs the same layers backwards.

use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::{
    errors::{DecodeError, EncodeError},
    filler,
    lcg::Lcg,
    page::{self, PAGE_LENGTH},
    position::{self, PAGES, PAGES_PER_WALL, SHELVES, VOLUMES},
    radix36,
    scramble::Scrambler,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static STANDARD: LazyLock<Library> = LazyLock::new(|| Library::new(Lcg::standard()));

/// Address of one page: wall, shelf, volume and page within the volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub wall: u64,
    /// `0..5`
    pub shelf: u32,
    /// `0..32`
    pub volume: u32,
    /// `0..420`
    pub page: u32,
}

impl Coordinate {
    pub fn new(wall: u64, shelf: u32, volume: u32, page: u32) -> Self {
        Self {
            wall,
            shelf,
            volume,
            page,
        }
    }

    /// Checks shelf, volume and page against their ranges.
    ///
    /// The wall is limited by the library's capacity instead; see [`Library::safe_walls`].
    pub fn validate(&self) -> Result<(), EncodeError> {
        if self.shelf >= SHELVES {
            return Err(EncodeError::out_of_range("shelf", self.shelf, SHELVES));
        }
        if self.volume >= VOLUMES {
            return Err(EncodeError::out_of_range("volume", self.volume, VOLUMES));
        }
        if self.page >= PAGES {
            return Err(EncodeError::out_of_range("page", self.page, PAGES));
        }
        Ok(())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wall: {}, Shelf: {}, Volume: {}, Page: {}",
            self.wall, self.shelf, self.volume, self.page
        )
    }
}

/// Result of encoding a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encoded {
    /// Base-36 handle naming the page
    pub handle: String,
    pub coordinate: Coordinate,
    /// Where the snippet starts on the page, in characters
    pub offset: usize,
    pub page_text: String,
}

/// Result of decoding a handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub coordinate: Coordinate,
    pub page_text: String,
}

impl Decoded {
    /// Every offset at which `snippet` occurs on the page, overlapping matches included.
    ///
    /// The page does not record where a snippet was spliced in, so this may also report
    /// chance occurrences in the filler.
    pub fn find(&self, snippet: &str) -> Vec<usize> {
        if snippet.is_empty() || snippet.len() > self.page_text.len() {
            return Vec::new();
        }
        let page = self.page_text.as_bytes();
        let needle = snippet.as_bytes();
        page.windows(needle.len())
            .enumerate()
            .filter(|(_, w)| *w == needle)
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether `snippet` sits at exactly `offset`.
    pub fn contains_at(&self, snippet: &str, offset: usize) -> bool {
        self.page_text
            .get(offset..)
            .is_some_and(|rest| rest.starts_with(snippet))
    }
}

/// The arithmetic behind every handle.
///
/// Holds the precomputed constants (the LCG, its inverse multiplier and `29^3200`).
/// All operations are pure; a `Library` can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Library {
    scrambler: Scrambler,
}

impl Library {
    pub fn new(lcg: Lcg) -> Self {
        Self {
            scrambler: Scrambler::new(lcg),
        }
    }

    /// The shared standard library, built on first use.
    pub fn standard() -> &'static Library {
        &STANDARD
    }

    pub fn scrambler(&self) -> &Scrambler {
        &self.scrambler
    }

    /// Largest position number for which every page round-trips.
    pub fn max_position(&self) -> u64 {
        self.scrambler.capacity().saturating_sub(1)
    }

    /// Number of walls (starting at 0) on which every page round-trips.
    pub fn safe_walls(&self) -> u64 {
        self.scrambler.capacity() / PAGES_PER_WALL
    }

    /// The filler text of a coordinate, before any snippet is spliced in.
    pub fn filler(&self, coord: &Coordinate) -> String {
        let seed = position::encode(coord);
        filler::generate(self.scrambler.lcg(), &seed, PAGE_LENGTH)
    }

    /// Splices `snippet` into the filler of `coord` at `offset` and names the page.
    pub fn encode(
        &self,
        snippet: &str,
        coord: &Coordinate,
        offset: usize,
    ) -> Result<Encoded, EncodeError> {
        coord.validate()?;

        if let Some((position, c)) = Alphabet.first_invalid(snippet) {
            return Err(EncodeError::invalid_character(c, position, snippet));
        }

        // The alphabet is ASCII, so byte length equals character count from here on.
        let length = snippet.len();
        match offset.checked_add(length) {
            Some(end) if end <= PAGE_LENGTH => {}
            _ => return Err(EncodeError::SnippetTooLong { offset, length }),
        }

        let mut page_text = self.filler(coord);
        page_text.replace_range(offset..offset + length, snippet);

        let handle = self.encode_page(&page_text, coord)?;
        log::debug!(
            "encoded {} chars at offset {} on {} -> {} digit handle",
            length,
            offset,
            coord,
            handle.len()
        );

        Ok(Encoded {
            handle,
            coordinate: *coord,
            offset,
            page_text,
        })
    }

    /// Names an arbitrary full page at `coord`.
    ///
    /// `page_text` must be exactly 3200 characters over the page alphabet.
    pub fn encode_page(&self, page_text: &str, coord: &Coordinate) -> Result<String, EncodeError> {
        coord.validate()?;

        let page_number = page::to_number(page_text)?;
        let position = position::encode(coord);
        let combined = self
            .scrambler
            .combine(&position, &page_number)
            .ok_or(EncodeError::Overflow {
                wall: coord.wall,
                safe_walls: self.safe_walls(),
            })?;

        Ok(radix36::encode(&self.scrambler.scramble(&combined)))
    }

    /// Recovers the coordinate and page text a handle names.
    pub fn decode(&self, handle: &str) -> Result<Decoded, DecodeError> {
        let scrambled = radix36::decode(handle)?;

        let modulus = self.scrambler.lcg().modulus();
        if &scrambled >= modulus {
            return Err(DecodeError::OutOfRange {
                bits: scrambled.bits(),
                limit_bits: self.scrambler.lcg().bits(),
            });
        }

        let combined = self.scrambler.unscramble(&scrambled);
        let (position, page_number) = self.scrambler.split(&combined);

        // combined < 2^15565 keeps the position far below u64::MAX.
        let coordinate = position::decode(&position).ok_or(DecodeError::OutOfRange {
            bits: scrambled.bits(),
            limit_bits: self.scrambler.lcg().bits(),
        })?;
        let page_text = page::from_number(&page_number);

        log::debug!("decoded {} digit handle -> {}", handle.len(), coordinate);

        Ok(Decoded {
            coordinate,
            page_text,
        })
    }
}
