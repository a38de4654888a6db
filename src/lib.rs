mod core;
mod encoders;
mod library;

pub mod convenience;
pub mod prelude;

pub use crate::core::alphabet::{Alphabet, BASE, SYMBOLS};
pub use crate::core::config::{ConfigOverrides, DisplaySettings, LibraryConfig, SearchSettings};
pub use crate::encoders::algorithms::{
    DecodeError, EncodeError, LinkError,
    filler::{self, Filler},
    lcg::{self, Lcg},
    page::{self, PAGE_LENGTH},
    position::{self, PAGES, PAGES_PER_WALL, SHELVES, VOLUMES},
    radix36,
    scramble::Scrambler,
};
pub use crate::library::{Coordinate, Decoded, Encoded, Library};

/// Splices `snippet` into the page at `coord`, starting at `offset`, and names the page.
///
/// # Example
/// ```
/// use babel_addr::{Coordinate, decode, encode};
///
/// let coord = Coordinate::new(2, 3, 7, 133);
/// let encoded = encode("here is some text", &coord, 1000).unwrap();
/// let decoded = decode(&encoded.handle).unwrap();
/// assert_eq!(decoded.coordinate, coord);
/// assert_eq!(decoded.page_text, encoded.page_text);
/// ```
pub fn encode(snippet: &str, coord: &Coordinate, offset: usize) -> Result<Encoded, EncodeError> {
    Library::standard().encode(snippet, coord, offset)
}

/// Recovers the coordinate and full page text named by a handle.
pub fn decode(handle: &str) -> Result<Decoded, DecodeError> {
    Library::standard().decode(handle)
}
