//! Convenience helpers built on [`encode`](crate::encode) and [`decode`](crate::decode).
//!
//! Random search, share links in the `handle#wall-shelf-volume-page#offset$snippet`
//! format, and page wrapping for display.

use crate::{
    Coordinate, Decoded, EncodeError, Encoded, Library, LinkError, PAGE_LENGTH, PAGES, SHELVES,
    VOLUMES, decode, encode,
};
use rand::Rng;
use std::fmt;

/// Which parts of a search are pinned; everything left as `None` is sampled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub wall: Option<u64>,
    pub shelf: Option<u32>,
    pub volume: Option<u32>,
    pub page: Option<u32>,
    pub offset: Option<usize>,
    /// Walls are sampled from `[0, walls)`; at most [`Library::safe_walls`]
    pub walls: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            wall: None,
            shelf: None,
            volume: None,
            page: None,
            offset: None,
            walls: 4,
        }
    }
}

/// Places `snippet` on a randomly chosen page at a random offset.
///
/// The random source is supplied by the caller, so a seeded generator gives a
/// reproducible search. Unless the wall is pinned, `options.walls` above
/// [`Library::safe_walls`] is rejected up front.
///
/// # Example
/// ```
/// use babel_addr::convenience::{SearchOptions, search};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let found = search("a needle", &SearchOptions::default(), &mut rng).unwrap();
/// assert_eq!(&found.page_text[found.offset..found.offset + 8], "a needle");
/// ```
pub fn search<R: Rng + ?Sized>(
    snippet: &str,
    options: &SearchOptions,
    rng: &mut R,
) -> Result<Encoded, EncodeError> {
    let length = snippet.chars().count();
    if length > PAGE_LENGTH {
        return Err(EncodeError::SnippetTooLong {
            offset: options.offset.unwrap_or(0),
            length,
        });
    }
    if options.wall.is_none() {
        let safe_walls = Library::standard().safe_walls();
        if options.walls > safe_walls {
            return Err(EncodeError::out_of_range(
                "walls",
                options.walls,
                safe_walls + 1,
            ));
        }
    }

    let coord = Coordinate {
        wall: options
            .wall
            .unwrap_or_else(|| rng.random_range(0..options.walls.max(1))),
        shelf: options
            .shelf
            .unwrap_or_else(|| rng.random_range(0..SHELVES)),
        volume: options
            .volume
            .unwrap_or_else(|| rng.random_range(0..VOLUMES)),
        page: options.page.unwrap_or_else(|| rng.random_range(0..PAGES)),
    };
    let offset = options
        .offset
        .unwrap_or_else(|| rng.random_range(0..=PAGE_LENGTH - length));

    log::debug!("search placed snippet on {} at offset {}", coord, offset);
    encode(snippet, &coord, offset)
}

/// A shareable reference to a page.
///
/// Formats as `handle#wall-shelf-volume-page#offset$snippet`; the coordinate and
/// snippet parts are optional. In the snippet, space and comma are written `%20`
/// and `%2C`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub handle: String,
    pub coordinate: Option<Coordinate>,
    pub snippet: Option<(usize, String)>,
}

impl ShareLink {
    /// A link to an encoded page that also records the snippet and its offset.
    pub fn from_encoded(encoded: &Encoded, snippet: &str) -> Self {
        Self {
            handle: encoded.handle.clone(),
            coordinate: Some(encoded.coordinate),
            snippet: Some((encoded.offset, snippet.to_string())),
        }
    }

    /// Parses a link. Anything up to a leading `browse.html#` is ignored.
    pub fn parse(link: &str) -> Result<Self, LinkError> {
        let link = link.trim();
        let link = match link.find("browse.html#") {
            Some(i) => &link[i + "browse.html#".len()..],
            None => link,
        };

        let mut parts = link.splitn(3, '#');
        let handle = parts.next().unwrap_or_default();
        if handle.is_empty() {
            return Err(malformed("handle", link));
        }

        let coordinate = match parts.next() {
            Some(part) if !part.is_empty() => Some(parse_coordinate(part)?),
            _ => None,
        };

        let snippet = match parts.next() {
            Some(part) if !part.is_empty() => {
                let (offset, escaped) = part
                    .split_once('$')
                    .ok_or_else(|| malformed("snippet", part))?;
                let offset = offset
                    .parse::<usize>()
                    .map_err(|_| malformed("snippet offset", part))?;
                Some((offset, unescape(escaped)?))
            }
            _ => None,
        };

        Ok(Self {
            handle: handle.to_string(),
            coordinate,
            snippet,
        })
    }

    /// Decodes the handle and checks the link's coordinate and snippet against it.
    pub fn open(&self) -> Result<Decoded, LinkError> {
        let decoded = decode(&self.handle)?;

        if let Some(coord) = &self.coordinate
            && *coord != decoded.coordinate
        {
            return Err(LinkError::CoordinateMismatch {
                link: coord.to_string(),
                handle: decoded.coordinate.to_string(),
            });
        }

        if let Some((offset, snippet)) = &self.snippet
            && !decoded.contains_at(snippet, *offset)
        {
            return Err(LinkError::SnippetMismatch { offset: *offset });
        }

        Ok(decoded)
    }
}

impl fmt::Display for ShareLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.handle)?;
        match (&self.coordinate, &self.snippet) {
            (None, None) => Ok(()),
            (coord, snippet) => {
                if let Some(c) = coord {
                    write!(f, "#{}-{}-{}-{}", c.wall, c.shelf, c.volume, c.page)?;
                } else {
                    write!(f, "#")?;
                }
                if let Some((offset, text)) = snippet {
                    write!(f, "#{}${}", offset, escape(text))?;
                }
                Ok(())
            }
        }
    }
}

fn malformed(part: &'static str, input: &str) -> LinkError {
    LinkError::Malformed {
        part,
        input: input.to_string(),
    }
}

fn parse_coordinate(part: &str) -> Result<Coordinate, LinkError> {
    let fields: Vec<&str> = part.split('-').collect();
    let [wall, shelf, volume, page] = fields.as_slice() else {
        return Err(malformed("coordinates", part));
    };
    let bad = |_: std::num::ParseIntError| malformed("coordinates", part);
    Ok(Coordinate {
        wall: wall.parse().map_err(bad)?,
        shelf: shelf.parse().map_err(bad)?,
        volume: volume.parse().map_err(bad)?,
        page: page.parse().map_err(bad)?,
    })
}

fn escape(text: &str) -> String {
    text.replace(' ', "%20").replace(',', "%2C")
}

fn unescape(text: &str) -> Result<String, LinkError> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(i) = rest.find('%') {
        out.push_str(&rest[..i]);
        let code = rest.get(i + 1..i + 3).ok_or_else(|| malformed("snippet", text))?;
        match code.to_ascii_uppercase().as_str() {
            "20" => out.push(' '),
            "2C" => out.push(','),
            "2E" => out.push('.'),
            _ => return Err(malformed("snippet escape", text)),
        }
        rest = &rest[i + 3..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Breaks a page into lines of at most `width` characters. A width of 0 leaves the
/// page on one line.
pub fn wrap_page(page_text: &str, width: usize) -> Vec<&str> {
    if width == 0 || page_text.is_empty() {
        return vec![page_text];
    }
    let mut lines = Vec::with_capacity(page_text.len() / width + 1);
    let mut start = 0;
    for (count, (i, _)) in page_text.char_indices().enumerate() {
        if count > 0 && count % width == 0 {
            lines.push(&page_text[start..i]);
            start = i;
        }
    }
    lines.push(&page_text[start..]);
    lines
}
