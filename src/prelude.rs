//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use babel_addr::prelude::*;
//!
//! let encoded = encode("hello", &Coordinate::new(0, 1, 2, 3), 10).unwrap();
//! let decoded = decode(&encoded.handle).unwrap();
//! assert!(decoded.find("hello").contains(&10));
//! ```

pub use crate::{
    // Core encoding/decoding
    Coordinate,
    DecodeError,
    Decoded,
    EncodeError,
    Encoded,
    Library,

    // Config
    LibraryConfig,
    LinkError,
    PAGE_LENGTH,

    // Convenience functions
    convenience::{SearchOptions, ShareLink, search, wrap_page},

    decode,
    encode,
};
