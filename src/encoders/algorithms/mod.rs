pub mod errors;
pub mod filler;
pub mod lcg;
pub mod page;
pub mod position;
pub mod radix36;
pub mod scramble;

// Re-export error types for public API
pub use errors::{DecodeError, EncodeError, LinkError};
