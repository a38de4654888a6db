pub mod config;
pub mod decode;
pub mod encode;
pub mod open;
pub mod search;
