//! Byte-level primitives shared by the base64 deck formats.
//!
//! # Submodules
//!
//! - [`card_bytes`][]: `u32` zones to and from little-endian byte dumps
//! - [`alphabet`][]: URL-safe to standard base64 normalization
//!
//! The base64 primitive itself is not chosen here: codecs take a
//! [`base64::Engine`] at construction.

pub mod alphabet;
pub mod card_bytes;
