//! # ygo-deck-codec
//!
//! Decodes and encodes Yu-Gi-Oh! decks in the textual formats players pass
//! around: `.ydk` files, `ydke://` URIs and untapped.gg share codes.
//!
//! **Note:** untapped.gg support is decode-only and best-effort; the card
//! layout of that format is not known, so decoded decks are placeholders.
pub mod deck;

// Re-export the main types for convenience
pub use deck::{
    Converted,
    DeckCodecs,
    format::{untapped::UntappedCodec, ydk::YdkCodec, ydke::YdkeCodec},
    types::{
        codec::{Capabilities, DeckCodec, DecodeSupport, EncodeSupport},
        error::{DeckError, Result},
        models::{Deck, DeckFormat, Decoded, Fidelity, Operation, UnknownFormat, Zone},
    },
};
