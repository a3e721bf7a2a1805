//! The contract every deck format implements.

use log::debug;

use super::error::Result;
use super::models::{Deck, DeckFormat, Decoded};

/// How well a codec can decode its format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeSupport {
    /// Decoding recovers the deck exactly.
    Exact,
    /// Decoding validates the input but cannot recover the real deck.
    BestEffort,
}

/// Whether a codec can produce its format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeSupport {
    Exact,
    Unsupported,
}

/// The capability set a codec declares up front, so callers can check
/// before invoking an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub decode: DecodeSupport,
    pub encode: EncodeSupport,
}

impl Capabilities {
    pub fn can_encode(&self) -> bool {
        self.encode != EncodeSupport::Unsupported
    }

    /// `true` only when decoding yields the real deck, not a placeholder.
    pub fn is_verified_decode(&self) -> bool {
        self.decode == DecodeSupport::Exact
    }
}

/// A trait that defines one textual deck format.
///
/// Codecs hold no state across calls: `decode` and `encode` are pure
/// transformations and may run concurrently on different inputs.
pub trait DeckCodec {
    /// The format this codec reads and writes.
    const FORMAT: DeckFormat;

    /// What the codec supports. [`DeckFormat::capabilities`] reads this constant.
    const CAPABILITIES: Capabilities;

    /// Decodes a code string into a deck and its display name.
    ///
    /// Must not panic for any input, including empty or binary garbage.
    fn decode(&self, code: &str) -> Result<Decoded>;

    /// Encodes a deck into this format.
    ///
    /// Same input always yields byte-identical output. Codecs without
    /// encode support return [`DeckError::Unsupported`](super::error::DeckError::Unsupported).
    fn encode(&self, deck: &Deck, name: &str) -> Result<String>;

    /// Decodes with the sentinel contract: on failure the empty deck is
    /// returned together with an `error: ...` name instead of an error value.
    fn decode_or_sentinel(&self, code: &str) -> (Deck, String) {
        match self.decode(code) {
            Ok(decoded) => decoded.into_parts(),
            Err(e) => {
                debug!("{} decode failed: {}", Self::FORMAT, e);
                (Deck::sentinel(), e.sentinel_name())
            }
        }
    }
}
