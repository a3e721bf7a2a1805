//! untapped.gg deck share codes.
//!
//! # Format
//! ```text
//! <url-safe base64 code>;<deck name>
//! ```
//!
//! The binary layout inside the decoded code has not been reverse-engineered:
//! which bytes hold which card identifiers, and how they are packed, is
//! unknown. Any non-empty code therefore decodes to a fixed placeholder
//! deck marked [`Fidelity::BestEffort`](crate::deck::types::models::Fidelity).
//! Encoding is not supported.

use base64::engine::general_purpose::STANDARD;
use base64::engine::GeneralPurpose;
use base64::Engine;
use log::{trace, warn};

use crate::deck::codec::alphabet::url_safe_to_standard;
use crate::deck::types::codec::{Capabilities, DeckCodec, DecodeSupport, EncodeSupport};
use crate::deck::types::error::{DeckError, Result};
use crate::deck::types::models::{Deck, DeckFormat, Decoded, Operation};

/// Name used when the code has no `;<name>` suffix.
pub const DEFAULT_NAME: &str = "Untapped.gg Deck";

/// Separates the code from the deck name.
pub const NAME_SEPARATOR: char = ';';

/// Single card returned in place of the real deck.
pub const PLACEHOLDER_CARD: u32 = 89631139;

/// Codec for untapped.gg share codes. Decode is best-effort only.
#[derive(Debug, Clone)]
pub struct UntappedCodec<E = GeneralPurpose> {
    engine: E,
}

impl<E: Engine> UntappedCodec<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// The deck returned for every non-empty code.
    pub fn placeholder_deck() -> Deck {
        Deck::new(vec![PLACEHOLDER_CARD], Vec::new(), None)
    }

    /// Decodes the code segment to its raw bytes, or `None` if the injected
    /// engine rejects it. The bytes are only inspected, never required.
    fn raw_bytes(&self, code: &str) -> Option<Vec<u8>> {
        match self.engine.decode(url_safe_to_standard(code)) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!("untapped.gg code is not strict base64 ({}); continuing", e);
                None
            }
        }
    }
}

impl Default for UntappedCodec<GeneralPurpose> {
    fn default() -> Self {
        Self::new(STANDARD)
    }
}

impl<E: Engine> DeckCodec for UntappedCodec<E> {
    const FORMAT: DeckFormat = DeckFormat::Untapped;
    const CAPABILITIES: Capabilities = Capabilities {
        decode: DecodeSupport::BestEffort,
        encode: EncodeSupport::Unsupported,
    };

    fn decode(&self, code: &str) -> Result<Decoded> {
        let mut pieces = code.split(NAME_SEPARATOR);
        let deck_code = pieces.next().unwrap_or_default();
        let name = pieces.next().unwrap_or(DEFAULT_NAME);

        if deck_code.is_empty() {
            return Err(DeckError::Parse {
                format: DeckFormat::Untapped,
            });
        }

        if let Some(bytes) = self.raw_bytes(deck_code) {
            trace!("untapped.gg code: {} chars -> {} bytes", deck_code.len(), bytes.len());
        }

        // TODO: map the decoded bytes to card identifiers once the layout is known.
        warn!(
            "untapped.gg card layout is unknown; returning placeholder deck for '{}'",
            name
        );
        Ok(Decoded::best_effort(Self::placeholder_deck(), name))
    }

    fn encode(&self, _deck: &Deck, _name: &str) -> Result<String> {
        Err(DeckError::Unsupported {
            format: DeckFormat::Untapped,
            operation: Operation::Encode,
        })
    }
}
