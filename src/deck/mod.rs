//! Core deck codec module

pub mod codec;
pub mod format;
pub mod types;
mod sniff;

use base64::engine::general_purpose::STANDARD;
use base64::engine::GeneralPurpose;
use base64::Engine;
use log::{debug, info};

use format::untapped::UntappedCodec;
use format::ydk::YdkCodec;
use format::ydke::YdkeCodec;
use types::codec::DeckCodec;
use types::error::{DeckError, Result};
use types::models::{Deck, DeckFormat, Decoded, Fidelity, Operation};

/// All codecs, built around one injected base64 primitive.
///
/// This is the entry point for input of unknown format: it sniffs the input,
/// routes it to the matching codec, and can re-encode into another format.
#[derive(Debug, Clone)]
pub struct DeckCodecs<E = GeneralPurpose> {
    pub ydk: YdkCodec,
    pub ydke: YdkeCodec<E>,
    pub untapped: UntappedCodec<E>,
}

/// Output of [`DeckCodecs::convert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    /// Format the input was detected as.
    pub source: DeckFormat,
    /// Fidelity of the intermediate decode. `BestEffort` means `code`
    /// describes a placeholder, not the input deck.
    pub fidelity: Fidelity,
    pub code: String,
}

impl Default for DeckCodecs<GeneralPurpose> {
    fn default() -> Self {
        Self::new(STANDARD)
    }
}

impl<E: Engine + Clone> DeckCodecs<E> {
    pub fn new(engine: E) -> Self {
        Self {
            ydk: YdkCodec::new(),
            ydke: YdkeCodec::new(engine.clone()),
            untapped: UntappedCodec::new(engine),
        }
    }

    /// Decodes `input` with the codec for `format`.
    pub fn decode_as(&self, format: DeckFormat, input: &str) -> Result<Decoded> {
        match format {
            DeckFormat::Ydk => self.ydk.decode(input),
            DeckFormat::Ydke => self.ydke.decode(input),
            DeckFormat::Untapped => self.untapped.decode(input),
        }
    }

    /// Sniffs the format of `input` and decodes it.
    pub fn decode_any(&self, input: &str) -> Result<(DeckFormat, Decoded)> {
        let format = DeckFormat::sniff(input);
        let decoded = self.decode_as(format, input)?;
        Ok((format, decoded))
    }

    /// Like [`decode_any`](Self::decode_any) but with the sentinel contract:
    /// failures yield the empty deck and an `error: ...` name.
    pub fn decode_any_or_sentinel(&self, input: &str) -> (DeckFormat, Deck, String) {
        let format = DeckFormat::sniff(input);
        let (deck, name) = match format {
            DeckFormat::Ydk => self.ydk.decode_or_sentinel(input),
            DeckFormat::Ydke => self.ydke.decode_or_sentinel(input),
            DeckFormat::Untapped => self.untapped.decode_or_sentinel(input),
        };
        (format, deck, name)
    }

    /// Encodes `deck` with the codec for `format`.
    pub fn encode_as(&self, format: DeckFormat, deck: &Deck, name: &str) -> Result<String> {
        match format {
            DeckFormat::Ydk => self.ydk.encode(deck, name),
            DeckFormat::Ydke => self.ydke.encode(deck, name),
            DeckFormat::Untapped => self.untapped.encode(deck, name),
        }
    }

    /// Decodes `input` in whatever format it is in and re-encodes it as `target`,
    /// keeping the decoded name.
    ///
    /// # Errors
    /// Fails with [`DeckError::Unsupported`] before touching the input when
    /// `target` cannot be encoded, with the decode error when the input
    /// is invalid, and with [`DeckError::EmptyDeck`] when the decoded deck has
    /// no main deck cards.
    pub fn convert(&self, input: &str, target: DeckFormat) -> Result<Converted> {
        if !target.capabilities().can_encode() {
            return Err(DeckError::Unsupported {
                format: target,
                operation: Operation::Encode,
            });
        }

        let (source, decoded) = self.decode_any(input)?;
        if decoded.deck.is_failure() {
            return Err(DeckError::EmptyDeck { format: source });
        }
        debug!("Converting {} deck '{}' to {}", source, decoded.name, target);
        let code = self.encode_as(target, &decoded.deck, &decoded.name)?;
        info!(
            "Converted {} cards from {} to {} ({:?})",
            decoded.deck.len(),
            source,
            target,
            decoded.fidelity
        );

        Ok(Converted {
            source,
            fidelity: decoded.fidelity,
            code,
        })
    }
}
