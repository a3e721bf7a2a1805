//! `ydke://` deck URIs.
//!
//! # Format
//! ```text
//! ydke://<main>!<extra>!<side>!
//! ```
//! Each segment is standard base64 of the zone's raw little-endian `u32`
//! dump (see [`card_bytes`](crate::deck::codec::card_bytes)). The format has
//! no name field.

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::engine::GeneralPurpose;
use base64::Engine;
use log::{debug, trace};
use regex::Regex;

use crate::deck::codec::card_bytes::{bytes_to_cards, cards_to_bytes};
use crate::deck::types::codec::{Capabilities, DeckCodec, DecodeSupport, EncodeSupport};
use crate::deck::types::error::{DeckError, Result};
use crate::deck::types::models::{Deck, DeckFormat, Decoded, Zone};

/// URI scheme every YDKE code starts with.
pub const PREFIX: &str = "ydke://";

/// Terminator written after every segment, including empty ones.
pub const SEPARATOR: char = '!';

/// Name reported for every decoded YDKE deck.
pub const DEFAULT_NAME: &str = "YDKE Deck";

/// Compiled pattern for one base64 segment and its terminator.
///
/// Anchored at the start so each match resumes exactly where the previous
/// one ended.
static SEGMENT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn segment_regex() -> &'static Regex {
    SEGMENT_PATTERN
        .get_or_init(|| Regex::new(r"^([0-9A-Za-z+/=]+)!").expect("Invalid ydke segment regex pattern"))
}

/// Codec for `ydke://` URIs.
///
/// The base64 primitive is injected at construction; [`Default`] uses the
/// standard padded alphabet.
#[derive(Debug, Clone)]
pub struct YdkeCodec<E = GeneralPurpose> {
    engine: E,
}

impl<E: Engine> YdkeCodec<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    fn decode_zone(&self, segment: &str, zone: Zone) -> Result<Vec<u32>> {
        let bytes = self
            .engine
            .decode(segment)
            .map_err(|source| DeckError::Base64 {
                format: DeckFormat::Ydke,
                source,
            })?;
        bytes_to_cards(&bytes, DeckFormat::Ydke, zone)
    }

    fn encode_zone(&self, cards: &[u32]) -> String {
        self.engine.encode(cards_to_bytes(cards))
    }
}

impl Default for YdkeCodec<GeneralPurpose> {
    fn default() -> Self {
        Self::new(STANDARD)
    }
}

/// Splits the body of a `ydke://` code into its raw segment strings.
///
/// Scanning stops at the first position where no non-empty segment followed
/// by `!` can be matched. Returns an empty list when the prefix is missing.
fn split_segments(code: &str) -> Vec<&str> {
    let Some(body) = code.strip_prefix(PREFIX) else {
        debug!("Invalid ydke code, missing {} prefix", PREFIX);
        return Vec::new();
    };

    let re = segment_regex();
    let mut segments = Vec::new();
    let mut pos = 0;
    while pos < body.len() {
        let Some(caps) = re.captures(&body[pos..]) else {
            trace!("Segment scan stopped at byte {} of {}", pos, body.len());
            break;
        };
        if let (Some(whole), Some(segment)) = (caps.get(0), caps.get(1)) {
            segments.push(segment.as_str());
            pos += whole.end();
        } else {
            break;
        }
    }
    segments
}

impl<E: Engine> DeckCodec for YdkeCodec<E> {
    const FORMAT: DeckFormat = DeckFormat::Ydke;
    const CAPABILITIES: Capabilities = Capabilities {
        decode: DecodeSupport::Exact,
        encode: EncodeSupport::Exact,
    };

    fn decode(&self, code: &str) -> Result<Decoded> {
        let segments = split_segments(code);
        trace!("Found {} ydke segments", segments.len());

        let (main, extra) = match segments.as_slice() {
            [main, extra, ..] => (*main, *extra),
            _ => return Err(DeckError::Parse { format: DeckFormat::Ydke }),
        };

        let main = self.decode_zone(main, Zone::Main)?;
        let extra = self.decode_zone(extra, Zone::Extra)?;
        let side = match segments.get(2) {
            Some(side) => Some(self.decode_zone(side, Zone::Side)?).filter(|cards| !cards.is_empty()),
            None => None,
        };

        debug!(
            "Decoded ydke deck: main={}, extra={}, side={:?}",
            main.len(),
            extra.len(),
            side.as_ref().map(Vec::len)
        );
        Ok(Decoded::exact(Deck::new(main, extra, side), DEFAULT_NAME))
    }

    fn encode(&self, deck: &Deck, _name: &str) -> Result<String> {
        let side = deck.side.as_deref().unwrap_or_default();
        Ok(format!(
            "{PREFIX}{main}{SEPARATOR}{extra}{SEPARATOR}{side}{SEPARATOR}",
            main = self.encode_zone(&deck.main),
            extra = self.encode_zone(&deck.extra),
            side = self.encode_zone(side),
        ))
    }
}
