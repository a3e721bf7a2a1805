//! Line-oriented `.ydk` deck files.
//!
//! # Format
//! ```text
//! #created by ...      <- first free-form directive becomes the deck name
//! #main
//! 89631139
//! ...
//! #extra
//! ...
//! !side
//! ...
//! ```
//!
//! Only `#main`, `#extra` and `!side` switch zones. Lines that are not
//! directives are card identifiers; anything that does not parse as a
//! positive identifier is skipped.

use log::{debug, trace};

use crate::deck::types::codec::{Capabilities, DeckCodec, DecodeSupport, EncodeSupport};
use crate::deck::types::error::Result;
use crate::deck::types::models::{Deck, DeckFormat, Decoded, Zone};

/// Name used when the file carries no name comment.
pub const DEFAULT_NAME: &str = "YDK Deck";

/// Directive that opens the main zone; also what format sniffing looks for.
pub const MAIN_DIRECTIVE: &str = "#main";
const EXTRA_DIRECTIVE: &str = "#extra";
const SIDE_DIRECTIVE: &str = "!side";

/// Codec for the `.ydk` line format.
#[derive(Debug, Clone, Copy, Default)]
pub struct YdkCodec;

impl YdkCodec {
    pub fn new() -> Self {
        Self
    }
}

impl DeckCodec for YdkCodec {
    const FORMAT: DeckFormat = DeckFormat::Ydk;
    const CAPABILITIES: Capabilities = Capabilities {
        decode: DecodeSupport::Exact,
        encode: EncodeSupport::Exact,
    };

    fn decode(&self, code: &str) -> Result<Decoded> {
        let normalized = code.replace("\r\n", "\n");

        let mut main = Vec::new();
        let mut extra = Vec::new();
        let mut side = Vec::new();
        let mut name: Option<String> = None;
        let mut cursor = Zone::Main;

        for line in normalized.split('\n') {
            // Editors on Windows may leave a byte order mark on the first line.
            let text = line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
            if text.is_empty() {
                continue;
            }

            if text.starts_with('#') || text.starts_with('!') {
                match zone_directive(text) {
                    Some(zone) => cursor = zone,
                    None if name.is_none() => {
                        // Both markers are one byte wide.
                        name = Some(text[1..].trim().to_string());
                    }
                    None => trace!("Ignoring directive line: {}", text),
                }
                continue;
            }

            match parse_card_id(text) {
                Some(id) => match cursor {
                    Zone::Main => main.push(id),
                    Zone::Extra => extra.push(id),
                    Zone::Side => side.push(id),
                },
                None => trace!("Skipping malformed card line: {:?}", text),
            }
        }

        let deck = Deck {
            main,
            extra,
            side: (!side.is_empty()).then_some(side),
        };
        debug!(
            "Decoded ydk deck: main={}, extra={}, side={:?}",
            deck.main.len(),
            deck.extra.len(),
            deck.side.as_ref().map(Vec::len)
        );

        Ok(Decoded::exact(deck, name.unwrap_or_else(|| DEFAULT_NAME.to_string())))
    }

    fn encode(&self, deck: &Deck, name: &str) -> Result<String> {
        let mut lines: Vec<String> = Vec::with_capacity(deck.len() + 4);

        if !name.is_empty() {
            lines.push(format!("# {}", name));
        }
        lines.push(MAIN_DIRECTIVE.to_string());
        lines.extend(card_lines(&deck.main));
        lines.push(EXTRA_DIRECTIVE.to_string());
        lines.extend(card_lines(&deck.extra));
        if let Some(side) = &deck.side {
            lines.push(SIDE_DIRECTIVE.to_string());
            lines.extend(card_lines(side));
        }

        Ok(lines.join("\n"))
    }
}

/// Maps an exact directive literal to the zone it selects.
fn zone_directive(text: &str) -> Option<Zone> {
    match text {
        MAIN_DIRECTIVE => Some(Zone::Main),
        EXTRA_DIRECTIVE => Some(Zone::Extra),
        SIDE_DIRECTIVE => Some(Zone::Side),
        _ => None,
    }
}

/// Identifier 0 is not a card and is never written.
fn card_lines(cards: &[u32]) -> impl Iterator<Item = String> + '_ {
    cards.iter().filter(|&&id| id != 0).map(u32::to_string)
}

/// Parses the leading integer of a trimmed line.
///
/// Accepts an optional sign followed by decimal digits and ignores whatever
/// follows the digits, so `"123abc"` yields 123. Returns `None` when there
/// are no digits, when the value is not positive, or when it does not fit
/// a `u32` identifier.
fn parse_card_id(text: &str) -> Option<u32> {
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits_end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let digits = digits.trim_start_matches('0');
    if negative || digits.is_empty() {
        return None;
    }
    digits.parse::<u32>().ok()
}
