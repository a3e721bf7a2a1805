//! Raw byte dumps of card identifier zones.
//!
//! A zone is stored on the wire as its `u32` identifiers laid out back to
//! back in little-endian order, with no header or length prefix:
//!
//! ```text
//! [4 bytes] card 0 (LE u32)
//! [4 bytes] card 1 (LE u32)
//! ...
//! ```

use byteorder::{ByteOrder, LittleEndian};
use log::trace;

use crate::deck::types::error::{DeckError, Result};
use crate::deck::types::models::{DeckFormat, Zone};

/// Width of one card identifier on the wire.
pub const CARD_WIDTH: usize = 4;

/// Dumps a zone to its little-endian byte representation.
///
/// An empty zone yields an empty buffer.
pub fn cards_to_bytes(cards: &[u32]) -> Vec<u8> {
    let mut bytes = vec![0u8; cards.len() * CARD_WIDTH];
    LittleEndian::write_u32_into(cards, &mut bytes);
    bytes
}

/// Reinterprets a byte buffer as a zone of little-endian `u32` identifiers.
///
/// # Errors
/// Returns [`DeckError::MisalignedSegment`] when the buffer length is not a
/// multiple of [`CARD_WIDTH`].
pub fn bytes_to_cards(bytes: &[u8], format: DeckFormat, zone: Zone) -> Result<Vec<u32>> {
    if bytes.len() % CARD_WIDTH != 0 {
        return Err(DeckError::MisalignedSegment {
            format,
            zone,
            len: bytes.len(),
        });
    }
    let mut cards = vec![0u32; bytes.len() / CARD_WIDTH];
    LittleEndian::read_u32_into(bytes, &mut cards);
    trace!("{} zone: {} bytes -> {} cards", zone, bytes.len(), cards.len());
    Ok(cards)
}
