//! Error types for the deck codecs.

use thiserror::Error;

use super::models::{DeckFormat, Operation, Zone};

/// The primary error type for all codec operations in this crate.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The input does not have the structure the format requires
    /// (missing prefix, missing segments, empty code).
    #[error("failed to parse {format} code")]
    Parse { format: DeckFormat },

    /// The input parsed but produced no main deck cards, which consumers
    /// treat as a failed decode.
    #[error("{format} code contains no main deck cards")]
    EmptyDeck { format: DeckFormat },

    /// A segment that should carry base64 could not be decoded.
    #[error("failed to parse {format} code: invalid base64: {source}")]
    Base64 {
        format: DeckFormat,
        #[source]
        source: base64::DecodeError,
    },

    /// A decoded segment is not a whole number of 32-bit card identifiers.
    #[error("failed to parse {format} code: {zone} segment is {len} bytes, not a multiple of 4")]
    MisalignedSegment {
        format: DeckFormat,
        zone: Zone,
        len: usize,
    },

    /// The codec does not implement this operation at all.
    #[error("{operation} is not implemented for {format}")]
    Unsupported {
        format: DeckFormat,
        operation: Operation,
    },
}

impl DeckError {
    /// The format whose codec raised this error.
    pub fn format(&self) -> DeckFormat {
        match self {
            Self::Parse { format }
            | Self::EmptyDeck { format }
            | Self::Base64 { format, .. }
            | Self::MisalignedSegment { format, .. }
            | Self::Unsupported { format, .. } => *format,
        }
    }

    /// `true` when the failure means "feature not built" rather than "bad input".
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// The short error name paired with a sentinel deck.
    ///
    /// All input errors collapse to `error: parse <format> code failed`;
    /// the detail stays available through `Display` and `source()`.
    pub fn sentinel_name(&self) -> String {
        match self {
            Self::Unsupported { format, operation } => {
                format!("error: {} not implemented for {}", operation, format)
            }
            _ => format!("error: parse {} code failed", self.format()),
        }
    }
}

/// A convenience `Result` type alias using the crate's `DeckError` type.
pub type Result<T> = std::result::Result<T, DeckError>;
