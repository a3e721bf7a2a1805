//! Core data structures shared by every deck codec.
//!
//! This module defines:
//! - The canonical [`Deck`] and its zones
//! - The [`Decoded`] result of a successful decode
//! - The supported wire formats and codec operations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::codec::{Capabilities, DeckCodec};
use crate::deck::format::{untapped::UntappedCodec, ydk::YdkCodec, ydke::YdkeCodec};

/// A deck as three ordered zones of card identifiers.
///
/// Identifiers are stored as `u32`; duplicates are allowed and order is
/// significant. `side` distinguishes "no side zone concept" (`None`) from
/// "side zone present but empty" (`Some(vec![])`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub main: Vec<u32>,
    pub extra: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Vec<u32>>,
}

impl Deck {
    pub fn new(main: Vec<u32>, extra: Vec<u32>, side: Option<Vec<u32>>) -> Self {
        Self { main, extra, side }
    }

    /// The empty deck returned alongside an error name when decoding fails.
    pub fn sentinel() -> Self {
        Self::default()
    }

    /// Consumers treat an empty main zone as a failed decode, whatever the codec.
    pub fn is_failure(&self) -> bool {
        self.main.is_empty()
    }

    /// `true` only when a side zone is present and holds at least one card.
    pub fn has_side(&self) -> bool {
        self.side.as_ref().is_some_and(|side| !side.is_empty())
    }

    /// Total number of cards across all present zones.
    pub fn len(&self) -> usize {
        self.zones().map(|(_, cards)| cards.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the present zones in wire order: main, extra, then side if any.
    pub fn zones(&self) -> impl Iterator<Item = (Zone, &[u32])> + '_ {
        [
            Some((Zone::Main, self.main.as_slice())),
            Some((Zone::Extra, self.extra.as_slice())),
            self.side.as_deref().map(|side| (Zone::Side, side)),
        ]
        .into_iter()
        .flatten()
    }
}

/// One of the three identifier sequences that make up a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Main,
    Extra,
    Side,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Zone::Main => "main",
            Zone::Extra => "extra",
            Zone::Side => "side",
        })
    }
}

/// How much a decoded deck can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fidelity {
    /// The deck was fully recovered from the input.
    Exact,
    /// The codec could not recover the real deck and returned a placeholder.
    BestEffort,
}

/// A successfully decoded deck together with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    pub deck: Deck,
    pub name: String,
    pub fidelity: Fidelity,
}

impl Decoded {
    pub fn exact(deck: Deck, name: impl Into<String>) -> Self {
        Self {
            deck,
            name: name.into(),
            fidelity: Fidelity::Exact,
        }
    }

    pub fn best_effort(deck: Deck, name: impl Into<String>) -> Self {
        Self {
            deck,
            name: name.into(),
            fidelity: Fidelity::BestEffort,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.fidelity == Fidelity::Exact
    }

    pub fn into_parts(self) -> (Deck, String) {
        (self.deck, self.name)
    }
}

/// The textual deck formats this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckFormat {
    /// Line-oriented `.ydk` text.
    #[serde(rename = "ydk")]
    Ydk,
    /// `ydke://` URI with three base64 segments.
    #[serde(rename = "ydke")]
    Ydke,
    /// untapped.gg share code (`<code>;<name>`).
    #[serde(rename = "untapped.gg")]
    Untapped,
}

impl DeckFormat {
    pub const ALL: [DeckFormat; 3] = [DeckFormat::Ydk, DeckFormat::Ydke, DeckFormat::Untapped];

    /// Runtime view of what the format's codec supports.
    pub fn capabilities(self) -> Capabilities {
        match self {
            DeckFormat::Ydk => YdkCodec::CAPABILITIES,
            DeckFormat::Ydke => <YdkeCodec as DeckCodec>::CAPABILITIES,
            DeckFormat::Untapped => <UntappedCodec as DeckCodec>::CAPABILITIES,
        }
    }
}

impl fmt::Display for DeckFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeckFormat::Ydk => "ydk",
            DeckFormat::Ydke => "ydke",
            DeckFormat::Untapped => "untapped.gg",
        })
    }
}

/// Error returned when a format name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown deck format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for DeckFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ydk" => Ok(DeckFormat::Ydk),
            "ydke" => Ok(DeckFormat::Ydke),
            "untapped" | "untapped.gg" => Ok(DeckFormat::Untapped),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// A codec operation, used to report unsupported calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encode,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Encode => "encode",
        })
    }
}
