//! Format detection for arbitrary deck code input.

use log::debug;

use super::format::{ydk, ydke};
use super::types::models::DeckFormat;

impl DeckFormat {
    /// Picks a format by looking at the shape of the input.
    ///
    /// - starts with `ydke://` => [`DeckFormat::Ydke`]
    /// - contains `#main` anywhere => [`DeckFormat::Ydk`]
    /// - anything else => [`DeckFormat::Untapped`]
    ///
    /// This is a heuristic, not a content check. A `.ydk` file without a
    /// `#main` line is routed to untapped.gg, and an untapped.gg code whose
    /// name contains `#main` is routed to ydk.
    pub fn sniff(input: &str) -> DeckFormat {
        let format = if input.starts_with(ydke::PREFIX) {
            DeckFormat::Ydke
        } else if input.contains(ydk::MAIN_DIRECTIVE) {
            DeckFormat::Ydk
        } else {
            DeckFormat::Untapped
        };
        debug!("Sniffed deck format: {}", format);
        format
    }
}
