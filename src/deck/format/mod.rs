//! Wire format codecs.
//!
//! # Module Organization
//!
//! - [`ydk`]: line-oriented `.ydk` text files
//! - [`ydke`]: `ydke://` URIs carrying three base64 zone dumps
//! - [`untapped`]: untapped.gg share codes (best-effort decode, no encode)

pub mod untapped;
pub mod ydk;
pub mod ydke;
