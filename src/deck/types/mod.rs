//! Foundational data structures, error types, and the codec contract.

pub mod codec;
pub mod error;
pub mod models;
