//! Simulation core.
//!
//! The core is everything that has to be right for the statistics to mean
//! anything: the bit partition of an address, the decoder that applies it,
//! and the set-associative cache state machine.

/// Set-associative cache model with round-robin replacement.
pub mod cache;

/// Address decomposition into tag, line index, and block offset.
pub mod decoder;

/// Cache geometry derivation and validation.
pub mod geometry;

pub use cache::{AccessOutcome, Block, CacheModel, Line};
pub use decoder::{decode, DecodedAddress};
pub use geometry::CacheGeometry;
