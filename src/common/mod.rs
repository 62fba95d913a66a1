//! Common utilities and types used throughout the cache simulator.
//!
//! This module provides the error taxonomy and the constants shared by the
//! configuration layer, the simulation core, and the trace runner.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for configuration and trace processing.
pub mod error;

pub use constants::{ADDRESS_BYTES, DEFAULT_ADDRESS_BITS, DEFAULT_MAX_ACCESSES};
pub use error::{ConfigError, SimError};
