//! Set-Associative Cache Trace Simulator Library.
//!
//! This crate replays recorded memory-address traces against a model of a
//! set-associative cache and reports the hit ratio that configuration would
//! achieve. It is deterministic and offline: a trace is a closed file of
//! big-endian 32-bit addresses.
//!
//! # Architecture
//!
//! * **Geometry**: cache size, associativity, and block size fix how an
//!   address splits into tag, line index, and block offset.
//! * **Cache**: per-line blocks with first-invalid fill and round-robin
//!   eviction.
//! * **Simulation**: one simulator per trace; multiple traces fan out to
//!   independent threads.
//!
//! # Modules
//!
//! * `common`: Shared constants and error types.
//! * `config`: Configuration loading and parsing.
//! * `core`: Geometry, address decoding, and the cache model.
//! * `sim`: Address sources, the trace simulator, and the runner.
//! * `stats`: Run counters and result reporting.

/// Shared constants and error handling.
///
/// Provides the configuration and simulation error taxonomy used by every
/// other module.
pub mod common;

/// Configuration system for cache geometry and trace limits.
///
/// Loads and parses TOML configuration files.
pub mod config;

/// Simulation core: cache geometry, address decoder, and cache model.
pub mod core;

/// Trace sources, per-trace simulation, and multi-file orchestration.
pub mod sim;

/// Run statistics collection and reporting.
///
/// Tracks accesses, hits, fills, and evictions, and renders results as text
/// or JSON.
pub mod stats;
