//! Simulator configuration.
//!
//! Configuration is loaded from a TOML file with two optional tables,
//! `[cache]` and `[trace]`. Every field has a default matching a 32 KiB,
//! 8-way cache with 64-byte blocks over 32-bit addresses.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::common::constants::{
    DEFAULT_ADDRESS_BITS, DEFAULT_BLOCK_BYTES, DEFAULT_CACHE_BYTES, DEFAULT_MAX_ACCESSES,
    DEFAULT_WAYS,
};
use crate::common::ConfigError;
use crate::core::CacheGeometry;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

impl Config {
    /// Reads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validates the cache section and derives its geometry.
    pub fn geometry(&self) -> Result<CacheGeometry, ConfigError> {
        CacheGeometry::new(
            self.cache.address_bits,
            self.cache.size_bytes,
            self.cache.ways,
            self.cache.block_bytes,
        )
    }

    /// Returns the configured safety bound, rejecting zero.
    pub fn max_accesses(&self) -> Result<u64, ConfigError> {
        match self.trace.max_accesses {
            0 => Err(ConfigError::ZeroMaxAccesses),
            n => Ok(n),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    #[serde(default = "d_c_size")]
    pub size_bytes: u64,

    #[serde(default = "d_c_ways")]
    pub ways: u64,

    #[serde(default = "d_c_block")]
    pub block_bytes: u64,

    #[serde(default = "d_c_addr")]
    pub address_bits: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            size_bytes: d_c_size(),
            ways: d_c_ways(),
            block_bytes: d_c_block(),
            address_bits: d_c_addr(),
        }
    }
}

fn d_c_size() -> u64 {
    DEFAULT_CACHE_BYTES
}

fn d_c_ways() -> u64 {
    DEFAULT_WAYS
}

fn d_c_block() -> u64 {
    DEFAULT_BLOCK_BYTES
}

fn d_c_addr() -> u32 {
    DEFAULT_ADDRESS_BITS
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    #[serde(default = "d_t_max")]
    pub max_accesses: u64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            max_accesses: d_t_max(),
        }
    }
}

fn d_t_max() -> u64 {
    DEFAULT_MAX_ACCESSES
}
