//! Error Types.
//!
//! Two layers of failure exist. A `ConfigError` means the cache geometry or
//! the configuration file is unusable, and no trace may be simulated. A
//! `SimError` is scoped to a single trace run; other runs are unaffected.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Invalid or unreadable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A size parameter is zero or not a power of two.
    NotPowerOfTwo {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: u64,
    },

    /// The cache cannot hold even a single line of `ways * block_bytes`.
    CapacityTooSmall {
        size_bytes: u64,
        ways: u64,
        block_bytes: u64,
    },

    /// The cache is larger than the address space it serves.
    CapacityTooLarge { size_bytes: u64, address_bits: u32 },

    /// Address width outside `1..=32`.
    AddressWidth(u32),

    /// Offset and index fields need more bits than the address provides.
    PartitionOverflow {
        offset_bits: u32,
        index_bits: u32,
        address_bits: u32,
    },

    /// The safety bound on accesses must be at least one.
    ZeroMaxAccesses,

    /// The configuration file could not be read.
    Unreadable { path: PathBuf, message: String },

    /// The configuration file is not valid TOML for this schema.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotPowerOfTwo { field, value } => {
                write!(f, "NotPowerOfTwo: {} = {} must be a power of two", field, value)
            }
            ConfigError::CapacityTooSmall {
                size_bytes,
                ways,
                block_bytes,
            } => write!(
                f,
                "CapacityTooSmall: {} bytes cannot hold one line of {} x {} bytes",
                size_bytes, ways, block_bytes
            ),
            ConfigError::CapacityTooLarge {
                size_bytes,
                address_bits,
            } => write!(
                f,
                "CapacityTooLarge: {} bytes exceeds a {}-bit address space",
                size_bytes, address_bits
            ),
            ConfigError::AddressWidth(bits) => {
                write!(f, "AddressWidth: {} bits is outside 1..=32", bits)
            }
            ConfigError::PartitionOverflow {
                offset_bits,
                index_bits,
                address_bits,
            } => write!(
                f,
                "PartitionOverflow: {} offset bits + {} index bits exceed a {}-bit address",
                offset_bits, index_bits, address_bits
            ),
            ConfigError::ZeroMaxAccesses => write!(f, "ZeroMaxAccesses: max_accesses must be > 0"),
            ConfigError::Unreadable { path, message } => {
                write!(f, "Unreadable: {}: {}", path.display(), message)
            }
            ConfigError::Parse(message) => write!(f, "Parse: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure of a single trace simulation.
#[derive(Debug)]
pub enum SimError {
    /// The geometry or configuration is invalid.
    Config(ConfigError),

    /// The trace could not be opened.
    SourceUnavailable { path: PathBuf, source: io::Error },

    /// A read failed for a reason other than end-of-stream.
    ///
    /// `accesses` is the number of records consumed before the failure. The
    /// counters themselves are discarded.
    SourceRead { accesses: u64, source: io::Error },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Config(e) => write!(f, "configuration error: {}", e),
            SimError::SourceUnavailable { path, source } => {
                write!(f, "could not read {}: {}", path.display(), source)
            }
            SimError::SourceRead { accesses, source } => {
                write!(f, "read failed after {} accesses: {}", accesses, source)
            }
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Config(e) => Some(e),
            SimError::SourceUnavailable { source, .. } => Some(source),
            SimError::SourceRead { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        SimError::Config(e)
    }
}
