//! Cache Geometry.
//!
//! A geometry fixes how a raw address is split into fields:
//!
//! ```text
//!  address_bits-1                                 0
//! +----------------+-----------------+-------------+
//! |      tag       |   line index    | block offset|
//! +----------------+-----------------+-------------+
//!     tag_bits        index_bits        offset_bits
//! ```
//!
//! The three widths always sum to `address_bits`. Construction is the only
//! place this is checked; everything downstream relies on it.

use crate::common::ConfigError;

/// Immutable description of a cache's shape and its address partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheGeometry {
    size_bytes: u64,
    ways: usize,
    block_bytes: u64,
    line_count: usize,
    address_bits: u32,
    offset_bits: u32,
    index_bits: u32,
    tag_bits: u32,
}

impl CacheGeometry {
    /// Builds a geometry from byte sizes.
    ///
    /// # Arguments
    ///
    /// * `address_bits` - Width of a trace address, in `1..=32`.
    /// * `size_bytes` - Total cache capacity.
    /// * `ways` - Associativity (blocks per line).
    /// * `block_bytes` - Size of one block.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if any size is not a power of two, if the
    /// capacity is smaller than one line or larger than the address space, or
    /// if the offset and index fields do not fit in the address.
    pub fn new(
        address_bits: u32,
        size_bytes: u64,
        ways: u64,
        block_bytes: u64,
    ) -> Result<Self, ConfigError> {
        if address_bits == 0 || address_bits > 32 {
            return Err(ConfigError::AddressWidth(address_bits));
        }
        for (field, value) in [
            ("size_bytes", size_bytes),
            ("ways", ways),
            ("block_bytes", block_bytes),
        ] {
            if !value.is_power_of_two() {
                return Err(ConfigError::NotPowerOfTwo { field, value });
            }
        }

        let line_bytes = ways
            .checked_mul(block_bytes)
            .filter(|&bytes| bytes <= size_bytes)
            .ok_or(ConfigError::CapacityTooSmall {
                size_bytes,
                ways,
                block_bytes,
            })?;
        let line_count = size_bytes / line_bytes;

        let offset_bits = block_bytes.trailing_zeros();
        let index_bits = line_count.trailing_zeros();
        if offset_bits + index_bits > address_bits {
            return Err(ConfigError::PartitionOverflow {
                offset_bits,
                index_bits,
                address_bits,
            });
        }
        if size_bytes.trailing_zeros() > address_bits {
            return Err(ConfigError::CapacityTooLarge {
                size_bytes,
                address_bits,
            });
        }
        let tag_bits = address_bits - offset_bits - index_bits;

        // Both are bounded by 2^address_bits after the checks above.
        let ways = usize::try_from(ways).map_err(|_| ConfigError::PartitionOverflow {
            offset_bits,
            index_bits,
            address_bits,
        })?;
        let line_count =
            usize::try_from(line_count).map_err(|_| ConfigError::PartitionOverflow {
                offset_bits,
                index_bits,
                address_bits,
            })?;

        Ok(Self {
            size_bytes,
            ways,
            block_bytes,
            line_count,
            address_bits,
            offset_bits,
            index_bits,
            tag_bits,
        })
    }

    /// Builds a geometry from base-two exponents, the way cache parameters are
    /// usually written down (`2^15` bytes, `2^3` ways, `2^6`-byte blocks).
    pub fn from_exponents(
        address_bits: u32,
        size_exp: u32,
        ways_exp: u32,
        block_exp: u32,
    ) -> Result<Self, ConfigError> {
        let overflow = ConfigError::PartitionOverflow {
            offset_bits: block_exp,
            index_bits: size_exp.saturating_sub(ways_exp.saturating_add(block_exp)),
            address_bits,
        };
        let pow = |exp: u32| 1u64.checked_shl(exp).ok_or_else(|| overflow.clone());
        Self::new(address_bits, pow(size_exp)?, pow(ways_exp)?, pow(block_exp)?)
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Associativity.
    pub fn ways(&self) -> usize {
        self.ways
    }

    pub fn block_bytes(&self) -> u64 {
        self.block_bytes
    }

    /// Number of lines (sets).
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn address_bits(&self) -> u32 {
        self.address_bits
    }

    pub fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    pub fn index_bits(&self) -> u32 {
        self.index_bits
    }

    pub fn tag_bits(&self) -> u32 {
        self.tag_bits
    }
}
