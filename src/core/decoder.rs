//! Address Decoder.
//!
//! Splits a raw trace address into `(tag, line index, block offset)` under a
//! fixed `CacheGeometry`. Decoding is total: every 32-bit input is valid, and
//! bits above `address_bits` are masked away.

use super::geometry::CacheGeometry;

/// Fields of a decoded address.
///
/// `block_offset` is carried for completeness only. No cache decision depends
/// on it; the model tracks lines and tags, not bytes within a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedAddress {
    pub tag: u32,
    pub line_index: usize,
    pub block_offset: u32,
}

/// Low-`bits` mask. Computed in 64 bits so a full 32-bit field does not
/// overflow the shift.
#[inline]
fn mask(bits: u32) -> u64 {
    (1u64 << bits) - 1
}

/// Decodes `address` under `geometry`.
#[inline]
pub fn decode(geometry: &CacheGeometry, address: u32) -> DecodedAddress {
    let raw = u64::from(address);

    let block_offset = raw & mask(geometry.offset_bits());
    let remainder = raw >> geometry.offset_bits();
    let line_index = remainder & mask(geometry.index_bits());
    let tag = (remainder >> geometry.index_bits()) & mask(geometry.tag_bits());

    DecodedAddress {
        tag: tag as u32,
        line_index: line_index as usize,
        block_offset: block_offset as u32,
    }
}

impl CacheGeometry {
    /// Decodes `address` under this geometry. See [`decode`].
    pub fn decode(&self, address: u32) -> DecodedAddress {
        decode(self, address)
    }
}
