//! Simulator-wide constants.

/// Width of a single trace record in bytes (one big-endian `u32`).
pub const ADDRESS_BYTES: usize = 4;

/// Default address width in bits.
pub const DEFAULT_ADDRESS_BITS: u32 = 32;

/// Default upper bound on the number of accesses replayed from one trace.
pub const DEFAULT_MAX_ACCESSES: u64 = 1 << 26;

/// Default total cache capacity in bytes.
pub const DEFAULT_CACHE_BYTES: u64 = 32 * 1024;

/// Default associativity (blocks per line).
pub const DEFAULT_WAYS: u64 = 8;

/// Default block size in bytes.
pub const DEFAULT_BLOCK_BYTES: u64 = 64;
