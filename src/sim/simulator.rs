//! Trace Simulator.
//!
//! Replays one address stream against a fresh `CacheModel` and tallies the
//! outcome of every access.

use log::{debug, info};

use super::source::AddressSource;
use crate::common::SimError;
use crate::core::{decode, CacheGeometry, CacheModel};
use crate::stats::TraceStats;

/// Drives a single trace through a cache of a fixed geometry.
///
/// The simulator may be reused for several traces; the cache is reset at the
/// start of every run, so no state carries over.
pub struct TraceSimulator {
    geometry: CacheGeometry,
    cache: CacheModel,
    max_accesses: u64,
}

impl TraceSimulator {
    /// Creates a simulator that stops after at most `max_accesses` records.
    pub fn new(geometry: CacheGeometry, max_accesses: u64) -> Self {
        Self {
            cache: CacheModel::new(&geometry),
            geometry,
            max_accesses,
        }
    }

    pub fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    /// Cache state left behind by the last run.
    pub fn cache(&self) -> &CacheModel {
        &self.cache
    }

    /// Runs `source` to completion.
    ///
    /// The run ends when the source reports end-of-stream (including a short
    /// final record) or when `max_accesses` records have been processed.
    ///
    /// # Errors
    ///
    /// Returns `SimError::SourceRead` if the source fails. Counters gathered
    /// up to that point are dropped.
    pub fn simulate<S: AddressSource>(&mut self, mut source: S) -> Result<TraceStats, SimError> {
        self.cache.reset();
        let mut stats = TraceStats::default();

        while stats.accesses < self.max_accesses {
            let address = match source.next_address() {
                Ok(Some(address)) => address,
                Ok(None) => {
                    info!(
                        "trace finished: {} accesses, {} hits",
                        stats.accesses, stats.hits
                    );
                    return Ok(stats);
                }
                Err(e) => {
                    return Err(SimError::SourceRead {
                        accesses: stats.accesses,
                        source: e,
                    })
                }
            };

            let decoded = decode(&self.geometry, address);
            stats.record(self.cache.access(decoded.line_index, decoded.tag));
        }

        debug!("access limit of {} reached, trace truncated", self.max_accesses);
        stats.truncated = true;
        Ok(stats)
    }
}

/// Simulates `source` on a fresh cache built from `geometry`.
pub fn simulate<S: AddressSource>(
    geometry: &CacheGeometry,
    max_accesses: u64,
    source: S,
) -> Result<TraceStats, SimError> {
    TraceSimulator::new(*geometry, max_accesses).simulate(source)
}
