//! Trace Runner.
//!
//! Opens trace files and simulates each one. Batches fan out to one scoped
//! thread per file; each worker owns its own simulator and cache, so runs
//! share nothing and are joined before results are returned.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::thread;

use log::{info, warn};

use super::simulator::TraceSimulator;
use super::source::ReaderSource;
use crate::common::SimError;
use crate::core::CacheGeometry;
use crate::stats::TraceStats;

/// Outcome of simulating one trace file.
#[derive(Debug)]
pub struct TraceReport {
    pub path: PathBuf,
    pub result: Result<TraceStats, SimError>,
}

impl TraceReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs trace files against a fixed geometry.
#[derive(Debug, Clone, Copy)]
pub struct TraceRunner {
    geometry: CacheGeometry,
    max_accesses: u64,
}

impl TraceRunner {
    pub fn new(geometry: CacheGeometry, max_accesses: u64) -> Self {
        Self {
            geometry,
            max_accesses,
        }
    }

    /// Simulates the trace at `path` on the calling thread.
    pub fn run<P: AsRef<Path>>(&self, path: P) -> TraceReport {
        let path = path.as_ref().to_path_buf();
        info!("simulating {}", path.display());

        let result = File::open(&path)
            .map_err(|source| SimError::SourceUnavailable {
                path: path.clone(),
                source,
            })
            .and_then(|file| {
                TraceSimulator::new(self.geometry, self.max_accesses)
                    .simulate(ReaderSource::new(BufReader::new(file)))
            });

        if let Err(e) = &result {
            warn!("{}: {}", path.display(), e);
        }
        TraceReport { path, result }
    }

    /// Simulates every trace concurrently, one thread per path.
    ///
    /// Reports are returned in the same order as `paths`.
    pub fn run_all<P: AsRef<Path> + Sync>(&self, paths: &[P]) -> Vec<TraceReport> {
        thread::scope(|scope| {
            let handles: Vec<_> = paths
                .iter()
                .map(|path| scope.spawn(move || self.run(path)))
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(report) => report,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }
}
