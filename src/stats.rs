//! Trace statistics collection and reporting.
//!
//! `TraceStats` is the per-run counter set maintained by the simulator.
//! `Summary` aggregates finished runs. The printing helpers here are the only
//! place results are formatted; the simulation core never prints.

use serde::Serialize;

use crate::core::AccessOutcome;
use crate::core::CacheGeometry;
use crate::sim::TraceReport;

/// Counters for a single trace run.
///
/// Every access is exactly one of a hit, a fill, or an eviction, so
/// `hits + fills + evictions == accesses` holds at all times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraceStats {
    pub accesses: u64,
    pub hits: u64,
    pub fills: u64,
    pub evictions: u64,
    /// The run stopped on the access bound before the trace ended.
    pub truncated: bool,
}

impl TraceStats {
    /// Counts one access served as `outcome`.
    pub fn record(&mut self, outcome: AccessOutcome) {
        self.accesses += 1;
        match outcome {
            AccessOutcome::Hit { .. } => self.hits += 1,
            AccessOutcome::Fill { .. } => self.fills += 1,
            AccessOutcome::Evict { .. } => self.evictions += 1,
        }
    }

    pub fn misses(&self) -> u64 {
        self.accesses - self.hits
    }

    /// `hits / accesses`, or 0.0 for an empty trace.
    pub fn hit_ratio(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }
}

/// Aggregate over a batch of runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub traces: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub accesses: u64,
    pub hits: u64,
    pub hit_ratio: f64,
}

impl Summary {
    pub fn from_reports(reports: &[TraceReport]) -> Self {
        let mut summary = Summary {
            traces: reports.len(),
            ..Default::default()
        };
        for report in reports {
            match &report.result {
                Ok(stats) => {
                    summary.succeeded += 1;
                    summary.accesses += stats.accesses;
                    summary.hits += stats.hits;
                }
                Err(_) => summary.failed += 1,
            }
        }
        if summary.accesses > 0 {
            summary.hit_ratio = summary.hits as f64 / summary.accesses as f64;
        }
        summary
    }
}

#[derive(Serialize)]
struct JsonGeometry {
    size_bytes: u64,
    ways: usize,
    block_bytes: u64,
    line_count: usize,
    address_bits: u32,
    tag_bits: u32,
    index_bits: u32,
    offset_bits: u32,
}

#[derive(Serialize)]
struct JsonTrace<'a> {
    trace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<&'a TraceStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hit_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    geometry: JsonGeometry,
    traces: Vec<JsonTrace<'a>>,
    summary: Summary,
}

/// Renders the whole batch as a pretty-printed JSON document.
pub fn to_json(geometry: &CacheGeometry, reports: &[TraceReport]) -> serde_json::Result<String> {
    let report = JsonReport {
        geometry: JsonGeometry {
            size_bytes: geometry.size_bytes(),
            ways: geometry.ways(),
            block_bytes: geometry.block_bytes(),
            line_count: geometry.line_count(),
            address_bits: geometry.address_bits(),
            tag_bits: geometry.tag_bits(),
            index_bits: geometry.index_bits(),
            offset_bits: geometry.offset_bits(),
        },
        traces: reports
            .iter()
            .map(|r| JsonTrace {
                trace: r.path.display().to_string(),
                stats: r.result.as_ref().ok(),
                hit_ratio: r.result.as_ref().ok().map(TraceStats::hit_ratio),
                error: r.result.as_ref().err().map(ToString::to_string),
            })
            .collect(),
        summary: Summary::from_reports(reports),
    };
    serde_json::to_string_pretty(&report)
}

const RULE: &str = "-----------------------------------------------------------";

/// Prints the cache configuration banner.
pub fn print_geometry(geometry: &CacheGeometry) {
    println!("{}", RULE);
    println!("Cache Simulator");
    println!("{}", RULE);
    println!("Cache Information");
    println!("  cache.size             {} bytes", geometry.size_bytes());
    println!("  cache.lines            {}", geometry.line_count());
    println!("  cache.ways             {}", geometry.ways());
    println!("  cache.block            {} bytes", geometry.block_bytes());
    println!("{}", RULE);
    println!("Address Partition");
    println!("  addr.width             {} bits", geometry.address_bits());
    println!("  addr.tag               {} bits", geometry.tag_bits());
    println!("  addr.line              {} bits", geometry.index_bits());
    println!("  addr.offset            {} bits", geometry.offset_bits());
}

/// Prints the result block for one trace.
pub fn print_report(report: &TraceReport) {
    println!("{}", RULE);
    match &report.result {
        Ok(stats) => {
            println!("Processed Results : {}", report.path.display());
            println!("  accesses               {}", stats.accesses);
            println!("  hits                   {}", stats.hits);
            println!("  misses                 {}", stats.misses());
            println!("  fills                  {}", stats.fills);
            println!("  evictions              {}", stats.evictions);
            println!("  hit_ratio              {:.6}", stats.hit_ratio());
            if stats.truncated {
                println!("  (stopped at the access limit)");
            }
        }
        Err(e) => {
            println!("Could not read: {}", report.path.display());
            println!("  error                  {}", e);
        }
    }
}

/// Prints the aggregate over every run.
pub fn print_summary(summary: &Summary) {
    println!("{}", RULE);
    println!("Summary");
    println!(
        "  traces                 {} ({} ok, {} failed)",
        summary.traces, summary.succeeded, summary.failed
    );
    println!("  accesses               {}", summary.accesses);
    println!("  hits                   {}", summary.hits);
    println!("  hit_ratio              {:.6}", summary.hit_ratio);
    println!("{}", RULE);
}
