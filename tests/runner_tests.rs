//! Integration tests for the multi-file trace runner.

use std::fs;
use std::path::PathBuf;

use trace_cache_sim::common::SimError;
use trace_cache_sim::core::CacheGeometry;
use trace_cache_sim::sim::TraceRunner;

/// Writes `bytes` to a uniquely named file in the temp directory.
fn temp_trace(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "trace-cache-sim-{}-{}.bin",
        std::process::id(),
        name
    ));
    fs::write(&path, bytes).unwrap();
    path
}

fn encode(addresses: &[u32]) -> Vec<u8> {
    addresses.iter().flat_map(|a| a.to_be_bytes()).collect()
}

fn runner() -> TraceRunner {
    TraceRunner::new(CacheGeometry::new(32, 16, 2, 4).unwrap(), 1 << 20)
}

/// Tests a single file run.
#[test]
fn test_run_single_file() {
    let path = temp_trace("single", &encode(&[0x0, 0x8, 0x0]));
    let report = runner().run(&path);

    assert_eq!(report.path, path);
    let stats = report.result.unwrap();
    assert_eq!(stats.accesses, 3);
    assert_eq!(stats.hits, 1);

    fs::remove_file(path).ok();
}

/// Tests that a missing file fails only its own run.
#[test]
fn test_run_missing_file() {
    let report = runner().run("/nonexistent/trace.bin");

    assert!(!report.is_ok());
    assert!(matches!(
        report.result,
        Err(SimError::SourceUnavailable { .. })
    ));
}

/// Tests concurrent runs keep input order and stay independent.
#[test]
fn test_run_all() {
    let hot = temp_trace("hot", &encode(&[0x40; 8]));
    let empty = temp_trace("empty", &[]);
    let mut short = encode(&[0x0, 0x0]);
    short.push(0xFF);
    let short = temp_trace("short", &short);
    let missing = PathBuf::from("/nonexistent/trace.bin");

    let paths = vec![hot.clone(), missing.clone(), empty.clone(), short.clone()];
    let reports = runner().run_all(&paths);

    assert_eq!(reports.len(), 4);
    for (report, path) in reports.iter().zip(&paths) {
        assert_eq!(&report.path, path);
    }

    let hot_stats = reports[0].result.as_ref().unwrap();
    assert_eq!(hot_stats.accesses, 8);
    assert_eq!(hot_stats.hits, 7);

    assert!(matches!(
        reports[1].result,
        Err(SimError::SourceUnavailable { .. })
    ));

    let empty_stats = reports[2].result.as_ref().unwrap();
    assert_eq!(empty_stats.accesses, 0);
    assert_eq!(empty_stats.hit_ratio(), 0.0);

    let short_stats = reports[3].result.as_ref().unwrap();
    assert_eq!(short_stats.accesses, 2);
    assert_eq!(short_stats.hits, 1);

    for path in [hot, empty, short] {
        fs::remove_file(path).ok();
    }
}

/// Tests that the same trace run concurrently yields identical results.
#[test]
fn test_run_all_same_file() {
    let addresses: Vec<u32> = (0..1000u32).map(|i| (i * 37) % 64).collect();
    let path = temp_trace("shared", &encode(&addresses));

    let paths = vec![path.clone(); 4];
    let reports = runner().run_all(&paths);

    let first = reports[0].result.as_ref().unwrap();
    for report in &reports[1..] {
        assert_eq!(report.result.as_ref().unwrap(), first);
    }

    fs::remove_file(path).ok();
}
