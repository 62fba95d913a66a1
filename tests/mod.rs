//! Test module organization.
//!
//! This module organizes all integration tests for the cache simulator.

/// Cache model fill, hit, and round-robin eviction tests.
mod cache_tests;



/// Multi-file runner tests.
mod runner_tests;
