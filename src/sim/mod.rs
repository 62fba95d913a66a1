//! Trace sources, the per-trace simulator, and the multi-file runner.

pub mod runner;
pub mod simulator;
pub mod source;

pub use runner::{TraceReport, TraceRunner};
pub use simulator::{simulate, TraceSimulator};
pub use source::{AddressSource, IterSource, ReaderSource};
