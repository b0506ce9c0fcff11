//! Per-channel color statistics for block textures
//!
//! A run scans a directory for images (scan.rs), analyzes each one in
//! parallel (batch.rs) with the statistics core (stats/), and writes the
//! records as JSON (report.rs).

pub mod batch;
pub mod config;
pub mod error;
pub mod report;
pub mod scan;
pub mod stats;

pub use batch::{analyze_file, run_batch, BatchReport};
pub use config::{Args, Config};
pub use stats::{Category, ChannelStats, ImageRecord};
