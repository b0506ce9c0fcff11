//! Error types for every stage of a texture-stats run
//!
//! Per-file failures (`AnalyzeError`, `StatsError`) are recoverable: the
//! batch logs them and skips the file. Everything else aborts the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The input file set could not be enumerated
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("input directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("input path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read input directory {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// The statistics pass refused an image
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

/// A single file could not be turned into a record
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot analyze {}: {source}", .path.display())]
    Stats {
        path: PathBuf,
        #[source]
        source: StatsError,
    },
}

impl AnalyzeError {
    /// Path of the file that failed
    pub fn path(&self) -> &PathBuf {
        match self {
            AnalyzeError::Open { path, .. }
            | AnalyzeError::Decode { path, .. }
            | AnalyzeError::Stats { path, .. } => path,
        }
    }
}

/// Batch-level failure (not tied to a single file)
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to start worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// The final report could not be produced
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to encode results as JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Invalid command-line configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--jobs must be at least 1")]
    ZeroJobs,

    #[error("extension must not be empty")]
    EmptyExtension,
}
