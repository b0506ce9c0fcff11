//! Batch analysis
//!
//! Opens, decodes and analyzes every discovered file on a rayon pool. A file
//! that cannot be opened, decoded or analyzed is logged and left out of the
//! results; it never stops the batch.

use crate::error::{AnalyzeError, BatchError};
use crate::stats::ImageRecord;
use image::ImageReader;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Log a progress line every this many analyzed files
const PROGRESS_EVERY: usize = 100;

/// A file that was left out of the results
#[derive(Debug)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: AnalyzeError,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Records in input order
    pub records: Vec<ImageRecord>,
    /// Files that failed, in input order
    pub skipped: Vec<Skipped>,
}

impl BatchReport {
    pub fn analyzed_count(&self) -> usize {
        self.records.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Open, decode and analyze a single image file
///
/// The format is guessed from the file content, not its extension.
pub fn analyze_file(path: &Path) -> Result<ImageRecord, AnalyzeError> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| AnalyzeError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let image = reader.decode().map_err(|source| AnalyzeError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    ImageRecord::assemble(path, &image).map_err(|source| AnalyzeError::Stats {
        path: path.to_path_buf(),
        source,
    })
}

/// Analyze every path on a pool of `jobs` worker threads
///
/// `jobs == None` uses one thread per CPU. Record order follows `paths`.
pub fn run_batch(paths: &[PathBuf], jobs: Option<usize>) -> Result<BatchReport, BatchError> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder.build()?;

    info!(
        "⚙️  Analyzing {} file(s) on {} thread(s)",
        paths.len(),
        pool.current_num_threads()
    );

    let done = AtomicUsize::new(0);
    let outcomes: Vec<Result<ImageRecord, AnalyzeError>> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let outcome = analyze_file(path);
                let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
                if finished % PROGRESS_EVERY == 0 {
                    info!("⏳ Analyzed {} files...", finished);
                }
                outcome
            })
            .collect()
    });

    let mut report = BatchReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(record) => report.records.push(record),
            Err(reason) => {
                warn!("⚠️  Skipping file: {}", reason);
                report.skipped.push(Skipped {
                    path: reason.path().clone(),
                    reason,
                });
            }
        }
    }

    info!(
        "📊 Batch summary: {} analyzed, {} skipped",
        report.analyzed_count(),
        report.skipped_count()
    );

    Ok(report)
}
