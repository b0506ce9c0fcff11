//! results.json output
//!
//! A JSON array of flat record objects, pretty-printed with two-space
//! indentation (serde_json's default pretty format).

use crate::error::ReportError;
use crate::stats::ImageRecord;
use log::info;
use std::fs;
use std::path::Path;

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "results.json";

/// Encode records as pretty-printed JSON
pub fn to_json(records: &[ImageRecord]) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to `path`, replacing any existing file
pub fn write_report(records: &[ImageRecord], path: &Path) -> Result<(), ReportError> {
    let json = to_json(records)?;

    fs::write(path, json).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("✅ Results saved to {} ({} records)", path.display(), records.len());
    Ok(())
}
