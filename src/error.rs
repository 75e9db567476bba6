//! Fatal error type for report output
//!
//! Only the final write step can fail a scan as a whole; everything
//! earlier in the pipeline degrades into [`crate::diagnostics::Diagnostic`]s.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The report could not be created or written. A partially written
    /// report is never treated as valid output.
    #[error("cannot write output '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        ScanError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}
