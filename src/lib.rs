//! flist - flat file inventory reports
//!
//! Walks one or more directory roots, filters and sorts the discovered
//! files, and renders the result as a plain path list or a hyperlinked
//! HTML document.

pub mod diagnostics;
pub mod error;
pub mod output;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::ScanError;
pub use output::{HtmlRenderer, PathStyle, file_url, render, render_text, write_report};
pub use scan::{
    FileEntry, FileFilter, FileWalker, OutputFormat, ScanConfig, ScanProgress, ScanResult,
    SortKey, SortOrder, run_scan, run_scan_with_progress,
};
