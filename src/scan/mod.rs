//! The traversal-filter-sort pipeline
//!
//! A scan walks each configured root, filters candidate names, resolves
//! per-file metadata, and sorts the surviving entries:
//!
//! - `walker` - depth-bounded lazy traversal of one root
//! - `filter` - extension/substring predicates applied before any stat
//! - `metadata` - per-file size and mtime resolution
//! - `sort` - stable ordering of the collected result set
//! - `progress` - atomic counter a caller may poll during a long scan

mod config;
mod filter;
mod metadata;
mod progress;
mod sort;
mod walker;

pub use config::{OutputFormat, ScanConfig, SortKey, SortOrder};
pub use filter::FileFilter;
pub use metadata::{FileEntry, base_name, resolve};
pub use progress::ScanProgress;
pub use sort::sort_entries;
pub use walker::FileWalker;

use crate::diagnostics::Diagnostic;

/// Everything a finished scan produced: the surviving entries in final
/// order, plus the warnings gathered along the way.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub entries: Vec<FileEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanResult {
    /// Number of files in the report.
    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

/// Run the full pipeline for one configuration.
///
/// Pure function of the config plus filesystem state. Per-root and
/// per-file failures are absorbed as diagnostics: an invalid root is
/// skipped, and a scan where every root is invalid completes with an
/// empty result set rather than an error.
pub fn run_scan(config: &ScanConfig) -> ScanResult {
    scan_inner(config, None)
}

/// Like [`run_scan`], bumping `progress` once per accepted file so a
/// concurrent observer can report exact counts.
pub fn run_scan_with_progress(config: &ScanConfig, progress: &ScanProgress) -> ScanResult {
    scan_inner(config, Some(progress))
}

fn scan_inner(config: &ScanConfig, progress: Option<&ScanProgress>) -> ScanResult {
    let filter = FileFilter::from_config(config);
    let mut result = ScanResult::default();

    for root in &config.roots {
        if !root.is_dir() {
            result.diagnostics.push(Diagnostic::invalid_root(root));
            continue;
        }

        let mut walker = FileWalker::new(root, config.max_depth, config.skip_hidden);
        for path in walker.by_ref() {
            if !filter.accepts(&base_name(&path)) {
                continue;
            }
            match resolve(&path) {
                Ok(entry) => {
                    if let Some(p) = progress {
                        p.record_file();
                    }
                    result.entries.push(entry);
                }
                Err(diag) => result.diagnostics.push(diag),
            }
        }
        result.diagnostics.extend(walker.take_diagnostics());
    }

    sort_entries(&mut result.entries, config.sort_key, config.sort_order);
    result
}
