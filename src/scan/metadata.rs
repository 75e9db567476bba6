//! Per-file metadata resolution

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::diagnostics::Diagnostic;

/// One discovered file with resolved metadata.
///
/// Constructed during traversal, enriched exactly once here, and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub path: PathBuf,
    /// Base name component of `path`.
    pub name: String,
    /// Byte length at resolution time.
    pub size: u64,
    /// Last-modification timestamp.
    pub modified: SystemTime,
}

/// Stat a path and build its entry.
///
/// Failure is local to the file: the caller drops the path from the
/// result set and routes the diagnostic to the warning channel. A file
/// that vanished between listing and resolution lands here too.
pub fn resolve(path: &Path) -> Result<FileEntry, Diagnostic> {
    let metadata = fs::metadata(path).map_err(|e| Diagnostic::stat_failed(path, &e))?;
    let modified = metadata
        .modified()
        .map_err(|e| Diagnostic::stat_failed(path, &e))?;
    Ok(FileEntry {
        name: base_name(path),
        size: metadata.len(),
        modified,
        path: path.to_path_buf(),
    })
}

/// Base name of a path, lossily decoded.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use crate::test_utils::TempTree;

    use super::*;

    #[test]
    fn test_resolve_reads_size_and_name() {
        let tree = TempTree::new();
        let path = tree.add_file("data.bin", "12345");

        let entry = resolve(&path).expect("resolve should succeed");
        assert_eq!(entry.name, "data.bin");
        assert_eq!(entry.size, 5);
        assert_eq!(entry.path, path);
    }

    #[test]
    fn test_resolve_missing_file_is_a_diagnostic() {
        let tree = TempTree::new();
        let gone = tree.path().join("vanished.txt");

        let err = resolve(&gone).expect_err("resolve should fail");
        assert_eq!(err.kind, crate::diagnostics::DiagnosticKind::StatFailed);
        assert_eq!(err.path, gone);
    }
}
