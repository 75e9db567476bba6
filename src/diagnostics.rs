//! Warning channel for non-fatal scan failures
//!
//! Per-entry and per-root failures never abort a scan; they are collected
//! as diagnostics and surfaced by the caller (the CLI prints them to
//! stderr, a GUI might show them in a log pane).

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// What went wrong for one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A configured root does not exist or is not a directory.
    InvalidRoot,
    /// A directory could not be opened for listing.
    AccessDenied,
    /// A file vanished or could not be stat'ed between listing and resolution.
    StatFailed,
    /// A directory listing failed for a reason other than permissions.
    ReadDirFailed,
}

/// One human-readable warning tied to a path.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub path: PathBuf,
    pub message: String,
}

impl Diagnostic {
    pub fn invalid_root(path: &Path) -> Self {
        Self {
            kind: DiagnosticKind::InvalidRoot,
            path: path.to_path_buf(),
            message: String::new(),
        }
    }

    pub fn access_denied(path: &Path) -> Self {
        Self {
            kind: DiagnosticKind::AccessDenied,
            path: path.to_path_buf(),
            message: String::new(),
        }
    }

    pub fn stat_failed(path: &Path, source: &io::Error) -> Self {
        Self {
            kind: DiagnosticKind::StatFailed,
            path: path.to_path_buf(),
            message: source.to_string(),
        }
    }

    pub fn read_dir_failed(path: &Path, source: &io::Error) -> Self {
        Self {
            kind: DiagnosticKind::ReadDirFailed,
            path: path.to_path_buf(),
            message: source.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::InvalidRoot => write!(
                f,
                "the directory '{}' does not exist or is not a directory, skipping",
                self.path.display()
            ),
            DiagnosticKind::AccessDenied => {
                write!(f, "permission denied: '{}', skipping", self.path.display())
            }
            DiagnosticKind::StatFailed => write!(
                f,
                "error accessing file '{}': {}",
                self.path.display(),
                self.message
            ),
            DiagnosticKind::ReadDirFailed => write!(
                f,
                "error accessing directory '{}': {}",
                self.path.display(),
                self.message
            ),
        }
    }
}
