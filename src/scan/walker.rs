//! FileWalker - depth-bounded lazy directory traversal

use std::ffi::OsStr;
use std::fs::{self, ReadDir};
use std::io;
use std::path::{Path, PathBuf};

use crate::diagnostics::Diagnostic;

/// Lazy walk of a single root directory, yielding file paths in
/// directory-listing order (no ordering guarantee; the sorter makes the
/// result deterministic later).
///
/// Hidden entries can be suppressed, symlinked directories are never
/// followed, and an unreadable directory produces a diagnostic instead
/// of aborting the walk.
pub struct FileWalker {
    skip_hidden: bool,
    max_depth: Option<usize>,
    stack: Vec<DirFrame>,
    diagnostics: Vec<Diagnostic>,
}

struct DirFrame {
    path: PathBuf,
    entries: ReadDir,
    /// Depth of the entries listed by this frame; 0 for the root's
    /// direct children.
    depth: usize,
}

impl FileWalker {
    pub fn new(root: &Path, max_depth: Option<usize>, skip_hidden: bool) -> Self {
        let mut walker = Self {
            skip_hidden,
            max_depth,
            stack: Vec::new(),
            diagnostics: Vec::new(),
        };
        walker.push_dir(root, 0);
        walker
    }

    /// Warnings emitted so far. The orchestrator drains these after the
    /// walk has been consumed.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn push_dir(&mut self, path: &Path, depth: usize) {
        match fs::read_dir(path) {
            Ok(entries) => self.stack.push(DirFrame {
                path: path.to_path_buf(),
                entries,
                depth,
            }),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                self.diagnostics.push(Diagnostic::access_denied(path));
            }
            Err(e) => self.diagnostics.push(Diagnostic::read_dir_failed(path, &e)),
        }
    }

    fn is_hidden(name: &OsStr) -> bool {
        name.to_string_lossy().starts_with('.')
    }
}

impl Iterator for FileWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let frame = self.stack.last_mut()?;
            let depth = frame.depth;
            let entry = match frame.entries.next() {
                Some(Ok(entry)) => entry,
                Some(Err(e)) => {
                    // One unreadable entry does not stop the listing.
                    let dir = frame.path.clone();
                    self.diagnostics.push(Diagnostic::read_dir_failed(&dir, &e));
                    continue;
                }
                None => {
                    self.stack.pop();
                    continue;
                }
            };

            if self.skip_hidden && Self::is_hidden(&entry.file_name()) {
                continue;
            }

            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    self.diagnostics.push(Diagnostic::stat_failed(&path, &e));
                    continue;
                }
            };

            if file_type.is_dir() {
                let child_depth = depth + 1;
                if self.max_depth.is_none_or(|max| child_depth <= max) {
                    self.push_dir(&path, child_depth);
                }
                continue;
            }

            if file_type.is_file() {
                return Some(path);
            }

            // Symlinks: a link to a file is inventoried like a file; a
            // link to a directory is never followed (cycle risk).
            if file_type.is_symlink() && path.is_file() {
                return Some(path);
            }
        }
    }
}
