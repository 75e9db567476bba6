//! Name-based filtering applied before metadata resolution
//!
//! Rejecting a candidate here avoids a needless stat call. Hidden-entry
//! exclusion is not part of this chain: it happens earlier, during
//! traversal, so hidden files never reach these predicates.

use std::collections::HashSet;

use super::config::ScanConfig;

/// Pure predicate over a file's base name. Both checks are active only
/// when configured, and their order does not affect the result.
#[derive(Debug, Default)]
pub struct FileFilter {
    extensions: HashSet<String>,
    contains: Option<String>,
}

impl FileFilter {
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            extensions: config
                .extensions
                .iter()
                .map(|e| normalize_extension(e))
                .collect(),
            contains: config.contains.as_ref().map(|s| s.to_lowercase()),
        }
    }

    /// Check whether a base name passes every active filter.
    pub fn accepts(&self, name: &str) -> bool {
        if !self.extensions.is_empty() {
            match extension_of(name) {
                Some(ext) if self.extensions.contains(&ext) => {}
                _ => return false,
            }
        }
        if let Some(needle) = &self.contains {
            if !name.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Lowercase an extension and ensure the leading dot ("PY" -> ".py").
pub fn normalize_extension(ext: &str) -> String {
    let lower = ext.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}

/// The lowercased portion after the final dot, dot included. A leading
/// dot alone marks a hidden file, not an extension.
fn extension_of(name: &str) -> Option<String> {
    match name.rfind('.') {
        None | Some(0) => None,
        Some(idx) => Some(name[idx..].to_lowercase()),
    }
}
