//! Scan configuration types

use std::path::PathBuf;

/// Key used to order the final result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep traversal order.
    #[default]
    None,
    /// Case-insensitive comparison on base name.
    Name,
    /// Numeric comparison on byte size.
    Size,
    /// Numeric comparison on modification time.
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Report encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

impl OutputFormat {
    /// Conventional file extension for reports in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Html => "html",
        }
    }
}

/// Immutable input to one scan. Built and validated by the caller (CLI,
/// GUI); the pipeline itself never parses raw user input.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directories to walk, in order. Non-empty for a useful scan.
    pub roots: Vec<PathBuf>,
    /// Extension allow-list; empty means no extension filtering. Entries
    /// are normalized (lowercased, dot-prefixed) by the filter.
    pub extensions: Vec<String>,
    /// Case-insensitive substring the base name must contain.
    pub contains: Option<String>,
    /// Exclude any entry whose base name starts with '.' from both
    /// results and descent.
    pub skip_hidden: bool,
    /// `None` = unlimited; `Some(0)` = direct children of each root only,
    /// `Some(n)` = descend n additional levels.
    pub max_depth: Option<usize>,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub output_format: OutputFormat,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            extensions: Vec::new(),
            contains: None,
            skip_hidden: false,
            max_depth: None,
            sort_key: SortKey::None,
            sort_order: SortOrder::Ascending,
            output_format: OutputFormat::Text,
        }
    }
}
