//! File-URL construction for HTML links

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Path-separator style, decided by the path text rather than the host
/// OS so the encoding is testable on any platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    Unix,
    Windows,
}

impl PathStyle {
    /// Guess the style of a concrete path string.
    pub fn of(path: &str) -> Self {
        if path.contains('\\') || has_drive_prefix(path) {
            PathStyle::Windows
        } else {
            PathStyle::Unix
        }
    }
}

/// Characters percent-encoded inside a file-URL path. Separators, the
/// drive-letter colon, and common unreserved punctuation stay literal.
const PATH_CHARS: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b':')
    .remove(b'.')
    .remove(b'-')
    .remove(b'_')
    .remove(b'~');

/// Build a `file://` URL for a path rendered in the given separator style.
///
/// Windows-style paths have their backslashes converted to forward
/// slashes and any leading slash stripped before the `file:///` prefix;
/// Unix-style paths are prefixed with `file://` directly.
pub fn file_url(path: &str, style: PathStyle) -> String {
    match style {
        PathStyle::Windows => {
            let forward = path.replace('\\', "/");
            let trimmed = forward.trim_start_matches('/');
            format!("file:///{}", utf8_percent_encode(trimmed, PATH_CHARS))
        }
        PathStyle::Unix => format!("file://{}", utf8_percent_encode(path, PATH_CHARS)),
    }
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
