//! Report rendering
//!
//! Serializes an ordered result set into one of two encodings:
//!
//! - `text` - a count header plus one raw path per line
//! - `html` - a linked document with `file://` URLs per entry
//! - `file_url` - percent-encoded URL construction for the HTML links

mod file_url;
mod html;
mod text;

pub use file_url::{PathStyle, file_url};
pub use html::{HtmlRenderer, escape_html};
pub use text::render_text;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::ScanError;
use crate::scan::{OutputFormat, ScanResult};

/// Render into an arbitrary sink.
pub fn render(result: &ScanResult, format: OutputFormat, out: &mut impl Write) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(result, out),
        OutputFormat::Html => HtmlRenderer::new().render(result, out),
    }
}

/// Render to a file on disk.
///
/// Any failure here fails the whole scan: a partially written report is
/// never treated as valid output.
pub fn write_report(
    result: &ScanResult,
    format: OutputFormat,
    path: &Path,
) -> Result<(), ScanError> {
    let file = File::create(path).map_err(|e| ScanError::write(path, e))?;
    let mut out = BufWriter::new(file);
    render(result, format, &mut out).map_err(|e| ScanError::write(path, e))?;
    out.flush().map_err(|e| ScanError::write(path, e))?;
    Ok(())
}
