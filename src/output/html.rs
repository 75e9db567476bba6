//! HTML report rendering

use std::io::{self, Write};

use chrono::{DateTime, Local};

use crate::scan::ScanResult;

use super::file_url::{PathStyle, file_url};

/// Renders the result set as a minimal HTML document with one link per
/// file. The title carries a generation timestamp; tests freeze it via
/// [`HtmlRenderer::at`] so output is deterministic.
pub struct HtmlRenderer {
    generated_at: DateTime<Local>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            generated_at: Local::now(),
        }
    }

    /// Render with a fixed title timestamp.
    pub fn at(generated_at: DateTime<Local>) -> Self {
        Self { generated_at }
    }

    pub fn render(&self, result: &ScanResult, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html>")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(
            out,
            "<title>File List - {}</title>",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h1>Total number of files: {}</h1>", result.total())?;
        writeln!(out, "<ul>")?;
        for entry in &result.entries {
            let path = entry.path.to_string_lossy();
            // Relative paths would land in the URL authority slot, so the
            // href is built from an absolutized path. The visible text
            // keeps the path as scanned.
            let absolute = std::path::absolute(&entry.path).unwrap_or_else(|_| entry.path.clone());
            let url_path = absolute.to_string_lossy();
            let href = file_url(&url_path, PathStyle::of(&url_path));
            writeln!(
                out,
                "<li><a href=\"{}\">{}</a></li>",
                href,
                escape_html(&path)
            )?;
        }
        writeln!(out, "</ul>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        Ok(())
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape text for embedding in HTML element content or a quoted
/// attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
