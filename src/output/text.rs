//! Plain-text report rendering

use std::io::{self, Write};

use crate::scan::ScanResult;

/// Count header plus one path per line, in result order, UTF-8.
pub fn render_text(result: &ScanResult, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Total number of files: {}", result.total())?;
    for entry in &result.entries {
        writeln!(out, "{}", entry.path.display())?;
    }
    Ok(())
}
