//! CLI entry point for flist

use std::path::{Path, PathBuf};
use std::process;

use chrono::Utc;
use clap::{Parser, ValueEnum};
use flist::{OutputFormat, ScanConfig, SortKey, SortOrder, run_scan, write_report};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum SortArg {
    /// Keep traversal order
    None,
    #[default]
    Name,
    Size,
    Date,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OrderArg {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum FormatArg {
    #[default]
    Text,
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "flist")]
#[command(about = "List all files within specified directories and save their paths to a report")]
#[command(version)]
struct Args {
    /// Directories to list files from
    #[arg(required = true)]
    directories: Vec<PathBuf>,

    /// Output file name (defaults to 'file_list_<timestamp>.<ext>')
    #[arg(short, long)]
    output: Option<String>,

    /// Filter files by extension, repeatable (e.g. -e .txt -e py)
    #[arg(short = 'e', long = "extension")]
    extensions: Vec<String>,

    /// Only include files whose name contains this substring (case-insensitive)
    #[arg(long)]
    contains: Option<String>,

    /// Skip hidden files and directories (names starting with '.')
    #[arg(long = "skip-hidden")]
    skip_hidden: bool,

    /// Sort files by 'name', 'size', or 'date'; 'none' keeps traversal order
    #[arg(long, value_name = "KEY", default_value = "name")]
    sort: SortArg,

    /// Order of sorting
    #[arg(long, default_value = "asc")]
    order: OrderArg,

    /// Maximum traversal depth: 0 lists only the given directories,
    /// 1 includes their immediate subdirectories, -1 is unlimited
    #[arg(long, default_value = "-1", allow_negative_numbers = true)]
    depth: i64,

    /// Report format
    #[arg(short, long, default_value = "text")]
    format: FormatArg,
}

/// Default name carries a unix timestamp; a user-supplied name gets the
/// format's extension appended when missing.
fn output_filename(provided: Option<&str>, format: OutputFormat) -> String {
    let ext = format.extension();
    match provided {
        Some(name) if name.to_lowercase().ends_with(&format!(".{ext}")) => name.to_string(),
        Some(name) => format!("{name}.{ext}"),
        None => format!("file_list_{}.{ext}", Utc::now().timestamp()),
    }
}

fn main() {
    let args = Args::parse();

    let max_depth = match args.depth {
        -1 => None,
        d if d >= 0 => Some(d as usize),
        d => {
            eprintln!("flist: invalid --depth {d}: must be -1 or a non-negative integer");
            process::exit(1);
        }
    };

    let format = match args.format {
        FormatArg::Text => OutputFormat::Text,
        FormatArg::Html => OutputFormat::Html,
    };

    let config = ScanConfig {
        roots: args.directories,
        extensions: args.extensions,
        contains: args.contains,
        skip_hidden: args.skip_hidden,
        max_depth,
        sort_key: match args.sort {
            SortArg::None => SortKey::None,
            SortArg::Name => SortKey::Name,
            SortArg::Size => SortKey::Size,
            SortArg::Date => SortKey::Date,
        },
        sort_order: match args.order {
            OrderArg::Asc => SortOrder::Ascending,
            OrderArg::Desc => SortOrder::Descending,
        },
        output_format: format,
    };

    let output_path = output_filename(args.output.as_deref(), format);

    let result = run_scan(&config);
    for warning in &result.diagnostics {
        eprintln!("flist: warning: {warning}");
    }

    if let Err(e) = write_report(&result, format, Path::new(&output_path)) {
        eprintln!("flist: error: {e}");
        process::exit(1);
    }

    println!("File list has been written to '{output_path}'.");
    println!("Total number of files: {}", result.total());
}
