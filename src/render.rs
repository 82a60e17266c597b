//! Table renderers for file listings.
//!
//! Two renderings of the same columns: a delimited (CSV-style) table
//! with a configurable delimiter, and a whitespace-aligned table. Both
//! support the extended checksum/revision columns.

use std::io::Write;

use chrono::DateTime;

use crate::error::Result;
use crate::models::FileRecord;

/// Display options shared by both renderers.
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// Maximum characters of the name column, 0 = no truncation.
    pub name_width: usize,
    pub skip_header: bool,
    /// Render sizes as raw byte counts instead of human-readable.
    pub size_in_bytes: bool,
    /// Include the Checksum and HeadRevisionId columns.
    pub extended: bool,
    /// Field delimiter for the CSV rendering.
    pub delimiter: u8,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            name_width: 40,
            skip_header: false,
            size_in_bytes: false,
            extended: false,
            delimiter: b'|',
        }
    }
}

const BASE_HEADERS: [&str; 5] = ["Id", "Name", "Type", "Size", "Created"];
const EXTENDED_HEADERS: [&str; 2] = ["Checksum", "HeadRevisionId"];

fn headers(options: &DisplayOptions) -> Vec<&'static str> {
    let mut headers = BASE_HEADERS.to_vec();
    if options.extended {
        headers.extend(EXTENDED_HEADERS);
    }
    headers
}

fn record_fields(file: &FileRecord, options: &DisplayOptions) -> Vec<String> {
    let mut fields = vec![
        file.id.clone(),
        truncate_name(&file.name, options.name_width),
        file_type(file).to_string(),
        format_size(file.size.unwrap_or(0), options.size_in_bytes),
        format_datetime(file.created_time.as_deref().unwrap_or("")),
    ];

    if options.extended {
        fields.push(file.md5_checksum.clone().unwrap_or_default());
        fields.push(file.head_revision_id.clone().unwrap_or_default());
    }

    fields
}

/// Write the listing as a delimited table.
pub fn write_csv<W: Write>(out: W, files: &[FileRecord], options: &DisplayOptions) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_writer(out);

    if !options.skip_header {
        writer.write_record(headers(options))?;
    }

    for file in files {
        writer.write_record(record_fields(file, options))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the listing as a whitespace-aligned table, columns padded to
/// the widest cell plus a three-space gutter.
pub fn write_tabbed<W: Write>(
    mut out: W,
    files: &[FileRecord],
    options: &DisplayOptions,
) -> Result<()> {
    let mut rows: Vec<Vec<String>> = Vec::new();

    if !options.skip_header {
        rows.push(headers(options).iter().map(|h| h.to_string()).collect());
    }
    for file in files {
        rows.push(record_fields(file, options));
    }

    let columns = if options.extended { 7 } else { 5 };
    let mut widths = vec![0usize; columns];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    for row in &rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i + 1 == row.len() {
                line.push_str(cell);
            } else {
                let pad = widths[i] - cell.chars().count() + 3;
                line.push_str(cell);
                line.push_str(&" ".repeat(pad));
            }
        }
        writeln!(out, "{}", line.trim_end())?;
    }

    out.flush()?;
    Ok(())
}

/// Classify a record for the Type column.
pub fn file_type(file: &FileRecord) -> &'static str {
    if file.is_dir() {
        "dir"
    } else if file.is_binary() {
        "bin"
    } else {
        "doc"
    }
}

/// Format a size either as a raw byte count or human-readable.
pub fn format_size(bytes: u64, size_in_bytes: bool) -> String {
    if size_in_bytes {
        return bytes.to_string();
    }

    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format an RFC 3339 timestamp as `YYYY-MM-DD HH:MM:SS`. Input that
/// does not parse is passed through verbatim.
pub fn format_datetime(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Hard cut at `width` characters, no ellipsis. Width 0 disables
/// truncation. Operates on characters, not bytes.
pub fn truncate_name(name: &str, width: usize) -> String {
    if width == 0 || name.chars().count() <= width {
        return name.to_string();
    }
    name.chars().take(width).collect()
}
