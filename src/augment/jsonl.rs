//! Record readers and writers.
//!
//! Two on-disk shapes are supported:
//!
//! ```jsonl
//! {"text": "the movie was great", "label": 1}
//! {"text": "not worth the ticket", "label": 0}
//! ```
//!
//! and plain text, one sentence per line, where every line becomes a
//! `{"text": line}` record.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use crate::augment::record::{Record, text_of, text_record};
use crate::error::{FumbleError, Result};

/// Parse JSON Lines records from a reader.
///
/// Blank lines are skipped. Every other line must be a JSON object.
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::Object(map)) => records.push(map),
            Ok(other) => {
                return Err(FumbleError::field(format!(
                    "line {}: expected a JSON object, got {other}",
                    line_num + 1
                )));
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("line {}: invalid JSON", line_num + 1))
                    .into());
            }
        }
    }

    Ok(records)
}

/// Read JSON Lines records from a file.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let records = parse_records(BufReader::new(file))?;
    log::debug!("read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Read a plain-text file, one `{"text": line}` record per line.
///
/// Every line is kept, including empty ones, so output lines stay aligned
/// with input lines.
pub fn read_text_lines<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let records = BufReader::new(file)
        .lines()
        .map(|line| line.map(text_record))
        .collect::<std::io::Result<Vec<_>>>()?;
    log::debug!("read {} lines from {}", records.len(), path.display());
    Ok(records)
}

/// Write records as JSON Lines.
pub fn write_records<W: Write>(mut writer: W, records: &[Record]) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the text field of each record, one per line.
pub fn write_text<W: Write>(mut writer: W, records: &[Record], field: &str) -> Result<()> {
    for record in records {
        writeln!(writer, "{}", text_of(record, field)?)?;
    }
    writer.flush()?;
    Ok(())
}
