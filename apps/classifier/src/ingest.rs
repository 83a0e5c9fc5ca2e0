//! Reading and writing posting rows as a JSON array or JSON Lines.

use std::io::{BufRead, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::record::PostingRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowFormat {
    /// A single JSON array of objects.
    Json,
    /// One JSON object per line.
    Jsonl,
}

impl RowFormat {
    /// `.jsonl` / `.ndjson` files are JSON Lines, anything else a JSON array.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("ndjson") => {
                RowFormat::Jsonl
            }
            _ => RowFormat::Json,
        }
    }
}

pub fn read_rows<R: BufRead>(reader: R, format: RowFormat) -> Result<Vec<PostingRow>, AppError> {
    match format {
        RowFormat::Json => Ok(serde_json::from_reader(reader)?),
        RowFormat::Jsonl => {
            let mut rows = Vec::new();
            for (index, line) in reader.lines().enumerate() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                let row = serde_json::from_str(&line).map_err(|e| {
                    AppError::Validation(format!("line {}: not a JSON object row: {e}", index + 1))
                })?;
                rows.push(row);
            }
            Ok(rows)
        }
    }
}

pub fn write_rows<W: Write>(
    mut writer: W,
    rows: &[PostingRow],
    format: RowFormat,
) -> Result<(), AppError> {
    match format {
        RowFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writeln!(writer)?;
        }
        RowFormat::Jsonl => {
            for row in rows {
                serde_json::to_writer(&mut writer, row)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
