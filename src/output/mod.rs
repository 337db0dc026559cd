use crate::models::AuthEvent;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors raised while writing the dataset
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Jsonl,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "jsonl" => OutputFormat::Jsonl,
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Csv, // Default
        }
    }
}

/// Writes the combined dataset to disk in the configured format
pub struct DatasetWriter {
    format: OutputFormat,
}

impl DatasetWriter {
    pub fn new(format: OutputFormat) -> Self {
        DatasetWriter { format }
    }

    /// Write all events to `path`, creating the parent directory if absent.
    ///
    /// CSV output carries a header row and the nine columns in field order;
    /// an absent failure_reason serializes as the empty string. JSONL output
    /// is one object per line with the same field names.
    pub fn write(&self, path: &Path, events: &[AuthEvent]) -> Result<(), OutputError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = fs::File::create(path)?;
        match self.format {
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(BufWriter::new(file));
                for event in events {
                    writer.serialize(event)?;
                }
                writer.flush()?;
            }
            OutputFormat::Jsonl => {
                let mut writer = BufWriter::new(file);
                for event in events {
                    serde_json::to_writer(&mut writer, event)?;
                    writer.write_all(b"\n")?;
                }
                writer.flush()?;
            }
        }
        Ok(())
    }
}
