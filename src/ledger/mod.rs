//! Append-only CSV log of timestamped title events.

pub mod initialize;

use crate::errors::{AppError, AppResult};
use crate::models::Event;
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Literal first line of every log file.
pub const HEADER: &str = "timestamp,title\n";

pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    /// Open the log at `path`, creating it (and its parent directory) with
    /// just the header when it is missing or empty.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        initialize::ensure_header(&path)?;
        tracing::debug!(path = %path.display(), "ledger opened");

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one event at the end of the log.
    pub fn append(&self, event: &Event) -> AppResult<()> {
        initialize::ensure_header(&self.path)?;

        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Always)
            .from_writer(file);

        wtr.write_record([event.timestamp_str().as_str(), event.title.as_str()])?;
        wtr.flush()?;

        tracing::debug!(title = %event.title, timestamp = %event.timestamp_str(), "event appended");
        Ok(())
    }

    /// Every event in append order. Any unparseable row fails the whole read.
    pub fn read_all(&self) -> AppResult<Vec<Event>> {
        initialize::ensure_header(&self.path)?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let mut out = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if record.len() != 2 {
                return Err(AppError::Corruption {
                    line,
                    value: record.iter().collect::<Vec<_>>().join(","),
                });
            }

            let raw_ts = &record[0];
            let timestamp = Event::parse_timestamp(raw_ts).ok_or_else(|| AppError::Corruption {
                line,
                value: raw_ts.to_string(),
            })?;

            out.push(Event::new(timestamp, &record[1]));
        }

        tracing::debug!(count = out.len(), "ledger read");
        Ok(out)
    }

    /// Remove every event, leaving only the header. Idempotent.
    pub fn clear(&self) -> AppResult<()> {
        initialize::truncate_to_header(&self.path)?;
        tracing::info!(path = %self.path.display(), "ledger cleared");
        Ok(())
    }
}
