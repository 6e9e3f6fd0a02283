use crate::config::SourceOptions;
use crate::error::FvResult;
use crate::record::{RawValue, Record};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Supplies the most recent counter snapshot, or `None` when there is none yet.
pub trait RowProvider {
    fn latest_record(&self) -> FvResult<Option<Record>>;
}

/// Reads a header-keyed CSV and keeps only its last row.
#[derive(Debug, Clone)]
pub struct CsvRowProvider {
    path: PathBuf,
    options: SourceOptions,
}

impl CsvRowProvider {
    pub fn new<P: AsRef<Path>>(path: P, options: SourceOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
        }
    }
}

impl RowProvider for CsvRowProvider {
    fn latest_record(&self) -> FvResult<Option<Record>> {
        debug!("Loading counters from: {}", self.path.display());
        let file = File::open(&self.path)?;
        read_latest_record(file, &self.options)
    }
}

/// Holds a record that was obtained elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryRowProvider {
    record: Option<Record>,
}

impl MemoryRowProvider {
    pub fn new(record: Option<Record>) -> Self {
        Self { record }
    }
}

impl RowProvider for MemoryRowProvider {
    fn latest_record(&self) -> FvResult<Option<Record>> {
        Ok(self.record.clone())
    }
}

pub fn read_latest_record<R: Read>(reader: R, options: &SourceOptions) -> FvResult<Option<Record>> {
    let trim = if options.no_trim {
        csv::Trim::None
    } else {
        csv::Trim::All
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(trim)
        .delimiter(options.delimiter_byte()?)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        warn!("Counter source is empty");
        return Ok(None);
    }

    let mut latest = None;
    let mut rows_read = 0;
    let mut skipped_count = 0;

    for result in rdr.records() {
        rows_read += 1;
        match result {
            Ok(rec) => latest = Some(rec),
            Err(e) => {
                skipped_count += 1;
                warn!("[Row {}] CSV Parse Error: {}", rows_read, e);
            }
        }
    }

    if skipped_count > 0 {
        warn!("Skipped {} unreadable rows in counter source.", skipped_count);
    }

    let Some(row) = latest else {
        warn!("Counter source has a header but no data rows");
        return Ok(None);
    };

    let record: Record = headers
        .iter()
        .zip(row.iter())
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name, RawValue::from(value)))
        .collect();

    debug!(
        "Latest record of {} rows ({} fields): {:?}",
        rows_read,
        record.len(),
        record
    );

    Ok(Some(record))
}
