// 🏗️ Tabular Decoder - CSV rows → typed records
//
// One loader for every record type:
// 1. Decode the file in the configured encoding
// 2. Header row must equal the expected columns exactly (fatal otherwise)
// 3. Each row goes through the record's parsing function
// 4. Rows that fail are logged and skipped, never filtered
// 5. Surviving records are kept only if the predicate says so

use crate::config::SourceFormat;
use crate::error::{PipelineError, Result, RowError};
use crate::schema::TabularRecord;
use csv::{ReaderBuilder, StringRecord};
use encoding_rs::Encoding;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

// ============================================================================
// LOAD OUTCOME
// ============================================================================

/// A row dropped because it could not become a record
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-indexed line in the source file
    pub line: u64,
    pub fields: Vec<String>,
    pub error: RowError,
}

/// Records that survived parsing and filtering, plus what happened to the rest
#[derive(Debug, Clone)]
pub struct LoadOutcome<T> {
    /// Source order preserved
    pub records: Vec<T>,

    /// Data rows seen (header excluded)
    pub rows_read: usize,

    pub skipped: Vec<SkippedRow>,

    /// Parsed fine but rejected by the predicate
    pub filtered_out: usize,
}

impl<T> LoadOutcome<T> {
    fn new() -> Self {
        LoadOutcome {
            records: Vec::new(),
            rows_read: 0,
            skipped: Vec::new(),
            filtered_out: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

// ============================================================================
// SOURCE READING
// ============================================================================

/// Read a whole file and decode it to UTF-8 text
///
/// A leading BOM is honoured and stripped. Malformed byte sequences are
/// replaced and reported, not fatal.
pub fn read_source_text(path: &Path, encoding_label: &str) -> Result<String> {
    let encoding = Encoding::for_label(encoding_label.trim().as_bytes()).ok_or_else(|| {
        PipelineError::UnknownEncoding {
            label: encoding_label.to_string(),
        }
    })?;

    let mut file = File::open(path).map_err(|source| PipelineError::SourceOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| PipelineError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;

    let (text, used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        warn!(
            file = %path.display(),
            encoding = used.name(),
            "Source contains byte sequences invalid for its encoding; they were replaced"
        );
    }
    debug!(file = %path.display(), encoding = used.name(), bytes = bytes.len(), "Read source");

    Ok(text.into_owned())
}

// ============================================================================
// DECODING
// ============================================================================

/// Decode already-read CSV text; `source` is only used in diagnostics
pub fn decode_records<T, C, P>(
    source: &Path,
    text: &str,
    delimiter: u8,
    expected_headers: &[&str],
    constructor: C,
    predicate: P,
) -> Result<LoadOutcome<T>>
where
    C: Fn(&StringRecord) -> std::result::Result<T, RowError>,
    P: Fn(&T) -> bool,
{
    // Column count is checked per row so one short row doesn't sink the file
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = reader.records();

    let header = match rows.next() {
        Some(Ok(record)) => record,
        Some(Err(e)) => {
            return Err(PipelineError::SourceRead {
                path: source.to_path_buf(),
                source: e.into(),
            })
        }
        None => StringRecord::new(),
    };

    if !header.iter().eq(expected_headers.iter().copied()) {
        return Err(PipelineError::HeaderMismatch {
            path: source.to_path_buf(),
            expected: expected_headers.iter().map(|h| h.to_string()).collect(),
            actual: header.iter().map(str::to_string).collect(),
        });
    }

    let mut outcome = LoadOutcome::new();

    for (index, result) in rows.enumerate() {
        outcome.rows_read += 1;
        let fallback_line = index as u64 + 2; // +2: 1-indexed + header row

        let parsed = result
            .map_err(|e| (fallback_line, Vec::new(), RowError::Malformed(e.to_string())))
            .and_then(|record| {
                let line = record.position().map_or(fallback_line, |p| p.line());
                constructor(&record).map_err(|error| {
                    (line, record.iter().map(str::to_string).collect(), error)
                })
            });

        match parsed {
            Ok(entry) => {
                if predicate(&entry) {
                    outcome.records.push(entry);
                } else {
                    outcome.filtered_out += 1;
                }
            }
            Err((line, fields, error)) => {
                warn!(
                    file = %source.display(),
                    line,
                    row = ?fields,
                    error = %error,
                    "Skipping entry because it cannot be deserialized"
                );
                outcome.skipped.push(SkippedRow {
                    line,
                    fields,
                    error,
                });
            }
        }
    }

    Ok(outcome)
}

/// Load a CSV file with an explicit header list and parsing function
pub fn load_with<T, C, P>(
    path: &Path,
    format: &SourceFormat,
    expected_headers: &[&str],
    constructor: C,
    predicate: P,
) -> Result<LoadOutcome<T>>
where
    C: Fn(&StringRecord) -> std::result::Result<T, RowError>,
    P: Fn(&T) -> bool,
{
    let text = read_source_text(path, &format.encoding)?;
    decode_records(
        path,
        &text,
        format.delimiter,
        expected_headers,
        constructor,
        predicate,
    )
}

/// Load a CSV file of `T` records using the type's own schema
pub fn load<T, P>(path: &Path, format: &SourceFormat, predicate: P) -> Result<LoadOutcome<T>>
where
    T: TabularRecord,
    P: Fn(&T) -> bool,
{
    let outcome = load_with(path, format, T::headers(), T::from_row, predicate)?;
    debug!(
        file = %path.display(),
        kind = T::KIND.name(),
        kept = outcome.len(),
        skipped = outcome.skipped.len(),
        filtered_out = outcome.filtered_out,
        "Loaded records"
    );
    Ok(outcome)
}
