// 📝 Report Writer - matched records → CSV
// Header and column order are part of the output contract

use crate::entities::AwardedMovie;
use crate::error::{PipelineError, Result};
use crate::schema::AWARDED_MOVIE_HEADERS;
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Write header + one row per record into any writer
pub fn write_records<W: Write>(
    out: W,
    records: &[AwardedMovie],
    delimiter: u8,
) -> std::result::Result<(), csv::Error> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .quote(b'"')
        .quote_style(QuoteStyle::Necessary)
        .has_headers(false)
        .from_writer(out);

    writer.write_record(AWARDED_MOVIE_HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the report; returns rows written
pub fn write_awarded_movies(path: &Path, records: &[AwardedMovie], delimiter: u8) -> Result<usize> {
    let report_error = |message: String| PipelineError::ReportWrite {
        path: path.to_path_buf(),
        message,
    };

    let file = std::fs::File::create(path).map_err(|e| report_error(e.to_string()))?;
    write_records(file, records, delimiter).map_err(|e| report_error(e.to_string()))?;

    debug!(file = %path.display(), rows = records.len(), "Wrote report");
    Ok(records.len())
}
