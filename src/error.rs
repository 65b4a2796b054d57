// 🚨 Error Types - fatal vs. per-row failures
// Fatal errors abort the run; row errors are contained by the loader

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// FATAL ERRORS
// ============================================================================

/// Errors that abort the whole pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Source file could not be opened (missing, permissions, ...)
    #[error("could not open CSV file {path}: {source}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file was opened but could not be read to the end
    #[error("could not read CSV file {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configured encoding label is not known to encoding_rs
    #[error("unknown text encoding '{label}'")]
    UnknownEncoding { label: String },

    /// Header row does not match the expected columns
    #[error(
        "unexpected CSV headers, check that '{path}' is the correct file\n  expected: {expected:?}\n  actual:   {actual:?}"
    )]
    HeaderMismatch {
        path: PathBuf,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// Report file could not be created or written
    #[error("could not write report {path}: {message}")]
    ReportWrite { path: PathBuf, message: String },

    /// Run summary could not be written
    #[error("could not write summary {path}: {message}")]
    SummaryWrite { path: PathBuf, message: String },
}

impl PipelineError {
    /// True for failures that happen before any output is produced
    pub fn is_startup(&self) -> bool {
        matches!(
            self,
            PipelineError::SourceOpen { .. }
                | PipelineError::SourceRead { .. }
                | PipelineError::UnknownEncoding { .. }
                | PipelineError::HeaderMismatch { .. }
        )
    }
}

// ============================================================================
// PER-ROW ERRORS
// ============================================================================

/// Reasons a single CSV row cannot become a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("column '{column}': invalid integer '{value}'")]
    InvalidInteger { column: &'static str, value: String },

    #[error("column '{column}': invalid number '{value}'")]
    InvalidFloat { column: &'static str, value: String },

    #[error("column '{column}': could not parse date '{value}' using any of the formats {formats:?}")]
    InvalidDate {
        column: &'static str,
        value: String,
        formats: &'static [&'static str],
    },

    /// The CSV reader itself rejected the record
    #[error("malformed CSV record: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_mismatch_display_names_file() {
        let err = PipelineError::HeaderMismatch {
            path: PathBuf::from("data/movies.csv"),
            expected: vec!["a".to_string()],
            actual: vec!["b".to_string()],
        };
        let text = err.to_string();
        assert!(text.contains("data/movies.csv"));
        assert!(text.contains("expected: [\"a\"]"));
        assert!(text.contains("actual:   [\"b\"]"));
    }

    #[test]
    fn test_startup_classification() {
        let open = PipelineError::SourceOpen {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(open.is_startup());

        let write = PipelineError::ReportWrite {
            path: PathBuf::from("out.csv"),
            message: "disk full".to_string(),
        };
        assert!(!write.is_startup());
    }

    #[test]
    fn test_row_error_display() {
        let err = RowError::InvalidInteger {
            column: "runtime",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "column 'runtime': invalid integer 'abc'");
    }
}
