// 📐 Shape Layer - Record schemas and field parsing
// Every record type declares its columns and how raw text becomes typed values

use crate::error::RowError;
use chrono::{Datelike, NaiveDate};
use csv::StringRecord;
use serde::{Deserialize, Serialize};

// ============================================================================
// RECORD KINDS
// ============================================================================

pub const OSCAR_HEADERS: &[&str] = &[
    "year_film",
    "year_ceremony",
    "ceremony",
    "category",
    "name",
    "film",
    "winner",
];

pub const MOVIE_HEADERS: &[&str] = &[
    "budget", "company", "country", "director", "genre", "gross", "name", "rating", "released",
    "runtime", "score", "star", "votes", "writer", "year",
];

pub const AWARDED_MOVIE_HEADERS: &[&str] = &["year", "movie", "score", "gross_revenue"];

/// RecordKind - which table a record comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    OscarInfo,
    Movie,
    AwardedMovie,
}

impl RecordKind {
    /// Human-readable name for diagnostics
    pub fn name(&self) -> &str {
        match self {
            RecordKind::OscarInfo => "oscar award",
            RecordKind::Movie => "movie",
            RecordKind::AwardedMovie => "awarded movie",
        }
    }

    /// Expected header row, in order
    pub const fn headers(self) -> &'static [&'static str] {
        match self {
            RecordKind::OscarInfo => OSCAR_HEADERS,
            RecordKind::Movie => MOVIE_HEADERS,
            RecordKind::AwardedMovie => AWARDED_MOVIE_HEADERS,
        }
    }
}

// ============================================================================
// TABULAR RECORD TRAIT
// ============================================================================

/// TabularRecord - a type that can be built from one positional CSV row
///
/// `from_row` either returns a complete record or a `RowError`; there is no
/// partially initialized state.
pub trait TabularRecord: Sized {
    const KIND: RecordKind;

    /// Header row the source file must carry
    fn headers() -> &'static [&'static str] {
        Self::KIND.headers()
    }

    fn from_row(row: &StringRecord) -> Result<Self, RowError>;
}

/// Check column count and hand back the fields positionally
pub fn expect_columns<'r>(
    row: &'r StringRecord,
    expected: usize,
) -> Result<Vec<&'r str>, RowError> {
    if row.len() != expected {
        return Err(RowError::ColumnCount {
            expected,
            found: row.len(),
        });
    }
    Ok(row.iter().collect())
}

// ============================================================================
// FIELD PARSERS
// ============================================================================

pub fn parse_i32(column: &'static str, value: &str) -> Result<i32, RowError> {
    value.trim().parse().map_err(|_| RowError::InvalidInteger {
        column,
        value: value.to_string(),
    })
}

pub fn parse_i64(column: &'static str, value: &str) -> Result<i64, RowError> {
    value.trim().parse().map_err(|_| RowError::InvalidInteger {
        column,
        value: value.to_string(),
    })
}

pub fn parse_f64(column: &'static str, value: &str) -> Result<f64, RowError> {
    value.trim().parse().map_err(|_| RowError::InvalidFloat {
        column,
        value: value.to_string(),
    })
}

/// Anything other than a case-insensitive "true" is false
pub fn parse_flag(value: &str) -> bool {
    value.to_lowercase() == "true"
}

// ============================================================================
// RELEASE DATE
// ============================================================================

/// Accepted formats, in the order they are tried
pub const RELEASE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y-%m", "%Y"];

/// ReleaseDate - a calendar date that remembers how precise the source was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseDate {
    Full(NaiveDate),
    YearMonth { year: i32, month: u32 },
    Year(i32),
}

impl ReleaseDate {
    /// Try full date, then year-month, then year; first match wins
    pub fn parse(column: &'static str, value: &str) -> Result<Self, RowError> {
        let invalid = || RowError::InvalidDate {
            column,
            value: value.to_string(),
            formats: RELEASE_DATE_FORMATS,
        };

        // %Y is exactly four digits; chrono alone would take signed or short years
        let year_part = value.split('-').next().unwrap_or_default();
        if year_part.len() != 4 || !year_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Ok(ReleaseDate::Full(date));
        }

        // Missing components default to 1
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
            return Ok(ReleaseDate::YearMonth {
                year: date.year(),
                month: date.month(),
            });
        }

        if let Ok(date) = NaiveDate::parse_from_str(&format!("{value}-01-01"), "%Y-%m-%d") {
            return Ok(ReleaseDate::Year(date.year()));
        }

        Err(invalid())
    }

    pub fn year(&self) -> i32 {
        match self {
            ReleaseDate::Full(date) => date.year(),
            ReleaseDate::YearMonth { year, .. } => *year,
            ReleaseDate::Year(year) => *year,
        }
    }

    /// Earliest day covered by this date
    pub fn first_day(&self) -> Option<NaiveDate> {
        match self {
            ReleaseDate::Full(date) => Some(*date),
            ReleaseDate::YearMonth { year, month } => NaiveDate::from_ymd_opt(*year, *month, 1),
            ReleaseDate::Year(year) => NaiveDate::from_ymd_opt(*year, 1, 1),
        }
    }
}

impl std::fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleaseDate::Full(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            ReleaseDate::YearMonth { year, month } => write!(f, "{year:04}-{month:02}"),
            ReleaseDate::Year(year) => write!(f, "{year:04}"),
        }
    }
}
