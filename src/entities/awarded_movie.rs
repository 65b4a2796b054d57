// 📊 AwardedMovie - joined output row (award + matched movie)

use crate::error::RowError;
use crate::schema::{expect_columns, parse_f64, parse_i32, RecordKind, TabularRecord};
use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// Field order is the report's column order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardedMovie {
    /// Film year, taken from the award
    pub year: i32,

    /// Title as spelled in the award dataset
    pub movie: String,

    pub score: f64,
    pub gross_revenue: f64,
}

impl AwardedMovie {
    pub fn new(year: i32, movie: String, score: f64, gross_revenue: f64) -> Self {
        AwardedMovie {
            year,
            movie,
            score,
            gross_revenue,
        }
    }

    /// Label used on a chart's x-axis
    pub fn label(&self) -> String {
        format!("{}: {}", self.year, self.movie)
    }
}

// Reading a report back in
impl TabularRecord for AwardedMovie {
    const KIND: RecordKind = RecordKind::AwardedMovie;

    fn from_row(row: &StringRecord) -> Result<Self, RowError> {
        let fields = expect_columns(row, Self::headers().len())?;

        Ok(AwardedMovie {
            year: parse_i32("year", fields[0])?,
            movie: fields[1].to_string(),
            score: parse_f64("score", fields[2])?,
            gross_revenue: parse_f64("gross_revenue", fields[3])?,
        })
    }
}

impl std::fmt::Display for AwardedMovie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.year, self.movie, self.score, self.gross_revenue
        )
    }
}
