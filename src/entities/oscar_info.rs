// 🏆 OscarInfo Entity - one nomination or win from the award dataset

use crate::error::RowError;
use crate::schema::{expect_columns, parse_flag, parse_i32, RecordKind, TabularRecord};
use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// One award ceremony entry: a nominee or winner in some category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscarInfo {
    /// Release year of the film
    pub year_film: i32,

    pub year_ceremony: i32,

    /// Ordinal number of the ceremony
    pub ceremony: i32,

    pub category: String,

    /// Person addressed by the nomination
    pub name: String,

    /// Film title
    pub film: String,

    /// false when the film was only nominated
    pub winner: bool,
}

impl OscarInfo {
    /// Case-insensitive category comparison
    pub fn is_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

impl TabularRecord for OscarInfo {
    const KIND: RecordKind = RecordKind::OscarInfo;

    fn from_row(row: &StringRecord) -> Result<Self, RowError> {
        let fields = expect_columns(row, Self::headers().len())?;

        Ok(OscarInfo {
            year_film: parse_i32("year_film", fields[0])?,
            year_ceremony: parse_i32("year_ceremony", fields[1])?,
            ceremony: parse_i32("ceremony", fields[2])?,
            category: fields[3].to_string(),
            name: fields[4].to_string(),
            film: fields[5].to_string(),
            winner: parse_flag(fields[6]),
        })
    }
}

impl std::fmt::Display for OscarInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}; {}; {}; {}; {}; {}; {}]",
            self.year_film,
            self.year_ceremony,
            self.ceremony,
            self.category,
            self.name,
            self.film,
            self.winner
        )
    }
}
