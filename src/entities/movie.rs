// 🎬 Movie Entity - catalog metadata from the movie dataset

use crate::error::RowError;
use crate::schema::{
    expect_columns, parse_f64, parse_i32, parse_i64, RecordKind, ReleaseDate, TabularRecord,
};
use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// Movie - one row of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub budget: f64,
    pub company: String,
    pub country: String,
    pub director: String,
    pub genre: String,

    /// Gross revenue in the USA (`gross` column)
    pub gross_revenue: f64,

    /// Title (`name` column)
    pub name: String,

    /// Age rating, e.g. "PG-13"
    pub rating: String,
    pub released: ReleaseDate,

    /// Minutes
    pub runtime: i32,

    /// User score
    pub score: f64,
    pub star: String,
    pub votes: i64,
    pub writer: String,

    /// Supplied separately; may disagree with `released`
    pub year: i32,
}

impl Movie {
    /// Either year source counts
    pub fn released_in(&self, year: i32) -> bool {
        self.year == year || self.released.year() == year
    }
}

impl TabularRecord for Movie {
    const KIND: RecordKind = RecordKind::Movie;

    fn from_row(row: &StringRecord) -> Result<Self, RowError> {
        let f = expect_columns(row, Self::headers().len())?;

        Ok(Movie {
            budget: parse_f64("budget", f[0])?,
            company: f[1].to_string(),
            country: f[2].to_string(),
            director: f[3].to_string(),
            genre: f[4].to_string(),
            gross_revenue: parse_f64("gross", f[5])?,
            name: f[6].to_string(),
            rating: f[7].to_string(),
            released: ReleaseDate::parse("released", f[8])?,
            runtime: parse_i32("runtime", f[9])?,
            score: parse_f64("score", f[10])?,
            star: f[11].to_string(),
            votes: parse_i64("votes", f[12])?,
            writer: f[13].to_string(),
            year: parse_i32("year", f[14])?,
        })
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}; {}; {}; {}; {}; {}; {}; {}; {}; {}; {}; {}; {}; {}; {}]",
            self.budget,
            self.company,
            self.country,
            self.director,
            self.genre,
            self.gross_revenue,
            self.name,
            self.rating,
            self.released,
            self.runtime,
            self.score,
            self.star,
            self.votes,
            self.writer,
            self.year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATRIX: [&str; 15] = [
        "63000000.0",
        "Warner Bros.",
        "USA",
        "Lana Wachowski",
        "Action",
        "171479930.0",
        "The Matrix",
        "R",
        "1999-03-31",
        "136",
        "8.7",
        "Keanu Reeves",
        "1384658",
        "Lilly Wachowski",
        "1999",
    ];

    fn row_with(index: usize, value: &'static str) -> StringRecord {
        let mut fields = MATRIX.to_vec();
        fields[index] = value;
        StringRecord::from(fields)
    }

    #[test]
    fn test_from_row() {
        let movie = Movie::from_row(&StringRecord::from(MATRIX.to_vec())).unwrap();

        assert_eq!(movie.name, "The Matrix");
        assert_eq!(movie.budget, 63_000_000.0);
        assert_eq!(movie.gross_revenue, 171_479_930.0);
        assert_eq!(movie.runtime, 136);
        assert_eq!(movie.votes, 1_384_658);
        assert_eq!(movie.released.year(), 1999);
        assert_eq!(movie.year, 1999);
    }

    #[test]
    fn test_non_numeric_budget_rejected() {
        let result = Movie::from_row(&row_with(0, "unknown"));
        assert!(matches!(
            result,
            Err(RowError::InvalidFloat { column: "budget", .. })
        ));
    }

    #[test]
    fn test_invalid_release_date_rejected() {
        let result = Movie::from_row(&row_with(8, "31/03/1999"));
        assert!(matches!(
            result,
            Err(RowError::InvalidDate {
                column: "released",
                ..
            })
        ));
    }

    #[test]
    fn test_year_only_release_date() {
        let movie = Movie::from_row(&row_with(8, "1999")).unwrap();
        assert_eq!(movie.released, ReleaseDate::Year(1999));
    }

    #[test]
    fn test_released_in_accepts_either_year() {
        let mut movie = Movie::from_row(&row_with(8, "2000-01-15")).unwrap();
        movie.year = 1999;

        assert!(movie.released_in(1999));
        assert!(movie.released_in(2000));
        assert!(!movie.released_in(2001));
    }

    #[test]
    fn test_display_lists_fields_in_column_order() {
        let movie = Movie::from_row(&StringRecord::from(MATRIX.to_vec())).unwrap();
        let shown = movie.to_string();

        assert!(shown.starts_with("[63000000; Warner Bros.; USA;"), "{shown}");
        assert!(shown.contains("; The Matrix; R; 1999-03-31; 136; 8.7;"), "{shown}");
        assert!(shown.ends_with("; Lilly Wachowski; 1999]"), "{shown}");
    }
}
