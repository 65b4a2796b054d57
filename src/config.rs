// ⚙️ Pipeline Configuration
// Everything the run needs is passed in explicitly; nothing is global

use crate::entities::OscarInfo;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_AWARDS_FILE: &str = "the_oscar_award.csv";
pub const DEFAULT_MOVIES_FILE: &str = "movies.csv";
pub const DEFAULT_REPORT_FILE: &str = "awarded_movies.csv";

// ============================================================================
// SOURCE FORMAT
// ============================================================================

/// How source files are decoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFormat {
    /// Encoding label understood by encoding_rs ("utf-8", "latin1", ...)
    pub encoding: String,
    pub delimiter: u8,
}

impl Default for SourceFormat {
    fn default() -> Self {
        SourceFormat {
            encoding: "utf-8".to_string(),
            delimiter: b',',
        }
    }
}

// ============================================================================
// AWARD FILTER
// ============================================================================

/// Which award records take part in the join
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardFilter {
    /// Inclusive
    pub first_year: i32,
    /// Inclusive
    pub last_year: i32,
    /// Compared case-insensitively
    pub category: String,
    pub winners_only: bool,
}

impl AwardFilter {
    pub fn accepts(&self, info: &OscarInfo) -> bool {
        (self.first_year..=self.last_year).contains(&info.year_film)
            && info.is_category(&self.category)
            && (!self.winners_only || info.winner)
    }
}

impl Default for AwardFilter {
    fn default() -> Self {
        AwardFilter {
            first_year: 1986,
            last_year: 2016,
            category: "best picture".to_string(),
            winners_only: true,
        }
    }
}

// ============================================================================
// PIPELINE CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub encoding: String,
    pub delimiter: u8,

    pub awards_file: String,
    pub movies_file: String,
    pub report_file: String,

    /// Where to write a JSON run summary, if anywhere
    pub summary_file: Option<PathBuf>,

    pub filter: AwardFilter,
}

impl PipelineConfig {
    /// Defaults with explicit source and destination folders
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        PipelineConfig {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
            ..Default::default()
        }
    }

    pub fn format(&self) -> SourceFormat {
        SourceFormat {
            encoding: self.encoding.clone(),
            delimiter: self.delimiter,
        }
    }

    pub fn awards_path(&self) -> PathBuf {
        self.source_dir.join(&self.awards_file)
    }

    pub fn movies_path(&self) -> PathBuf {
        self.source_dir.join(&self.movies_file)
    }

    pub fn report_path(&self) -> PathBuf {
        self.dest_dir.join(&self.report_file)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let format = SourceFormat::default();
        PipelineConfig {
            source_dir: PathBuf::from("data"),
            dest_dir: PathBuf::from("result"),
            encoding: format.encoding,
            delimiter: format.delimiter,
            awards_file: DEFAULT_AWARDS_FILE.to_string(),
            movies_file: DEFAULT_MOVIES_FILE.to_string(),
            report_file: DEFAULT_REPORT_FILE.to_string(),
            summary_file: None,
            filter: AwardFilter::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn award(year_film: i32, category: &str, winner: bool) -> OscarInfo {
        OscarInfo {
            year_film,
            year_ceremony: year_film + 1,
            ceremony: 1,
            category: category.to_string(),
            name: "Producer".to_string(),
            film: "Film".to_string(),
            winner,
        }
    }

    #[test]
    fn test_default_filter_bounds_inclusive() {
        let filter = AwardFilter::default();
        assert!(filter.accepts(&award(1986, "Best Picture", true)));
        assert!(filter.accepts(&award(2016, "BEST PICTURE", true)));
        assert!(!filter.accepts(&award(1985, "Best Picture", true)));
        assert!(!filter.accepts(&award(2017, "Best Picture", true)));
    }

    #[test]
    fn test_default_filter_requires_winner_and_category() {
        let filter = AwardFilter::default();
        assert!(!filter.accepts(&award(1999, "Best Picture", false)));
        assert!(!filter.accepts(&award(1999, "Best Director", true)));
    }

    #[test]
    fn test_nominees_allowed_when_not_winners_only() {
        let filter = AwardFilter {
            winners_only: false,
            ..AwardFilter::default()
        };
        assert!(filter.accepts(&award(1999, "Best Picture", false)));
    }

    #[test]
    fn test_paths() {
        let config = PipelineConfig::new("/tmp/in", "/tmp/out");
        assert_eq!(config.awards_path(), PathBuf::from("/tmp/in/the_oscar_award.csv"));
        assert_eq!(config.movies_path(), PathBuf::from("/tmp/in/movies.csv"));
        assert_eq!(config.report_path(), PathBuf::from("/tmp/out/awarded_movies.csv"));
        assert_eq!(config.format(), SourceFormat::default());
    }
}
