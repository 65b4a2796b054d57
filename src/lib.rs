// Awarded Movies - Core Library
// Joins award records with movie metadata; used by the CLI and tests

pub mod config;
pub mod entities;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod schema;

// Re-export commonly used types
pub use config::{AwardFilter, PipelineConfig, SourceFormat};
pub use entities::{AwardedMovie, Movie, OscarInfo};
pub use error::{PipelineError, RowError};
pub use matcher::{match_awarded_movies, MatchReport, MovieIndex, UnmatchedAward};
pub use parser::{decode_records, load, load_with, LoadOutcome, SkippedRow};
pub use pipeline::{run, PipelineSummary};
pub use report::write_awarded_movies;
pub use schema::{RecordKind, ReleaseDate, TabularRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
