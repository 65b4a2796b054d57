// 🚀 Pipeline - load awards, load movies, match, write
//
// Fatal errors from either load stop the run before anything is written.

use crate::config::PipelineConfig;
use crate::entities::{AwardedMovie, Movie, OscarInfo};
use crate::error::{PipelineError, Result};
use crate::matcher::{match_awarded_movies, UnmatchedAward};
use crate::parser::load;
use crate::report::write_awarded_movies;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, info_span};

/// What a run did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub awards_file: PathBuf,
    pub movies_file: PathBuf,
    pub report_file: PathBuf,

    /// Award rows that passed the filter
    pub awards_loaded: usize,
    pub awards_skipped: usize,
    pub movies_loaded: usize,
    pub movies_skipped: usize,

    pub unmatched: Vec<UnmatchedAward>,

    /// Same order as the report; ready for a chart
    pub matched: Vec<AwardedMovie>,
}

impl PipelineSummary {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }
}

/// Run the whole batch
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary> {
    let span = info_span!("pipeline", source = %config.source_dir.display());
    let _guard = span.enter();

    let format = config.format();
    let awards_path = config.awards_path();
    let movies_path = config.movies_path();

    let awards = load::<OscarInfo, _>(&awards_path, &format, |info| config.filter.accepts(info))?;
    info!(
        "Filtered {} oscar information entries from \"{}\"",
        awards.len(),
        awards_path.display()
    );

    let movies = load::<Movie, _>(&movies_path, &format, |_| true)?;
    info!(
        "Read {} movie information entries from \"{}\"",
        movies.len(),
        movies_path.display()
    );

    let awards_skipped = awards.skipped.len();
    let movies_skipped = movies.skipped.len();
    let awards = awards.into_records();
    let movies = movies.into_records();

    let report = match_awarded_movies(&awards, &movies);
    info!("{}", report.summary());

    std::fs::create_dir_all(&config.dest_dir).map_err(|e| PipelineError::ReportWrite {
        path: config.dest_dir.clone(),
        message: e.to_string(),
    })?;

    let report_path = config.report_path();
    write_awarded_movies(&report_path, &report.matched, config.delimiter)?;
    info!(
        "Wrote result of data processing to file \"{}\"",
        report_path.display()
    );

    let summary = PipelineSummary {
        awards_file: awards_path,
        movies_file: movies_path,
        report_file: report_path,
        awards_loaded: awards.len(),
        awards_skipped,
        movies_loaded: movies.len(),
        movies_skipped,
        unmatched: report.unmatched,
        matched: report.matched,
    };

    if let Some(path) = &config.summary_file {
        write_summary(path, &summary)?;
        info!("Wrote run summary to \"{}\"", path.display());
    }

    Ok(summary)
}

/// Pretty-printed JSON
pub fn write_summary(path: &std::path::Path, summary: &PipelineSummary) -> Result<()> {
    let summary_error = |message: String| PipelineError::SummaryWrite {
        path: path.to_path_buf(),
        message,
    };

    let json = serde_json::to_string_pretty(summary).map_err(|e| summary_error(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| summary_error(e.to_string()))
}
