use anyhow::{bail, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use awarded_movies::logging::{init_logging, LogConfig};
use awarded_movies::{run, AwardFilter, PipelineConfig};

/// Join Oscar award records with movie metadata into a report
#[derive(Debug, Parser)]
#[command(name = "awarded-movies", version)]
struct Cli {
    /// Folder holding the award and movie CSV files
    #[arg(long, env = "AWARDED_MOVIES_SOURCE_DIR", default_value = "data")]
    source_dir: PathBuf,

    /// Folder the report is written to (created if missing)
    #[arg(long, env = "AWARDED_MOVIES_DEST_DIR", default_value = "result")]
    dest_dir: PathBuf,

    /// Text encoding of the source files
    #[arg(long, default_value = "utf-8")]
    encoding: String,

    /// Single-byte column delimiter for sources and report
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    #[arg(long, default_value = awarded_movies::config::DEFAULT_AWARDS_FILE)]
    awards_file: String,

    #[arg(long, default_value = awarded_movies::config::DEFAULT_MOVIES_FILE)]
    movies_file: String,

    #[arg(long, default_value = awarded_movies::config::DEFAULT_REPORT_FILE)]
    report_file: String,

    /// Also write a JSON run summary here
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// First film year to include
    #[arg(long, default_value_t = 1986)]
    from_year: i32,

    /// Last film year to include
    #[arg(long, default_value_t = 2016)]
    to_year: i32,

    /// Award category, compared case-insensitively
    #[arg(long, default_value = "best picture")]
    category: String,

    /// Keep nominees as well as winners
    #[arg(long)]
    include_nominees: bool,

    /// More output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn pipeline_config(&self) -> Result<PipelineConfig> {
        if self.from_year > self.to_year {
            bail!(
                "--from-year ({}) must not be after --to-year ({})",
                self.from_year,
                self.to_year
            );
        }

        Ok(PipelineConfig {
            source_dir: self.source_dir.clone(),
            dest_dir: self.dest_dir.clone(),
            encoding: self.encoding.clone(),
            delimiter: self.delimiter,
            awards_file: self.awards_file.clone(),
            movies_file: self.movies_file.clone(),
            report_file: self.report_file.clone(),
            summary_file: self.summary.clone(),
            filter: AwardFilter {
                first_year: self.from_year,
                last_year: self.to_year,
                category: self.category.clone(),
                winners_only: !self.include_nominees,
            },
        })
    }
}

fn parse_delimiter(value: &str) -> std::result::Result<u8, String> {
    match value.as_bytes() {
        [byte] => Ok(*byte),
        _ if value == "\\t" => Ok(b'\t'),
        _ => Err(format!("delimiter must be a single byte, got {value:?}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_flags(cli.verbose, cli.quiet);
    log_config.with_ansi = io::stderr().is_terminal();
    init_logging(&log_config)?;

    let config = cli.pipeline_config()?;

    match run(&config) {
        Ok(summary) => {
            println!(
                "✓ Matched {} movies with awards, report at {}",
                summary.matched_count(),
                summary.report_file.display()
            );
            Ok(())
        }
        Err(error) => {
            tracing::error!("{error}");
            if error.is_startup() {
                eprintln!("❌ Aborting because the experiment cannot be conducted if at least one data set cannot be read.");
            }
            std::process::exit(1);
        }
    }
}
