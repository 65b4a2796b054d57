// 📣 Logging - tracing subscriber setup for the CLI
//
// Levels:
//   warn  - skipped rows, unmatched awards
//   info  - stage counts, output paths
//   debug - per-file details

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
    pub with_ansi: bool,
    /// Let RUST_LOG override `level`
    pub use_env_filter: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: Level::INFO,
            with_ansi: true,
            use_env_filter: true,
        }
    }
}

impl LogConfig {
    /// -q → warn, none → info, -v → debug, -vv → trace
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        let level = if quiet {
            Level::WARN
        } else {
            match verbose {
                0 => Level::INFO,
                1 => Level::DEBUG,
                _ => Level::TRACE,
            }
        };
        LogConfig {
            level,
            use_env_filter: verbose == 0 && !quiet,
            ..Default::default()
        }
    }

    fn env_filter(&self) -> EnvFilter {
        let fallback = || EnvFilter::new(self.level.as_str().to_lowercase());
        if self.use_env_filter {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
        } else {
            fallback()
        }
    }
}

/// Install the global subscriber; errors if one is already set
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(layer)
        .try_init()?;
    Ok(())
}
