//! CLI argument definitions for the Zonewise application.
//!
//! Uses `clap` with derive macros. Priority resolution:
//! CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Zonewise: a rule-based chat assistant for urban risk statistics.
#[derive(Parser, Debug)]
#[command(name = "zonewise", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Directory holding the history and catalog files.
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > ZONEWISE_CONFIG env var > ./zonewise.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("ZONEWISE_CONFIG") {
            return PathBuf::from(p);
        }
        PathBuf::from("zonewise.toml")
    }

    /// Resolve the data directory.
    ///
    /// Priority: --data-dir flag > config file value.
    pub fn resolve_data_dir(&self, config_dir: &str) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(config_dir))
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("zonewise").chain(argv.iter().copied()))
    }

    #[test]
    fn test_config_flag_wins() {
        let a = args(&["--config", "/tmp/z.toml"]);
        assert_eq!(a.resolve_config_path(), PathBuf::from("/tmp/z.toml"));
    }

    #[test]
    fn test_data_dir_falls_back_to_config() {
        let a = args(&[]);
        assert_eq!(a.resolve_data_dir("data"), PathBuf::from("data"));
        let a = args(&["--data-dir", "/srv/zonewise"]);
        assert_eq!(a.resolve_data_dir("data"), PathBuf::from("/srv/zonewise"));
    }

    #[test]
    fn test_log_level_falls_back_to_config() {
        let a = args(&[]);
        assert_eq!(a.resolve_log_level("info"), "info");
        let a = args(&["-l", "debug"]);
        assert_eq!(a.resolve_log_level("info"), "debug");
    }
}
