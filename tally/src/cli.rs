//! Command-line arguments for the `tally` binary.

use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Tally: sum non-negative numbers, failing on the first negative one
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(version)]
#[command(about = "Sums a list of numbers and reports the first negative value")]
pub struct Args {
    /// Numbers to sum. Overrides the config file and the built-in list.
    #[arg(value_name = "NUMBERS", allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Path to a TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (at least DEBUG level).
    #[arg(short, long)]
    pub verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Effective log level. `--verbose` raises the level to DEBUG but
    /// never below a more verbose level from the config.
    pub fn log_level(&self, config_level: Level) -> Level {
        if self.verbose {
            // tracing orders more verbose levels as greater.
            config_level.max(Level::DEBUG)
        } else {
            config_level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["tally"]).unwrap();
        assert!(args.numbers.is_empty());
        assert!(args.config.is_none());
        assert!(!args.verbose);
        assert!(!args.json);
    }

    #[test]
    fn test_negative_positionals() {
        let args = Args::try_parse_from(["tally", "1", "-1", "5"]).unwrap();
        assert_eq!(args.numbers, vec![1, -1, 5]);
    }

    #[test]
    fn test_flags() {
        let args =
            Args::try_parse_from(["tally", "--config", "t.toml", "-v", "--json", "3"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("t.toml")));
        assert!(args.verbose);
        assert!(args.json);
        assert_eq!(args.numbers, vec![3]);
    }

    #[test]
    fn test_log_level_from_config_without_verbose() {
        let args = Args::try_parse_from(["tally"]).unwrap();
        assert_eq!(args.log_level(Level::WARN), Level::WARN);
        assert_eq!(args.log_level(Level::TRACE), Level::TRACE);
    }

    #[test]
    fn test_verbose_raises_to_debug() {
        let args = Args::try_parse_from(["tally", "-v"]).unwrap();
        assert_eq!(args.log_level(Level::INFO), Level::DEBUG);
        assert_eq!(args.log_level(Level::ERROR), Level::DEBUG);
    }

    #[test]
    fn test_verbose_keeps_config_trace() {
        let args = Args::try_parse_from(["tally", "--verbose"]).unwrap();
        assert_eq!(args.log_level(Level::TRACE), Level::TRACE);
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(Args::try_parse_from(["tally", "ten"]).is_err());
    }
}
