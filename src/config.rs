//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

/// Default location of the library snapshot
pub const DEFAULT_SNAPSHOT: &str = "myLibrary.json";

/// Build a library of random print editions, take some books and snapshot it
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// JSON file the library is saved to and loaded from
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SNAPSHOT)]
    pub snapshot: PathBuf,

    /// Number of editions to generate (prompted for when omitted)
    #[arg(short = 'n', long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub count: Option<u32>,

    /// Seed for the random generator, for reproducible runs
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Default tracing filter directive, overridden by `RUST_LOG`
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { snapshot: PathBuf::from(DEFAULT_SNAPSHOT), count: None, seed: None, verbose: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_empty_command_line() -> Result<(), clap::Error> {
        let parsed = Config::try_parse_from(["print-library"])?;
        assert_eq!(parsed, Config::default());
        assert_eq!(parsed.log_filter(), "warn");
        Ok(())
    }

    #[test]
    fn test_all_flags() -> Result<(), clap::Error> {
        let parsed = Config::try_parse_from([
            "print-library",
            "--snapshot",
            "out/library.json",
            "-n",
            "12",
            "--seed",
            "99",
            "-v",
        ])?;

        assert_eq!(parsed.snapshot, PathBuf::from("out/library.json"));
        assert_eq!(parsed.count, Some(12));
        assert_eq!(parsed.seed, Some(99));
        assert_eq!(parsed.log_filter(), "debug");
        Ok(())
    }

    #[test]
    fn test_zero_count_rejected() {
        assert!(Config::try_parse_from(["print-library", "--count", "0"]).is_err());
        assert!(Config::try_parse_from(["print-library", "--count", "-3"]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
