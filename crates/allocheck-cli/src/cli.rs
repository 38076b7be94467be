//! CLI definition using clap

use std::path::PathBuf;

use allocheck_types::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "allocheck")]
#[command(version)]
#[command(about = "Check whether resource requests fit within fixed capacities")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a scenario. Exits 0 when feasible, 2 when infeasible.
    Check {
        /// JSON scenario file ({"capacities": {...}, "requests": [...]})
        scenario: Option<PathBuf>,

        /// CSV file of capacities (resource,capacity)
        #[arg(long, requires = "requests", conflicts_with = "scenario")]
        capacities: Option<PathBuf>,

        /// CSV file of requests (request,resource,amount)
        #[arg(long, requires = "capacities", conflicts_with = "scenario")]
        requests: Option<PathBuf>,

        /// Accept allocations that consume every resource exactly (overrides config)
        #[arg(long)]
        allow_full: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Require at least one resource to keep leftover capacity
        #[arg(long)]
        set_require_leftover: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_json() {
        let cli =
            Cli::try_parse_from(["allocheck", "check", "scenario.json", "-f", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Check {
                scenario,
                capacities,
                allow_full,
                ..
            } => {
                assert_eq!(scenario, Some(PathBuf::from("scenario.json")));
                assert!(capacities.is_none());
                assert!(!allow_full);
            }
            Commands::Config { .. } => panic!("expected check"),
        }
    }

    #[test]
    fn test_csv_flags_require_each_other() {
        assert!(Cli::try_parse_from(["allocheck", "check", "--capacities", "c.csv"]).is_err());
        assert!(Cli::try_parse_from([
            "allocheck",
            "check",
            "--capacities",
            "c.csv",
            "--requests",
            "r.csv"
        ])
        .is_ok());
    }

    #[test]
    fn test_csv_flags_conflict_with_scenario() {
        assert!(Cli::try_parse_from([
            "allocheck",
            "check",
            "s.json",
            "--capacities",
            "c.csv",
            "--requests",
            "r.csv"
        ])
        .is_err());
    }
}
