//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Toy antivirus: a signature-scanning simulator over mock files
#[derive(Parser, Debug)]
#[command(name = "toy-antivirus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for SCAN and REPORT (text, json)
    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Use this configuration file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session (the default)
    Shell {
        /// Treat unparsable LOAD sizes as 0 instead of rejecting them
        #[arg(long)]
        lenient_sizes: bool,
    },

    /// Run commands from a script file, one per line
    Run {
        /// Script to execute
        script: PathBuf,

        /// Print each command before its output
        #[arg(long)]
        echo: bool,

        /// Treat unparsable LOAD sizes as 0 instead of rejecting them
        #[arg(long)]
        lenient_sizes: bool,
    },

    /// Configure settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show application information
    Info,
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_is_shell() {
        let cli = Cli::try_parse_from(["toy-antivirus"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_run_script() {
        let cli = Cli::try_parse_from([
            "toy-antivirus",
            "--format",
            "json",
            "run",
            "demo.txt",
            "--echo",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Some(Commands::Run {
                script,
                echo,
                lenient_sizes,
            }) => {
                assert_eq!(script, PathBuf::from("demo.txt"));
                assert!(echo);
                assert!(!lenient_sizes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let cli = Cli::try_parse_from(["toy-antivirus", "info", "--quiet"]).unwrap();
        assert!(cli.quiet);
        assert!(Cli::try_parse_from(["toy-antivirus", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["toy-antivirus", "shell", "-v", "--lenient-sizes"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
        assert!(matches!(
            cli.command,
            Some(Commands::Shell { lenient_sizes: true })
        ));
    }
}
