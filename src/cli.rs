use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cubetrainer - Rubik's Cube scrambles, solve timing and practice tips
#[derive(Parser)]
#[command(name = "cubetrainer")]
#[command(about = "Generate Rubik's Cube scrambles and time your solves")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive terminal trainer
    Tui,
    /// Print one or more scrambles
    Scramble {
        /// Moves per scramble (0 prints an empty scramble)
        #[arg(short, long)]
        length: Option<usize>,
        /// Number of scrambles to print
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Print a numbered explanation for each move
        #[arg(short, long)]
        explain: bool,
        /// Emit JSON messages, one per line
        #[arg(long)]
        json: bool,
    },
    /// Explain a move sequence, e.g. "R U' F2"
    Explain {
        /// Space-separated move tokens
        moves: String,
    },
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        path: PathBuf,
    },
    /// Write a configuration file with default settings
    InitConfig {
        /// Where to write the file
        path: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_args() {
        // Running with no args should succeed (defaults to TUI mode)
        let result = Cli::try_parse_from(["cubetrainer"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_scramble_defaults() {
        let cli = Cli::try_parse_from(["cubetrainer", "scramble"]).unwrap();
        match cli.command {
            Some(Commands::Scramble {
                length,
                count,
                seed,
                explain,
                json,
            }) => {
                assert!(length.is_none());
                assert_eq!(count, 1);
                assert!(seed.is_none());
                assert!(!explain);
                assert!(!json);
            }
            _ => panic!("Expected Scramble command"),
        }
    }

    #[test]
    fn test_cli_scramble_with_options() {
        let cli = Cli::try_parse_from([
            "cubetrainer",
            "scramble",
            "--length",
            "25",
            "-n",
            "3",
            "--seed",
            "42",
            "--explain",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Scramble {
                length,
                count,
                seed,
                explain,
                json,
            }) => {
                assert_eq!(length, Some(25));
                assert_eq!(count, 3);
                assert_eq!(seed, Some(42));
                assert!(explain);
                assert!(json);
            }
            _ => panic!("Expected Scramble command"),
        }
    }

    #[test]
    fn test_cli_rejects_negative_length() {
        let result = Cli::try_parse_from(["cubetrainer", "scramble", "--length", "-3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_explain_command() {
        let cli = Cli::try_parse_from(["cubetrainer", "explain", "R U' F2"]).unwrap();
        match cli.command {
            Some(Commands::Explain { moves }) => assert_eq!(moves, "R U' F2"),
            _ => panic!("Expected Explain command"),
        }
    }

    #[test]
    fn test_cli_validate_with_global_config() {
        let cli = Cli::try_parse_from([
            "cubetrainer",
            "validate",
            "/path/to/config.json",
            "--config",
            "/other.json",
        ])
        .unwrap();
        assert_eq!(cli.config.unwrap().to_str().unwrap(), "/other.json");
        match cli.command {
            Some(Commands::Validate { path }) => {
                assert_eq!(path.to_str().unwrap(), "/path/to/config.json");
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_init_config() {
        let cli = Cli::try_parse_from(["cubetrainer", "init-config", "trainer.json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::InitConfig { .. })));
    }
}
