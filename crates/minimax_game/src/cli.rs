//! Command-line interface for minimax_game.

use clap::{Parser, Subcommand};
use minimax_core::Board;
use std::path::PathBuf;

/// Minimax Tic-Tac-Toe - play against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "minimax_game")]
#[command(about = "Tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML config file (defaults to minimax_game.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Let the computer open the game
        #[arg(long)]
        computer_first: bool,

        /// Where to write the log
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Print the outcome of a board, e.g. "XOX/.O./X.."
    Evaluate {
        /// Nine cells, row-major; X, O and . (rows may be split with /)
        #[arg(allow_hyphen_values = true)]
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the computer's move for a board
    Suggest {
        /// Nine cells, row-major; X, O and . (rows may be split with /)
        #[arg(allow_hyphen_values = true)]
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also list every candidate with its utility
        #[arg(short, long)]
        verbose: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_defaults() {
        let cli = Cli::try_parse_from(["minimax_game", "play"]).unwrap();
        match cli.command {
            Command::Play {
                config,
                delay_ms,
                computer_first,
                log_file,
            } => {
                assert_eq!(config, None);
                assert_eq!(delay_ms, None);
                assert!(!computer_first);
                assert_eq!(log_file, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_play_overrides() {
        let cli = Cli::try_parse_from([
            "minimax_game",
            "play",
            "--delay-ms",
            "0",
            "--computer-first",
            "--config",
            "game.toml",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                config,
                delay_ms,
                computer_first,
                ..
            } => {
                assert_eq!(config, Some(PathBuf::from("game.toml")));
                assert_eq!(delay_ms, Some(0));
                assert!(computer_first);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_board_argument_is_parsed() {
        let cli = Cli::try_parse_from(["minimax_game", "suggest", "XX./OO./X..", "--json", "-v"])
            .unwrap();
        match cli.command {
            Command::Suggest {
                board,
                json,
                verbose,
            } => {
                assert_eq!(board, "XX./OO./X..".parse::<Board>().unwrap());
                assert!(json);
                assert!(verbose);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_board_may_start_with_dash() {
        let cli = Cli::try_parse_from(["minimax_game", "evaluate", "---/.X./..."]).unwrap();
        match cli.command {
            Command::Evaluate { board, json } => {
                assert_eq!(board, ".../.X./...".parse::<Board>().unwrap());
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }

        let cli =
            Cli::try_parse_from(["minimax_game", "suggest", "-X-/.O./...", "--verbose"]).unwrap();
        assert!(matches!(cli.command, Command::Suggest { verbose: true, .. }));
    }

    #[test]
    fn test_bad_board_is_rejected() {
        assert!(Cli::try_parse_from(["minimax_game", "evaluate", "XXZ/.../..."]).is_err());
        assert!(Cli::try_parse_from(["minimax_game", "evaluate", "XX"]).is_err());
    }
}
