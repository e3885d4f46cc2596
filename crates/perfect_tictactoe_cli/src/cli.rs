//! Command-line interface for perfect_tictactoe.

use clap::{Parser, Subcommand};
use perfect_tictactoe::{Board, Mark, Pruning};
use std::path::PathBuf;

/// Perfect Tic-Tac-Toe - play against, or consult, an optimal solver
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Tic-tac-toe against a minimax solver", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Missing files are ignored.
    #[arg(short, long, global = true, default_value = "perfect_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game against the solver
    Play {
        /// Mark you play (X moves first)
        #[arg(long)]
        human: Option<Mark>,

        /// Search mode for the solver (alpha-beta or disabled)
        #[arg(long)]
        pruning: Option<Pruning>,
    },

    /// Print the best action for a position
    Solve {
        /// Nine squares in row-major order, e.g. "XX./OO./..."
        board: Board,

        /// Search mode (alpha-beta or disabled)
        #[arg(long)]
        pruning: Option<Pruning>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the solver play both sides from the empty board
    SelfPlay {
        /// Search mode (alpha-beta or disabled)
        #[arg(long)]
        pruning: Option<Pruning>,
    },
}
