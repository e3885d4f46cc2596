//! Perfect Tic-Tac-Toe - command-line front end
//!
//! Plays against the solver, asks it about a position, or watches it play
//! itself.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod play;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::Settings;
use perfect_tictactoe::{
    Board, GameStatus, Mark, SearchOutcome, apply, current_player, initial_state, search, status,
};
use serde::Serialize;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { human, pruning } => {
            let settings = settings.with_overrides(human, pruning);
            let stdin = std::io::stdin();
            play::run_game(stdin.lock(), std::io::stdout(), &settings)?;
            Ok(())
        }
        Command::Solve {
            board,
            pruning,
            json,
        } => {
            let settings = settings.with_overrides(None, pruning);
            run_solve(board, &settings, json)
        }
        Command::SelfPlay { pruning } => {
            let settings = settings.with_overrides(None, pruning);
            run_self_play(&settings)
        }
    }
}

/// Everything `solve` reports about a position.
#[derive(Debug, Serialize)]
struct SolveReport {
    board: String,
    to_move: Mark,
    status: GameStatus,
    #[serde(flatten)]
    outcome: SearchOutcome,
}

/// Print the solver's view of one position
#[instrument(skip(board, settings), fields(board = %board))]
fn run_solve(board: Board, settings: &Settings, json: bool) -> Result<()> {
    let report = SolveReport {
        board: board.to_string(),
        to_move: current_player(&board),
        status: status(&board),
        outcome: search(&board, *settings.pruning()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", board.display());
    match report.outcome.action {
        Some(action) => {
            println!("To move:     {}", report.to_move);
            println!("Best action: {} ({})", action, action.label());
        }
        None => println!("Game over:   {:?}", report.status),
    }
    let verdict = match report.outcome.value {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    };
    println!("Value:       {} ({})", report.outcome.value, verdict);
    println!(
        "Searched:    {} nodes, {} cutoffs",
        report.outcome.nodes, report.outcome.cutoffs
    );
    Ok(())
}

/// Let the solver play both sides
#[instrument(skip(settings), fields(pruning = %settings.pruning()))]
fn run_self_play(settings: &Settings) -> Result<()> {
    info!("Starting self-play");
    let mut board = initial_state();

    while status(&board) == GameStatus::InProgress {
        let mover = current_player(&board);
        let action = play::engine_action(&board, *settings.pruning())?;
        board = apply(&board, action)?;
        println!("{} plays {} ({})", mover, action, action.label());
    }

    println!("\n{}\n", board.display());
    let result = status(&board);
    match result {
        GameStatus::Won(mark) => println!("{} wins", mark),
        _ => println!("Draw"),
    }
    info!(status = ?result, "Self-play finished");
    Ok(())
}
