//! Interactive game loop: a human against the solver.

use crate::config::Settings;
use anyhow::{Context, Result, bail};
use perfect_tictactoe::{
    Action, Board, GameStatus, Mark, Pruning, apply, current_player, initial_state, search, status,
};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Plays one game, reading human actions from `input` and writing the board
/// and prompts to `output`.
///
/// Returns the final status. Fails if `input` closes before the game ends.
#[instrument(skip_all, fields(human = %settings.human(), pruning = %settings.pruning()))]
pub fn run_game<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    settings: &Settings,
) -> Result<GameStatus> {
    info!("Starting game");
    let human = *settings.human();
    let mut board = initial_state();

    loop {
        if let done @ (GameStatus::Won(_) | GameStatus::Draw) = status(&board) {
            writeln!(output, "{}\n", board.display())?;
            report(&mut output, done, human)?;
            info!(status = ?done, "Game over");
            return Ok(done);
        }

        if current_player(&board) == human {
            writeln!(output, "{}\n", board.display())?;
            board = read_human_action(&mut input, &mut output, &board)?;
        } else {
            let action = engine_action(&board, *settings.pruning())?;
            writeln!(output, "Engine plays {} ({})", action, action.label())?;
            board = apply(&board, action)?;
        }
    }
}

/// Prompts until the human enters a legal action, returning the new board.
fn read_human_action<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    board: &Board,
) -> Result<Board> {
    loop {
        write!(output, "Your move ({} to play, 1-9 or row,col): ", current_player(board))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read move")? == 0 {
            bail!("Input closed before the game ended");
        }

        let Some(action) = Action::parse(&line) else {
            writeln!(output, "Could not read {:?} as a square", line.trim())?;
            continue;
        };

        match apply(board, action) {
            Ok(next) => {
                debug!(%action, "Human move accepted");
                return Ok(next);
            }
            Err(e) => {
                warn!(error = %e, "Rejected human move");
                writeln!(output, "{}", e)?;
            }
        }
    }
}

/// Asks the solver for the side to move.
#[instrument(skip(board), fields(board = %board))]
pub fn engine_action(board: &Board, pruning: Pruning) -> Result<Action> {
    let outcome = search(board, pruning);
    debug!(value = outcome.value, nodes = outcome.nodes, "Engine searched");
    outcome
        .action
        .context("Engine asked to move on a finished board")
}

fn report<W: Write>(output: &mut W, done: GameStatus, human: Mark) -> Result<()> {
    match done {
        GameStatus::Won(mark) if mark == human => writeln!(output, "You win!")?,
        GameStatus::Won(mark) => writeln!(output, "{} wins. The engine takes it.", mark)?,
        GameStatus::Draw => writeln!(output, "It's a draw.")?,
        GameStatus::InProgress => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn settings(human: Mark) -> Settings {
        Settings::default().with_overrides(Some(human), None)
    }

    #[test]
    fn test_human_never_beats_engine() {
        // Try every square in order each turn; occupied ones get rejected.
        let moves = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(5);
        for human in [Mark::X, Mark::O] {
            let mut output = Vec::new();
            let result = run_game(Cursor::new(moves.clone()), &mut output, &settings(human)).unwrap();
            assert_ne!(result, GameStatus::Won(human));
            assert_ne!(result, GameStatus::InProgress);
        }
    }

    #[test]
    fn test_bad_input_is_reported() {
        let moves = "banana\n5\n".to_string() + &"1\n2\n3\n4\n6\n7\n8\n9\n".repeat(5);
        let mut output = Vec::new();
        run_game(Cursor::new(moves), &mut output, &settings(Mark::X)).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Could not read \"banana\" as a square"));
    }

    #[test]
    fn test_occupied_square_is_reported() {
        let moves = "5\n5\n".to_string() + &"1\n2\n3\n4\n6\n7\n8\n9\n".repeat(5);
        let mut output = Vec::new();
        run_game(Cursor::new(moves), &mut output, &settings(Mark::X)).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Square (1, 1) is already occupied"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut output = Vec::new();
        let err = run_game(Cursor::new(""), &mut output, &settings(Mark::X)).unwrap_err();
        assert!(err.to_string().contains("Input closed"));
    }

    #[test]
    fn test_engine_action_on_finished_board() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(engine_action(&board, Pruning::AlphaBeta).is_err());
    }
}
