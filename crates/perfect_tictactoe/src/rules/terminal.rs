//! Terminal-state detection and scoring.

use super::win::winner;
use crate::{Board, GameStatus, Mark, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the game is over: someone has won or the board is full.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a finished game from X's point of view.
///
/// Returns `1` if X won, `-1` if O won and `0` otherwise. Only meaningful on
/// a terminal board: a game still in progress with no winner also scores
/// `0`, so callers check [`is_terminal`] before trusting the result.
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        None => 0,
    }
}

/// Summarizes the board as in progress, won, or drawn.
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(mark) => GameStatus::Won(mark),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_terminal(&board));
        assert_eq!(status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_terminal(&board));
        assert_eq!(winner(&board), None);
        assert_eq!(utility(&board), 0);
        assert_eq!(status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_win_is_terminal_before_full() {
        let board: Board = "OOO/XX./X..".parse().unwrap();
        assert!(!is_full(&board));
        assert!(is_terminal(&board));
        assert_eq!(utility(&board), -1);
        assert_eq!(status(&board), GameStatus::Won(Mark::O));
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        let board: Board = "XOX/OXO/OXX".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(utility(&board), 1);
        assert_eq!(status(&board), GameStatus::Won(Mark::X));
    }
}
