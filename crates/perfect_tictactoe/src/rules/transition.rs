//! Turn order, move generation and the board transition.

use crate::{Action, Board, InvalidAction, Mark, Square};
use tracing::{instrument, trace};

/// Returns the mark that moves next.
///
/// X moves when both marks have been placed equally often, O otherwise.
/// The answer is still defined once the game is over, but carries no
/// meaning there; check [`super::is_terminal`] first.
pub fn current_player(board: &Board) -> Mark {
    if board.count(Mark::X) == board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

/// Returns every action naming an empty square, in row-major order.
///
/// The list is empty exactly when the board is full. It is not empty on a
/// won board with free squares; terminality is a separate question.
pub fn legal_actions(board: &Board) -> Vec<Action> {
    Action::ALL
        .iter()
        .copied()
        .filter(|action| board.is_empty(*action))
        .collect()
}

/// Returns the board produced by the current player marking `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidAction::OutOfBounds`] if the coordinates are off the
/// grid and [`InvalidAction::SquareOccupied`] if the square is taken.
#[instrument(level = "trace", skip(board), fields(board = %board, %action))]
pub fn apply(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    let index = action.index().ok_or(InvalidAction::OutOfBounds(action))?;
    if board.squares()[index] != Square::Empty {
        return Err(InvalidAction::SquareOccupied(action));
    }

    let mark = current_player(board);
    trace!(%mark, "Placing mark");
    Ok(board.with_square(index, Square::Occupied(mark)))
}

/// Yields each legal action together with the board it produces.
///
/// Equivalent to calling [`apply`] on every entry of [`legal_actions`], minus
/// the error path, which cannot trigger for actions taken from the board
/// itself.
pub(crate) fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    let mark = Square::Occupied(current_player(board));
    board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, square)| **square == Square::Empty)
        .filter_map(move |(index, _)| {
            Action::from_index(index).map(|action| (action, board.with_square(index, mark)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first() {
        assert_eq!(current_player(&Board::new()), Mark::X);
    }

    #[test]
    fn test_single_x_gives_o_the_move() {
        let board = apply(&Board::new(), Action::new(0, 0)).unwrap();
        assert_eq!(current_player(&board), Mark::O);
        assert_eq!(legal_actions(&board).len(), 8);
        assert!(!legal_actions(&board).contains(&Action::new(0, 0)));
    }

    #[test]
    fn test_legal_actions_row_major() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        assert_eq!(
            legal_actions(&board),
            vec![
                Action::new(0, 1),
                Action::new(1, 0),
                Action::new(1, 2),
                Action::new(2, 1),
                Action::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_full_board_has_no_actions() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(legal_actions(&board).is_empty());
    }

    #[test]
    fn test_apply_places_current_mark() {
        let board: Board = "X../.../...".parse().unwrap();
        let next = apply(&board, Action::new(1, 1)).unwrap();
        assert_eq!(next.get(Action::new(1, 1)), Some(Square::Occupied(Mark::O)));
    }

    #[test]
    fn test_apply_occupied_square_fails() {
        let board = apply(&Board::new(), Action::new(1, 1)).unwrap();
        let before = board;
        assert_eq!(
            apply(&board, Action::new(1, 1)),
            Err(InvalidAction::SquareOccupied(Action::new(1, 1)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_out_of_bounds_fails() {
        assert_eq!(
            apply(&Board::new(), Action::new(0, 3)),
            Err(InvalidAction::OutOfBounds(Action::new(0, 3)))
        );
    }

    #[test]
    fn test_successors_match_apply() {
        let board: Board = "X.O/.X./...".parse().unwrap();
        let children: Vec<_> = successors(&board).collect();
        assert_eq!(children.len(), legal_actions(&board).len());
        for (action, child) in children {
            assert_eq!(apply(&board, action), Ok(child));
        }
    }
}
