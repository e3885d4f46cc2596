//! Win detection logic for tic-tac-toe.

use crate::{Action, Board, Mark, Square};

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Action; 3]; 8] = [
    // Rows
    [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
    [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
    [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
    // Columns
    [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
    [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
    [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
    // Diagonals
    [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark fills any line, `None` otherwise. A
/// board where both marks complete a line cannot arise from legal play;
/// for such a board the first completed line in [`LINES`] order decides.
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|[a, b, c]| {
        let sq = board.get(*a)?;
        if sq != Square::Empty && Some(sq) == board.get(*b) && Some(sq) == board.get(*c) {
            sq.mark()
        } else {
            None
        }
    })
}
