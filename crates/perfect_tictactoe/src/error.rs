//! Error types for the rules engine.

use crate::action::Action;

/// An action that cannot be applied to a board.
///
/// Raised by [`crate::rules::apply`]. The search only applies actions drawn
/// from [`crate::rules::legal_actions`], so seeing this means the caller
/// handed in an action that did not come from the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidAction {
    /// The coordinates are outside the 3x3 grid.
    #[display("Action {} is off the board", _0)]
    OutOfBounds(Action),

    /// The square at the coordinates is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Action),
}

impl InvalidAction {
    /// Returns the rejected action.
    pub fn action(&self) -> Action {
        match self {
            InvalidAction::OutOfBounds(action) | InvalidAction::SquareOccupied(action) => *action,
        }
    }
}

impl std::error::Error for InvalidAction {}

/// Error parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// The text did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),

    /// The text contained a character that is not a square or separator.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),
}

impl std::error::Error for ParseBoardError {}
