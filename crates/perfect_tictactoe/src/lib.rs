//! Perfect tic-tac-toe - game rules and an optimal-move solver
//!
//! This library models a 3x3 tic-tac-toe board and finds the best move for
//! whoever is to play, by searching the whole remaining game tree with
//! minimax and alpha-beta pruning.
//!
//! # Architecture
//!
//! - **Board model** ([`Board`], [`Square`], [`Mark`]): plain `Copy` values
//! - **Rules** ([`rules`]): turn order, legal actions, transitions, game end
//! - **Search** ([`search()`], [`minimax`]): optimal play for the side to move
//!
//! Every operation is a pure function of its arguments. A front end owns the
//! game loop and calls in with a board.
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{initial_state, is_terminal, minimax, apply, utility};
//!
//! let mut board = initial_state();
//! while !is_terminal(&board) {
//!     let action = minimax(&board).expect("non-terminal board has a move");
//!     board = apply(&board, action).expect("solver only picks legal actions");
//! }
//! // Perfect play from both sides always ends in a draw.
//! assert_eq!(utility(&board), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
pub mod rules;
mod search;
mod types;

// Crate-level exports - Board model
pub use types::{Board, GameStatus, Mark, Square};

// Crate-level exports - Actions and errors
pub use action::Action;
pub use error::{InvalidAction, ParseBoardError};

// Crate-level exports - Rules engine
pub use rules::{
    apply, current_player, is_full, is_terminal, legal_actions, status, utility, winner,
};

// Crate-level exports - Search engine
pub use search::{Pruning, SearchOutcome, minimax, search};

/// Returns the starting position: all nine squares empty.
pub fn initial_state() -> Board {
    Board::new()
}
