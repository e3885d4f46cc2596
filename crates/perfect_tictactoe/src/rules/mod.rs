//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions over [`Board`](crate::Board) values:
//! whose turn it is, which actions are legal, what board an action produces,
//! and whether and how the game has ended. Nothing here keeps state between
//! calls.

pub mod terminal;
pub mod transition;
pub mod win;

pub use terminal::{is_full, is_terminal, status, utility};
pub use transition::{apply, current_player, legal_actions};
pub use win::winner;
