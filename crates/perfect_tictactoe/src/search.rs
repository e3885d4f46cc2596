//! Minimax search with alpha-beta pruning.
//!
//! X maximizes the utility of [`rules::utility`](crate::rules::utility) and O
//! minimizes it. The game tree is small enough (at most nine plies, under
//! 550,000 nodes unpruned) to be searched to the end every time, so there is
//! no depth limit, heuristic evaluation or transposition table.
//!
//! Children are visited in row-major order and the best action only changes
//! on a strict improvement, so among equally good actions the first one in
//! row-major order is returned.
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Action, Board, minimax};
//!
//! // X to move, with two in the top row.
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(minimax(&board), Some(Action::new(0, 2)));
//! ```

use crate::rules::{current_player, is_terminal, transition::successors, utility};
use crate::{Action, Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bound below every utility.
const NEG_INF: i32 = i32::MIN;
/// Bound above every utility.
const POS_INF: i32 = i32::MAX;

/// Whether the search may skip subtrees that cannot change the result.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Pruning {
    /// Fail-hard alpha-beta cutoffs.
    #[default]
    AlphaBeta,
    /// Plain minimax: every node is visited.
    Disabled,
}

/// Result of searching one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Game value under optimal play from both sides, from X's point of view.
    pub value: i8,
    /// Optimal action for the player to move; `None` on a terminal board.
    pub action: Option<Action>,
    /// Number of positions visited, root included.
    pub nodes: u64,
    /// Number of times a sibling loop was cut short.
    pub cutoffs: u64,
}

/// Returns the optimal action for the player to move.
///
/// Returns `None` if the board is already terminal: there is no move to make.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax(board: &Board) -> Option<Action> {
    search(board, Pruning::AlphaBeta).action
}

/// Searches `board` to the end of the game and reports value, action and
/// effort.
///
/// The value does not depend on `pruning`; only `nodes` and `cutoffs` do.
#[instrument(skip(board), fields(board = %board))]
pub fn search(board: &Board, pruning: Pruning) -> SearchOutcome {
    let mut searcher = Searcher {
        pruning,
        nodes: 0,
        cutoffs: 0,
    };

    let (value, action) = match current_player(board) {
        Mark::X => searcher.max_value(board, NEG_INF, POS_INF),
        Mark::O => searcher.min_value(board, NEG_INF, POS_INF),
    };

    // Every returned value is a leaf utility in -1..=1.
    let value = value as i8;
    debug!(
        value,
        action = ?action,
        nodes = searcher.nodes,
        cutoffs = searcher.cutoffs,
        "Search complete"
    );

    SearchOutcome {
        value,
        action,
        nodes: searcher.nodes,
        cutoffs: searcher.cutoffs,
    }
}

/// Per-search counters. Lives for one call to [`search`].
struct Searcher {
    pruning: Pruning,
    nodes: u64,
    cutoffs: u64,
}

impl Searcher {
    /// Best value X can force from `board`, searching within `(alpha, beta)`.
    fn max_value(&mut self, board: &Board, mut alpha: i32, beta: i32) -> (i32, Option<Action>) {
        self.nodes += 1;
        if is_terminal(board) {
            return (i32::from(utility(board)), None);
        }

        let mut value = NEG_INF;
        let mut best = None;
        for (action, child) in successors(board) {
            let (child_value, _) = self.min_value(&child, alpha, beta);
            if child_value > value {
                value = child_value;
                best = Some(action);
            }
            if self.pruning == Pruning::AlphaBeta {
                if value >= beta {
                    self.cutoffs += 1;
                    break;
                }
                alpha = alpha.max(value);
            }
        }
        (value, best)
    }

    /// Best value O can force from `board`, searching within `(alpha, beta)`.
    fn min_value(&mut self, board: &Board, alpha: i32, mut beta: i32) -> (i32, Option<Action>) {
        self.nodes += 1;
        if is_terminal(board) {
            return (i32::from(utility(board)), None);
        }

        let mut value = POS_INF;
        let mut best = None;
        for (action, child) in successors(board) {
            let (child_value, _) = self.max_value(&child, alpha, beta);
            if child_value < value {
                value = child_value;
                best = Some(action);
            }
            if self.pruning == Pruning::AlphaBeta {
                if value <= alpha {
                    self.cutoffs += 1;
                    break;
                }
                beta = beta.min(value);
            }
        }
        (value, best)
    }
}
