//! Actions: the square a player marks on their turn.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A `(row, col)` coordinate naming a square to mark.
///
/// Coordinates outside 0-2 are representable so that callers can hand
/// arbitrary input to [`crate::rules::apply`], which rejects them. Whether an
/// action is legal depends on the board it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// Row, 0 (top) to 2 (bottom).
    pub row: u8,
    /// Column, 0 (left) to 2 (right).
    pub col: u8,
}

impl Action {
    /// All nine in-range actions in row-major order.
    pub const ALL: [Action; 9] = [
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 0),
        Action::new(1, 1),
        Action::new(1, 2),
        Action::new(2, 0),
        Action::new(2, 1),
        Action::new(2, 2),
    ];

    const LABELS: [&'static str; 9] = [
        "Top-left",
        "Top-center",
        "Top-right",
        "Middle-left",
        "Center",
        "Middle-right",
        "Bottom-left",
        "Bottom-center",
        "Bottom-right",
    ];

    /// Creates a new action.
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row-major board index (0-8), or `None` if off the board.
    pub fn index(self) -> Option<usize> {
        if self.row < 3 && self.col < 3 {
            Some(self.row as usize * 3 + self.col as usize)
        } else {
            None
        }
    }

    /// Creates the action for a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get label for this action (for display).
    ///
    /// Off-board actions are labelled "Off-board".
    pub fn label(self) -> &'static str {
        self.index()
            .map(|index| Self::LABELS[index])
            .unwrap_or("Off-board")
    }

    /// Parses player input.
    ///
    /// Accepts `row,col` (0-based, comma or space separated), a square
    /// number 1-9 as printed by [`crate::Board::display`], or a square label
    /// such as `center` (case-insensitive). Coordinates are not range
    /// checked here.
    #[instrument]
    pub fn parse(s: &str) -> Option<Action> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        if let [row, col] = parts.as_slice() {
            if let (Ok(row), Ok(col)) = (row.parse::<u8>(), col.parse::<u8>()) {
                return Some(Action::new(row, col));
            }
        }

        if let Ok(number) = s.parse::<usize>() {
            return number.checked_sub(1).and_then(Self::from_index);
        }

        Self::LABELS
            .iter()
            .position(|label| label.eq_ignore_ascii_case(s))
            .and_then(Self::from_index)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for (index, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), Some(index));
            assert_eq!(Action::from_index(index), Some(*action));
        }
        assert_eq!(Action::from_index(9), None);
    }

    #[test]
    fn test_out_of_range_has_no_index() {
        assert_eq!(Action::new(3, 0).index(), None);
        assert_eq!(Action::new(0, 7).index(), None);
        assert_eq!(Action::new(5, 5).label(), "Off-board");
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(Action::parse("1,2"), Some(Action::new(1, 2)));
        assert_eq!(Action::parse(" 2 0 "), Some(Action::new(2, 0)));
        assert_eq!(Action::parse("4,4"), Some(Action::new(4, 4)));
    }

    #[test]
    fn test_parse_square_number() {
        assert_eq!(Action::parse("1"), Some(Action::new(0, 0)));
        assert_eq!(Action::parse("5"), Some(Action::new(1, 1)));
        assert_eq!(Action::parse("9"), Some(Action::new(2, 2)));
        assert_eq!(Action::parse("0"), None);
        assert_eq!(Action::parse("10"), None);
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(Action::parse("center"), Some(Action::new(1, 1)));
        assert_eq!(Action::parse("Bottom-Right"), Some(Action::new(2, 2)));
        assert_eq!(Action::parse("nowhere"), None);
        assert_eq!(Action::parse(""), None);
    }
}
