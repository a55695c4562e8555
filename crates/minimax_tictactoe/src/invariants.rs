//! Reachability invariants for tic-tac-toe boards.
//!
//! Boards built with [`Board::from_rows`] or parsed from text can hold
//! positions that legal play never produces. These invariants describe what
//! every board reached from the empty board through [`crate::apply_move`]
//! satisfies. The search checks them on its input and logs violations.

use crate::rules::line_owners;
use crate::types::{Board, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X has as many marks as O, or exactly one more.
pub struct MarkBalance;

impl Invariant<Board> for MarkBalance {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// Invariant: at most one player owns a complete line.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        line_owners(board).len() <= 1
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}

/// Every invariant a board reached through legal play satisfies.
pub type ReachableBoard = (MarkBalance, SingleWinner);

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_empty_board_holds() {
        assert!(ReachableBoard::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_mark_balance() {
        assert!(MarkBalance::holds(&board("X../.../...")));
        assert!(MarkBalance::holds(&board("X../.O./...")));
        assert!(!MarkBalance::holds(&board("O../.../...")));
        assert!(!MarkBalance::holds(&board("XX./.../...")));
    }

    #[test]
    fn test_single_winner() {
        assert!(SingleWinner::holds(&board("XXX/OO./...")));
        assert!(!SingleWinner::holds(&board("XXX/OOO/...")));
    }

    #[test]
    fn test_violations_are_collected() {
        let violations = ReachableBoard::check_all(&board("XXX/XOO/OOO")).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, MarkBalance::description());
        assert_eq!(violations[1].description, SingleWinner::description());
    }
}
