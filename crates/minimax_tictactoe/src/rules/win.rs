//! Win detection logic for tic-tac-toe.

use crate::position::Move;
use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// The eight winning lines.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Returns the player owning every cell of `line`, if any.
///
/// Each line carries its own empty-cell guard.
fn line_owner(board: &Board, [a, b, c]: [Move; 3]) -> Option<Player> {
    match board.at(a.row, a.col) {
        Cell::Occupied(player)
            if board.at(b.row, b.col) == Cell::Occupied(player)
                && board.at(c.row, c.col) == Cell::Occupied(player) =>
        {
            Some(player)
        }
        _ => None,
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row, column or
/// diagonal, `None` otherwise. On a board where both players own a line
/// (unreachable in legal play) the first line in [`LINES`] order wins.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}

/// Returns every player owning at least one complete line.
pub fn line_owners(board: &Board) -> Vec<Player> {
    let mut owners: Vec<Player> = Vec::with_capacity(2);
    for owner in LINES.into_iter().filter_map(|line| line_owner(board, line)) {
        if !owners.contains(&owner) {
            owners.push(owner);
        }
    }
    owners
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_rows() {
        assert_eq!(winner(&board("XXX/OO./...")), Some(Player::X));
        assert_eq!(winner(&board("X.X/OOO/X..")), Some(Player::O));
        assert_eq!(winner(&board("O.O/O../XXX")), Some(Player::X));
    }

    #[test]
    fn test_winner_columns() {
        assert_eq!(winner(&board("XO./XO./X..")), Some(Player::X));
        assert_eq!(winner(&board("XO./.OX/XO.")), Some(Player::O));
        assert_eq!(winner(&board("O.X/O.X/..X")), Some(Player::X));
    }

    #[test]
    fn test_winner_main_diagonal() {
        assert_eq!(winner(&board("OX./XO./X.O")), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(winner(&board("OOX/.X./X..")), Some(Player::X));
    }

    #[test]
    fn test_anti_diagonal_needs_center() {
        // Corners of the anti-diagonal match but the center is empty.
        assert_eq!(winner(&board("..X/.../X..")), None);
    }

    #[test]
    fn test_matching_empty_diagonals_are_not_wins() {
        // Both diagonals are uniformly empty while a mark sits elsewhere.
        assert_eq!(winner(&board(".X./.../...")), None);
        // Main diagonal fully empty, anti-diagonal broken by an X.
        assert_eq!(winner(&board("..X/.../O..")), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winner(&board("XX./OO./...")), None);
    }

    #[test]
    fn test_line_owners() {
        assert!(line_owners(&board("XX./OO./...")).is_empty());
        assert_eq!(line_owners(&board("XXX/OO./...")), vec![Player::X]);
        assert_eq!(
            line_owners(&board("XXX/OOO/...")),
            vec![Player::X, Player::O]
        );
    }
}
