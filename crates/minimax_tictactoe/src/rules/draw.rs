//! Draw and game-over detection for tic-tac-toe.

use super::win::winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Returns true if the board is full and nobody has three in a row.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

/// Returns true if the game has ended, by a win or a full board.
///
/// A win ends the game immediately even with empty cells left.
#[instrument(level = "trace", skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}
