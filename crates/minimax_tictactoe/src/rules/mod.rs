//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions over [`Board`] values. Nothing here
//! mutates a board: [`apply_move`] returns a fresh board, and whose turn it
//! is always comes from counting marks rather than from stored state.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full, is_terminal};
pub use win::{LINES, line_owners, winner};

use crate::error::RulesError;
use crate::position::Move;
use crate::types::{Board, Cell, Player};
use tracing::{instrument, trace};

/// Signed outcome from X's point of view: +1 X won, -1 O won, 0 otherwise.
pub type Utility = i8;

/// Returns the player whose turn it is.
///
/// X moves first, so X is to move whenever the mark counts are equal and O
/// is to move when X has one more mark. On a terminal board the result is
/// computed the same way but means nothing; check [`is_terminal`] first or
/// use [`to_move`].
pub fn current_player(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Returns the player to move, or `None` once the game is over.
#[instrument(level = "trace", skip(board))]
pub fn to_move(board: &Board) -> Option<Player> {
    if is_terminal(board) {
        None
    } else {
        Some(current_player(board))
    }
}

/// Returns every empty cell as a move, in row-major order without repeats.
///
/// A full board yields no moves.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    board
        .cells()
        .filter(|&(_, _, cell)| cell.is_empty())
        .map(|(row, col, _)| Move::new(row, col))
        .collect()
}

/// Returns the board after the current player marks `mv`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// - [`RulesError::OutOfRange`] if the row or column is outside 0..=2.
/// - [`RulesError::CellOccupied`] if the target cell already holds a mark.
#[instrument(level = "trace", skip(board, mv), fields(row = mv.row, col = mv.col))]
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, RulesError> {
    let cell = board.cell_at(mv.row, mv.col)?;
    if !cell.is_empty() {
        return Err(RulesError::CellOccupied {
            row: mv.row,
            col: mv.col,
        });
    }

    let player = current_player(board);
    trace!(%player, "Placing mark");
    Ok(board.with_cell(mv.row, mv.col, Cell::Occupied(player)))
}

/// Returns the utility of a finished game.
///
/// Only meaningful on terminal boards; any board without a winner scores 0.
pub fn utility(board: &Board) -> Utility {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
