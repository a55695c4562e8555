//! Perfect tic-tac-toe play through exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Cell`], [`Player`] and [`Move`]
//! - **Rules**: pure queries over boards ([`current_player`],
//!   [`legal_moves`], [`apply_move`], [`winner`], [`is_terminal`], [`utility`])
//! - **Search**: [`best_move`], [`max_value`], [`min_value`] and the
//!   configurable [`Minimax`] engine
//!
//! Boards are immutable values; every move yields a new board.
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{apply_move, best_move, empty_board, is_terminal, utility};
//!
//! let mut board = empty_board();
//! while let Some(mv) = best_move(&board) {
//!     board = apply_move(&board, mv)?;
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board), 0);
//! # Ok::<(), minimax_tictactoe::RulesError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod search;
mod types;

// Crate-level exports - Board model
pub use position::Move;
pub use types::{Board, Cell, Player, SIZE, cell_at, empty_board};

// Crate-level exports - Rules
pub use rules::{
    Utility, apply_move, current_player, is_draw, is_full, is_terminal, legal_moves, to_move,
    utility, winner,
};

// Crate-level exports - Search
pub use search::{Minimax, SearchReport, best_move, max_value, min_value};

// Crate-level exports - Configuration and errors
pub use config::{ConfigError, MoveOrder, SearchConfig};
pub use error::RulesError;
