//! Exhaustive minimax search.
//!
//! X maximizes [`utility`], O minimizes it. Every line of play is followed to
//! a terminal board. No pruning and no caching: the tree has at most nine
//! plies and a little over half a million nodes.

use crate::config::SearchConfig;
use crate::invariants::{InvariantSet, ReachableBoard};
use crate::position::Move;
use crate::rules::{Utility, apply_move, current_player, is_terminal, legal_moves, utility};
use crate::types::{Board, Player};
use derive_getters::Getters;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, trace, warn};

/// Outcome of searching one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen move, `None` when the position is already over.
    best_move: Option<Move>,
    /// Value guaranteed by the chosen move (the utility on terminal boards).
    value: Utility,
    /// Boards visited, the searched position included.
    nodes: u64,
}

/// Minimax engine.
///
/// Among equally good moves both players keep the first one in the
/// configured [`MoveOrder`](crate::MoveOrder), so results are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    config: SearchConfig,
}

impl Minimax {
    /// Creates an engine with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the optimal move for the player to move, or `None` if the
    /// game is over.
    pub fn best_move(&self, board: &Board) -> Option<Move> {
        self.analyze(board).best_move
    }

    /// Searches `board` and reports the chosen move, its value and the
    /// number of boards visited.
    #[instrument(
        skip(self, board),
        fields(move_order = %self.config.move_order(), parallel = *self.config.parallel_root())
    )]
    pub fn analyze(&self, board: &Board) -> SearchReport {
        warn_if_unreachable(board);

        if is_terminal(board) {
            debug!("Position is terminal, no move to search");
            return SearchReport {
                best_move: None,
                value: utility(board),
                nodes: 1,
            };
        }

        let player = current_player(board);
        let (scored, nodes) = self.score_root(board, player);

        let mut best: Option<(Move, Utility)> = None;
        for &(mv, value) in &scored {
            trace!(%mv, value, "Root move scored");
            let improves = match best {
                None => true,
                Some((_, best_value)) => match player {
                    Player::X => value > best_value,
                    Player::O => value < best_value,
                },
            };
            if improves {
                best = Some((mv, value));
            }
        }

        let Some((mv, value)) = best else {
            unreachable!("a non-terminal board always has an empty cell");
        };
        debug!(%player, best_move = %mv, value, nodes, "Search complete");
        SearchReport {
            best_move: Some(mv),
            value,
            nodes,
        }
    }

    /// Returns every move achieving the minimax value, in move order.
    ///
    /// Empty when the game is over.
    #[instrument(skip(self, board))]
    pub fn optimal_moves(&self, board: &Board) -> Vec<Move> {
        if is_terminal(board) {
            return Vec::new();
        }

        let player = current_player(board);
        let (scored, _) = self.score_root(board, player);
        let target = match player {
            Player::X => scored.iter().map(|&(_, v)| v).max(),
            Player::O => scored.iter().map(|&(_, v)| v).min(),
        };

        scored
            .into_iter()
            .filter(|&(_, v)| Some(v) == target)
            .map(|(mv, _)| mv)
            .collect()
    }

    /// Returns the minimax value of `board` with the current player to move.
    pub fn evaluate(&self, board: &Board) -> Utility {
        let mut nodes = 0;
        match current_player(board) {
            Player::X => max_value_counted(board, &mut nodes),
            Player::O => min_value_counted(board, &mut nodes),
        }
    }

    /// Scores each root move in move order.
    ///
    /// Returns the scores and the node count including the root.
    fn score_root(&self, board: &Board, player: Player) -> (Vec<(Move, Utility)>, u64) {
        let moves = self.config.move_order().arrange(legal_moves(board));

        let score = |mv: Move| -> (Move, Utility, u64) {
            let next = successor(board, mv);
            let mut nodes = 0;
            let value = match player {
                Player::X => min_value_counted(&next, &mut nodes),
                Player::O => max_value_counted(&next, &mut nodes),
            };
            (mv, value, nodes)
        };

        // Indexed collect keeps move order, so the reduction sees the same
        // sequence either way.
        let scored: Vec<(Move, Utility, u64)> = if *self.config.parallel_root() {
            moves.into_par_iter().map(score).collect()
        } else {
            moves.into_iter().map(score).collect()
        };

        let nodes = 1 + scored.iter().map(|&(_, _, n)| n).sum::<u64>();
        let scores = scored.into_iter().map(|(mv, v, _)| (mv, v)).collect();
        (scores, nodes)
    }
}

/// Returns the optimal move for the player to move on `board`, or `None` if
/// the game is over. Uses the default configuration (row-major tie-break).
pub fn best_move(board: &Board) -> Option<Move> {
    Minimax::default().best_move(board)
}

/// Value of `board` when X (the maximizer) is to move.
pub fn max_value(board: &Board) -> Utility {
    let mut nodes = 0;
    max_value_counted(board, &mut nodes)
}

/// Value of `board` when O (the minimizer) is to move.
pub fn min_value(board: &Board) -> Utility {
    let mut nodes = 0;
    min_value_counted(board, &mut nodes)
}

fn max_value_counted(board: &Board, nodes: &mut u64) -> Utility {
    *nodes += 1;
    if is_terminal(board) {
        return utility(board);
    }

    let mut best = Utility::MIN;
    for mv in legal_moves(board) {
        best = best.max(min_value_counted(&successor(board, mv), nodes));
    }
    best
}

fn min_value_counted(board: &Board, nodes: &mut u64) -> Utility {
    *nodes += 1;
    if is_terminal(board) {
        return utility(board);
    }

    let mut best = Utility::MAX;
    for mv in legal_moves(board) {
        best = best.min(max_value_counted(&successor(board, mv), nodes));
    }
    best
}

/// Applies a move produced by [`legal_moves`].
///
/// A rejection here means move generation is broken, which no caller can
/// recover from.
fn successor(board: &Board, mv: Move) -> Board {
    match apply_move(board, mv) {
        Ok(next) => next,
        Err(e) => {
            error!(%mv, error = %e, "Search generated an illegal move");
            panic!("search generated illegal move {mv} on board\n{board}\n{e}");
        }
    }
}

fn warn_if_unreachable(board: &Board) {
    if let Err(violations) = ReachableBoard::check_all(board) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%board, violations = %descriptions, "Searching a board not reachable through legal play");
    }
}
