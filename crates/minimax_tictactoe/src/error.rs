//! Error types for board queries and move validation.

use derive_more::Display;

/// Error raised when a board query or move is rejected by the rules.
///
/// Every variant describes bad input from a caller. Drivers can match on the
/// variant to re-prompt a human player instead of aborting the game.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RulesError {
    /// A coordinate outside 0..=2 was used to index or move.
    #[display("Coordinate ({}, {}) is out of range (rows and columns are 0-2)", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The move targets a cell that already holds a mark.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },

    /// External move input did not resolve to exactly one (row, col) pair.
    #[display("Malformed move {:?}: expected two integers such as \"1,2\"", input)]
    MalformedMove {
        /// The rejected input, as received.
        input: String,
    },

    /// Board text could not be parsed into a 3x3 grid.
    #[display("Malformed board {:?}: {}", input, reason)]
    MalformedBoard {
        /// The rejected input, as received.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl std::error::Error for RulesError {}

impl RulesError {
    /// Returns true if a driver should report the error and ask again.
    ///
    /// All rules errors stem from caller input. Internal search failures are
    /// never represented by this type.
    pub fn is_recoverable(&self) -> bool {
        match self {
            RulesError::OutOfRange { .. }
            | RulesError::CellOccupied { .. }
            | RulesError::MalformedMove { .. }
            | RulesError::MalformedBoard { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = RulesError::OutOfRange { row: 3, col: 0 };
        assert_eq!(
            err.to_string(),
            "Coordinate (3, 0) is out of range (rows and columns are 0-2)"
        );
    }

    #[test]
    fn test_cell_occupied_display() {
        let err = RulesError::CellOccupied { row: 1, col: 1 };
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_malformed_move_display() {
        let err = RulesError::MalformedMove {
            input: "a,b".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed move \"a,b\": expected two integers such as \"1,2\""
        );
    }

    #[test]
    fn test_all_variants_recoverable() {
        assert!(RulesError::OutOfRange { row: 9, col: 9 }.is_recoverable());
        assert!(RulesError::CellOccupied { row: 0, col: 0 }.is_recoverable());
        assert!(
            RulesError::MalformedBoard {
                input: String::new(),
                reason: "empty".to_string(),
            }
            .is_recoverable()
        );
    }
}
