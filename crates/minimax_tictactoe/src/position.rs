//! Move coordinates and parsing of untyped move input.

use crate::error::RulesError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A move: the (row, col) coordinate of the cell to mark.
///
/// Constructing a move does not validate it. Whether a move is legal depends
/// on the board it is applied to, so range and occupancy checks happen in
/// [`crate::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The center cell.
    pub const CENTER: Move = Move::new(1, 1);

    /// All nine in-range moves in row-major order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// Center first, then corners, then edges.
    pub const CENTER_FIRST: [Move; 9] = [
        Move::new(1, 1),
        Move::new(0, 0),
        Move::new(0, 2),
        Move::new(2, 0),
        Move::new(2, 2),
        Move::new(0, 1),
        Move::new(1, 0),
        Move::new(1, 2),
        Move::new(2, 1),
    ];
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Move::new(row, col)
    }
}

impl TryFrom<&[usize]> for Move {
    type Error = RulesError;

    /// Accepts exactly two values, `[row, col]`.
    fn try_from(values: &[usize]) -> Result<Self, Self::Error> {
        match values {
            [row, col] => Ok(Move::new(*row, *col)),
            _ => Err(RulesError::MalformedMove {
                input: format!("{:?}", values),
            }),
        }
    }
}

impl FromStr for Move {
    type Err = RulesError;

    /// Parses `"row,col"` or `"row col"`, optionally wrapped in one pair of
    /// parentheses, e.g. `"1,2"` or `"(1, 2)"`.
    ///
    /// Only the shape is checked here. Out-of-range coordinates parse
    /// successfully and are rejected when the move is applied.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RulesError::MalformedMove {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix('(') {
            Some(rest) => rest.strip_suffix(')').ok_or_else(malformed)?,
            None if trimmed.ends_with(')') => return Err(malformed()),
            None => trimmed,
        };

        // A comma separates exactly two fields; otherwise whitespace does.
        let fields: Vec<&str> = if inner.contains(',') {
            inner.split(',').map(str::trim).collect()
        } else {
            inner.split_whitespace().collect()
        };

        let values = fields
            .into_iter()
            .map(|field| {
                if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(malformed());
                }
                field.parse::<usize>().map_err(|_| malformed())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Move::try_from(values.as_slice()).map_err(|_| malformed())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
