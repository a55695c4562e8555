//! Search configuration.

use crate::position::Move;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Order in which the search visits candidate moves.
///
/// The order only decides which of several equally good moves is returned:
/// the search keeps the first one it meets.
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
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MoveOrder {
    /// Top-left to bottom-right, row by row.
    #[default]
    RowMajor,
    /// Center, then corners, then edges.
    CenterFirst,
}

impl MoveOrder {
    /// The nine cells in this order.
    pub fn sequence(self) -> &'static [Move; 9] {
        match self {
            MoveOrder::RowMajor => &Move::ALL,
            MoveOrder::CenterFirst => &Move::CENTER_FIRST,
        }
    }

    /// Sorts `moves` into this order.
    pub fn arrange(self, mut moves: Vec<Move>) -> Vec<Move> {
        let sequence = self.sequence();
        moves.sort_by_key(|mv| sequence.iter().position(|s| s == mv));
        moves
    }
}

/// Configuration for the minimax search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Order in which candidate moves are tried.
    #[serde(default)]
    move_order: MoveOrder,

    /// Evaluate the root's children on the rayon thread pool.
    #[serde(default)]
    parallel_root: bool,
}

impl SearchConfig {
    /// Creates a configuration with explicit settings.
    pub fn new(move_order: MoveOrder, parallel_root: bool) -> Self {
        Self {
            move_order,
            parallel_root,
        }
    }

    /// Returns this configuration with a different move order.
    pub fn with_move_order(mut self, move_order: MoveOrder) -> Self {
        self.move_order = move_order;
        self
    }

    /// Returns this configuration with root parallelism switched on or off.
    pub fn with_parallel_root(mut self, parallel_root: bool) -> Self {
        self.parallel_root = parallel_root;
        self
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    #[instrument(skip(text))]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(move_order = %config.move_order, parallel_root = config.parallel_root, "Parsed search config");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(move_order = %config.move_order, parallel_root = config.parallel_root, "Config loaded successfully");
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(*config.move_order(), MoveOrder::RowMajor);
        assert!(!*config.parallel_root());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(
            SearchConfig::from_toml_str("").unwrap(),
            SearchConfig::default()
        );
    }

    #[test]
    fn test_parse_toml() {
        let config = SearchConfig::from_toml_str(
            "move_order = \"center-first\"\nparallel_root = true\n",
        )
        .unwrap();
        assert_eq!(*config.move_order(), MoveOrder::CenterFirst);
        assert!(*config.parallel_root());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = SearchConfig::from_toml_str("depth = 4\n").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_bad_move_order_rejected() {
        assert!(SearchConfig::from_toml_str("move_order = \"spiral\"\n").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SearchConfig::new(MoveOrder::CenterFirst, true);
        let text = config.to_toml_string().unwrap();
        assert_eq!(SearchConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_move_order_display_matches_serde() {
        assert_eq!(MoveOrder::RowMajor.to_string(), "row-major");
        assert_eq!(MoveOrder::CenterFirst.to_string(), "center-first");
    }

    #[test]
    fn test_arrange() {
        let moves = vec![Move::new(0, 1), Move::new(1, 1), Move::new(0, 0)];
        assert_eq!(
            MoveOrder::CenterFirst.arrange(moves.clone()),
            vec![Move::new(1, 1), Move::new(0, 0), Move::new(0, 1)]
        );
        assert_eq!(
            MoveOrder::RowMajor.arrange(moves),
            vec![Move::new(0, 0), Move::new(0, 1), Move::new(1, 1)]
        );
    }

    #[test]
    fn test_error_display_has_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.to_string().starts_with("Config error: boom at "));
        assert!(err.to_string().contains("config.rs"));
    }
}
