use std::path::PathBuf;

use crate::game::Player;

/// Errors that can occur while playing games in the arena.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("{player} selected illegal column {column} (legal: {legal:?})")]
    IllegalMove {
        player: Player,
        column: usize,
        legal: Vec<usize>,
    },

    #[error("trials must be >= 1")]
    NoTrials,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_error_display() {
        let err = ArenaError::IllegalMove {
            player: Player::Red,
            column: 5,
            legal: vec![0, 1, 2],
        };
        assert_eq!(
            err.to_string(),
            "Red selected illegal column 5 (legal: [0, 1, 2])"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("search.depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.depth must be >= 1"
        );
    }
}
