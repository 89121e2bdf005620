use std::path::PathBuf;

use crate::game::RoundOutcome;

/// Reasons a drop is rejected. A rejected drop leaves the engine untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("round already decided ({0})")]
    RoundAlreadyDecided(RoundOutcome),
}

/// Errors that can occur while driving rounds headlessly.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("agent {agent} selected no column")]
    NoColumnSelected { agent: String },

    #[error("illegal move: {0}")]
    Move(#[from] MoveError),
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
    use crate::game::Player;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidColumn { column: 9, cols: 7 };
        assert_eq!(
            err.to_string(),
            "column 9 is out of range (board has 7 columns)"
        );
        assert_eq!(MoveError::ColumnFull(2).to_string(), "column 2 is full");
        assert_eq!(
            MoveError::RoundAlreadyDecided(RoundOutcome::Win(Player::Red)).to_string(),
            "round already decided (red wins)"
        );
        assert_eq!(
            MoveError::RoundAlreadyDecided(RoundOutcome::Draw).to_string(),
            "round already decided (draw)"
        );
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::NoColumnSelected {
            agent: "Random".to_string(),
        };
        assert_eq!(err.to_string(), "agent Random selected no column");

        let err: SessionError = MoveError::ColumnFull(4).into();
        assert_eq!(err.to_string(), "illegal move: column 4 is full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("engine.rows must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: engine.rows must be >= 1"
        );
    }
}
