use std::path::Path;

use crate::error::ConfigError;
use crate::game::EngineConfig;
use crate::session::SessionConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;

        if self.session.rounds == 0 {
            return Err(ConfigError::Validation(
                "session.rounds must be >= 1".into(),
            ));
        }
        if self.session.stats_window == 0 {
            return Err(ConfigError::Validation(
                "session.stats_window must be >= 1".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&AppConfig::default())
            .map_err(|e| ConfigError::Validation(format!("default config does not serialize: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, StartPolicy};
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[engine]
win_length = 5
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.engine.win_length, 5);
        // Other fields should be defaults
        assert_eq!(config.engine.rows, 6);
        assert_eq!(config.engine.cols, 7);
        assert_eq!(config.session.rounds, 100);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_policy_and_labels_from_toml() {
        let toml_str = r#"
[engine]
starting_player = "yellow"
start_policy = "alternate"

[engine.labels]
red = "Crimson"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.engine.starting_player, Player::Yellow);
        assert_eq!(config.engine.start_policy, StartPolicy::Alternate);
        assert_eq!(config.engine.labels.red, "Crimson");
        assert_eq!(config.engine.labels.yellow, "Yellow");
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.engine.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_short_win_length() {
        let mut config = AppConfig::default();
        config.engine.win_length = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_win_length() {
        let mut config = AppConfig::default();
        config.engine.win_length = 8;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_rounds() {
        let mut config = AppConfig::default();
        config.session.rounds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_stats_window() {
        let mut config = AppConfig::default();
        config.session.stats_window = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[session]
rounds = 500
seed = 9
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.session.rounds, 500);
        assert_eq!(config.session.seed, Some(9));
        // Others are defaults
        assert_eq!(config.engine, crate::game::EngineConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[engine]\ncols = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[engine\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
