use serde::{Deserialize, Serialize};

use common::config::Validate;
use common::games::game2048::Game2048Settings;
use common::games::snake::SnakeSettings;
use common::games::tetris::TetrisSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the persisted best scores live.
    pub score_file: String,
    pub game2048: Game2048Settings,
    pub snake: SnakeSettings,
    pub tetris: TetrisSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            score_file: "casual-games-scores.yaml".to_string(),
            game2048: Game2048Settings::default(),
            snake: SnakeSettings::default(),
            tetris: TetrisSettings::default(),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), String> {
        if self.score_file.is_empty() {
            return Err("Score file path must not be empty".to_string());
        }
        self.game2048.validate()?;
        self.snake.validate()?;
        self.tetris.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_nested_settings_are_rejected() {
        let mut config = AppConfig::default();
        config.snake.field_width = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_fills_in_defaults() {
        let config: AppConfig = serde_yaml_ng::from_str("snake:\n  field_width: 30\n").unwrap();
        assert_eq!(config.snake.field_width, 30);
        assert_eq!(config.snake.field_height, 20);
        assert_eq!(config.score_file, "casual-games-scores.yaml");
    }
}
