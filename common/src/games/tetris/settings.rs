use serde::{Deserialize, Serialize};

use crate::config::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TetrisSettings {
    pub field_width: usize,
    pub field_height: usize,
}

impl Default for TetrisSettings {
    fn default() -> Self {
        Self {
            field_width: 10,
            field_height: 20,
        }
    }
}

impl Validate for TetrisSettings {
    fn validate(&self) -> Result<(), String> {
        if !(6..=30).contains(&self.field_width) {
            return Err(format!(
                "Field width must be between 6 and 30, got {}",
                self.field_width
            ));
        }
        if !(10..=50).contains(&self.field_height) {
            return Err(format!(
                "Field height must be between 10 and 50, got {}",
                self.field_height
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(TetrisSettings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_narrow_field() {
        let settings = TetrisSettings {
            field_width: 3,
            field_height: 20,
        };
        assert!(settings.validate().is_err());
    }
}
