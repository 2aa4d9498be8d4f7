use serde::{Deserialize, Serialize};

use crate::config::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game2048Settings {
    pub field_width: usize,
    pub field_height: usize,
}

impl Default for Game2048Settings {
    fn default() -> Self {
        Self {
            field_width: 4,
            field_height: 4,
        }
    }
}

impl Validate for Game2048Settings {
    fn validate(&self) -> Result<(), String> {
        if !(2..=10).contains(&self.field_width) {
            return Err(format!(
                "Field width must be between 2 and 10, got {}",
                self.field_width
            ));
        }
        if !(2..=10).contains(&self.field_height) {
            return Err(format!(
                "Field height must be between 2 and 10, got {}",
                self.field_height
            ));
        }
        Ok(())
    }
}
