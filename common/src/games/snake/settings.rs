use serde::{Deserialize, Serialize};

use crate::config::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeSettings {
    pub field_width: usize,
    pub field_height: usize,
    /// Tick period at the start of a game.
    pub initial_tick_ms: u64,
    /// How much the tick period shrinks per food eaten.
    pub speed_step_ms: u64,
    /// The tick period never drops below this.
    pub min_tick_ms: u64,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 20,
            initial_tick_ms: 150,
            speed_step_ms: 5,
            min_tick_ms: 50,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if !(10..=100).contains(&self.field_width) {
            return Err(format!(
                "Field width must be between 10 and 100, got {}",
                self.field_width
            ));
        }
        if !(10..=100).contains(&self.field_height) {
            return Err(format!(
                "Field height must be between 10 and 100, got {}",
                self.field_height
            ));
        }
        if !(50..=5000).contains(&self.initial_tick_ms) {
            return Err(format!(
                "Initial tick interval must be between 50ms and 5000ms, got {}",
                self.initial_tick_ms
            ));
        }
        if self.min_tick_ms < 10 || self.min_tick_ms > self.initial_tick_ms {
            return Err(format!(
                "Minimum tick interval must be between 10ms and the initial interval, got {}",
                self.min_tick_ms
            ));
        }
        if self.speed_step_ms > 100 {
            return Err(format!(
                "Speed step must not exceed 100ms, got {}",
                self.speed_step_ms
            ));
        }
        Ok(())
    }
}
