use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use crate::config::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, YamlConfigSerializer,
};
use crate::log;

/// Persisted best scores, one slot per game that keeps one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScores {
    #[serde(default)]
    pub game2048: u32,
    #[serde(default)]
    pub snake: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreKey {
    Game2048,
    Snake,
}

/// Best-score storage shared by game sessions.
///
/// The backing content is read once at construction; afterwards reads are
/// served from memory and the file is rewritten only when a score improves.
/// A missing or corrupt store degrades to zeros and is never fatal.
#[derive(Clone)]
pub struct ScoreStore {
    provider: Arc<dyn ConfigContentProvider + Send + Sync>,
    scores: Arc<Mutex<BestScores>>,
}

impl ScoreStore {
    pub fn open(file_path: &str) -> Self {
        Self::with_provider(FileContentConfigProvider::new(file_path.to_string()))
    }

    pub fn with_provider<TProvider>(provider: TProvider) -> Self
    where
        TProvider: ConfigContentProvider + Send + Sync + 'static,
    {
        let scores = match Self::load(&provider) {
            Ok(scores) => scores,
            Err(e) => {
                log!("Failed to load best scores, starting from zero: {}", e);
                BestScores::default()
            }
        };
        Self {
            provider: Arc::new(provider),
            scores: Arc::new(Mutex::new(scores)),
        }
    }

    fn load(provider: &dyn ConfigContentProvider) -> Result<BestScores, String> {
        match provider.get_config_content()? {
            Some(content) => YamlConfigSerializer::new().deserialize(&content),
            None => Ok(BestScores::default()),
        }
    }

    pub fn best(&self, key: ScoreKey) -> u32 {
        let scores = self.scores.lock().unwrap();
        match key {
            ScoreKey::Game2048 => scores.game2048,
            ScoreKey::Snake => scores.snake,
        }
    }

    /// Records `score` if it beats the stored best. Returns whether the best
    /// advanced. The in-memory value advances even when the write fails, so
    /// the stored value never decreases and the write is retried on the next
    /// improvement.
    pub fn record(&self, key: ScoreKey, score: u32) -> bool {
        let snapshot = {
            let mut scores = self.scores.lock().unwrap();
            let slot = match key {
                ScoreKey::Game2048 => &mut scores.game2048,
                ScoreKey::Snake => &mut scores.snake,
            };
            if score <= *slot {
                return false;
            }
            *slot = score;
            scores.clone()
        };

        if let Err(e) = self.persist(&snapshot) {
            log!("Failed to persist best scores: {}", e);
        }
        true
    }

    fn persist(&self, scores: &BestScores) -> Result<(), String> {
        let content = YamlConfigSerializer::new().serialize(scores)?;
        self.provider.set_config_content(&content)
    }
}
