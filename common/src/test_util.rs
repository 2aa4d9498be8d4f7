//! Shared test doubles for session and storage tests.

use std::sync::{Arc, Mutex};

use crate::config::ConfigContentProvider;
use crate::games::{GamePresenter, GameSummary, GameView};

/// Presenter that records everything pushed to it.
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    views: Arc<Mutex<Vec<GameView>>>,
    summaries: Arc<Mutex<Vec<GameSummary>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_count(&self) -> usize {
        self.views.lock().unwrap().len()
    }

    pub fn last_view(&self) -> Option<GameView> {
        self.views.lock().unwrap().last().cloned()
    }

    pub fn summaries(&self) -> Vec<GameSummary> {
        self.summaries.lock().unwrap().clone()
    }
}

impl GamePresenter for RecordingPresenter {
    async fn present(&self, view: GameView) {
        self.views.lock().unwrap().push(view);
    }

    async fn present_game_over(&self, summary: GameSummary) {
        self.summaries.lock().unwrap().push(summary);
    }
}

/// Config content provider over a shared in-memory string.
#[derive(Clone)]
pub struct InMemoryProvider {
    content: Arc<Mutex<Option<String>>>,
}

impl InMemoryProvider {
    pub fn new(content: Option<&str>) -> Self {
        Self {
            content: Arc::new(Mutex::new(content.map(str::to_string))),
        }
    }
}

impl ConfigContentProvider for InMemoryProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        Ok(self.content.lock().unwrap().clone())
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        *self.content.lock().unwrap() = Some(content.to_string());
        Ok(())
    }
}
