use crate::config::QuizConfig;
use crate::engine::QuizEngine;
use crate::logger;
use crate::models::{AppState, LoadEvent, LoadRequest};
use crate::session::InputState;
use crossbeam_channel::Sender;

/// Everything the redraw depends on. The loop redraws only when this changes.
pub type UiState = (u64, usize, bool, bool, AppState);

pub struct App {
    pub engine: QuizEngine,
    pub input: InputState,
    pub app_state: AppState,
    config: QuizConfig,
    load_tx: Sender<LoadRequest>,
}

impl App {
    pub fn new(config: QuizConfig, load_tx: Sender<LoadRequest>) -> Self {
        let engine = QuizEngine::new(
            config
                .sources
                .iter()
                .map(|source| (source.name.clone(), source.enabled)),
            config.direction,
        );
        Self::with_engine(engine, config, load_tx)
    }

    pub fn with_engine(engine: QuizEngine, config: QuizConfig, load_tx: Sender<LoadRequest>) -> Self {
        Self {
            engine,
            input: InputState::default(),
            app_state: AppState::Quiz,
            config,
            load_tx,
        }
    }

    /// Sends a load request for every enabled source that has no data yet.
    pub fn dispatch_loads(&mut self) {
        for name in self.engine.pending_loads() {
            let Some(path) = self.config.source_path(&name) else {
                continue;
            };
            if self
                .load_tx
                .send(LoadRequest::Load {
                    name: name.clone(),
                    path,
                })
                .is_err()
            {
                self.engine.word_set_failed(&name, "loader is not running");
            }
        }
    }

    pub fn process_load_event(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Loaded { name, words } => self.engine.word_set_loaded(&name, words),
            LoadEvent::Failed { name, error } => {
                self.engine.word_set_failed(&name, error.to_string())
            }
        }
    }

    /// Flips the `index`-th configured source, counting from zero.
    pub fn toggle_source(&mut self, index: usize) {
        let Some(name) = self
            .engine
            .sources()
            .nth(index)
            .map(|source| source.name.to_string())
        else {
            return;
        };
        self.engine.toggle_selection(&name);
        logger::log(&format!(
            "Source {} is now {}",
            name,
            if self.engine.is_enabled(&name) {
                "on"
            } else {
                "off"
            }
        ));
        self.dispatch_loads();
    }

    pub fn reveal_requested(&self) -> bool {
        self.input.shift_held || self.input.peek_requested
    }

    pub fn ui_state(&self) -> UiState {
        (
            self.engine.revision(),
            self.input.cursor_position,
            self.input.shift_held,
            self.input.peek_requested,
            self.app_state,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::models::WordPair;
    use crossbeam_channel::Receiver;
    use std::io;
    use std::path::PathBuf;

    fn test_app() -> (App, Receiver<LoadRequest>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (App::new(QuizConfig::default(), tx), rx)
    }

    #[test]
    fn test_dispatch_loads_requests_enabled_sources_once() {
        let (mut app, rx) = test_app();
        app.dispatch_loads();
        app.dispatch_loads();

        let requested: Vec<(String, PathBuf)> = rx
            .try_iter()
            .map(|LoadRequest::Load { name, path }| (name, path))
            .collect();
        assert_eq!(requested.len(), 3);
        assert_eq!(requested[0].0, "nouns");
        assert_eq!(requested[0].1, PathBuf::from("data").join("nouns.csv"));
    }

    #[test]
    fn test_process_load_event_feeds_engine() {
        let (mut app, _rx) = test_app();
        app.dispatch_loads();
        app.process_load_event(LoadEvent::Loaded {
            name: "nouns".to_string(),
            words: vec![WordPair::new("gato", "cat")],
        });
        assert_eq!(app.engine.prompt_display(), Some("gato"));

        app.process_load_event(LoadEvent::Failed {
            name: "verbs".to_string(),
            error: LoadError::Io {
                path: PathBuf::from("data/verbs.csv"),
                source: io::Error::new(io::ErrorKind::NotFound, "missing"),
            },
        });
        assert_eq!(app.engine.active_pool().len(), 1);
    }

    #[test]
    fn test_toggle_source_by_index() {
        let (mut app, rx) = test_app();
        app.dispatch_loads();
        let _ = rx.try_iter().count();

        app.toggle_source(1);
        assert!(!app.engine.is_enabled("verbs"));
        app.toggle_source(1);
        assert!(app.engine.is_enabled("verbs"));

        // still pending from the first dispatch, so nothing new is requested
        assert_eq!(rx.try_iter().count(), 0);

        app.toggle_source(42);
        assert!(app.engine.is_enabled("nouns"));
    }

    #[test]
    fn test_dispatch_with_dead_loader_marks_failed() {
        let (tx, rx) = crossbeam_channel::unbounded();
        drop(rx);
        let mut app = App::new(QuizConfig::default(), tx);
        app.dispatch_loads();

        assert!(
            app.engine
                .sources()
                .all(|source| matches!(source.status, crate::models::LoadStatus::Failed(_)))
        );
    }

    #[test]
    fn test_ui_state_tracks_changes() {
        let (mut app, _rx) = test_app();
        let initial = app.ui_state();

        app.input.shift_held = true;
        let after_shift = app.ui_state();
        assert_ne!(initial, after_shift);

        app.engine.toggle_direction();
        assert_ne!(after_shift, app.ui_state());
    }
}
