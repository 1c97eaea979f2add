//! The quiz state machine.
//!
//! `QuizEngine` owns every configured data source, the user's selection of
//! sources and the [`SessionState`]. All mutation goes through its methods;
//! each one bumps [`QuizEngine::revision`] so the presentation layer knows
//! when to redraw.

use crate::logger;
use crate::models::{
    AnswerOutcome, Direction, Feedback, LoadStatus, SessionState, WordPair, WordSet,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Incorrect guesses in a row before the answer is revealed.
pub const MAX_WRONG_GUESSES: u8 = 3;

pub const HINT_PLACEHOLDER: &str = "Type your answer...";

#[derive(Debug)]
struct Source {
    name: String,
    enabled: bool,
    status: LoadStatus,
}

/// Read-only view of one configured source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceView<'a> {
    pub name: &'a str,
    pub enabled: bool,
    pub status: &'a LoadStatus,
}

#[derive(Debug)]
pub struct QuizEngine {
    sources: Vec<Source>,
    direction: Direction,
    state: SessionState,
    rng: StdRng,
    revision: u64,
}

impl QuizEngine {
    /// `sources` is the configured `(name, initially enabled)` list, in display order.
    pub fn new<I, S>(sources: I, direction: Direction) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        Self::with_rng(sources, direction, StdRng::from_entropy())
    }

    pub fn with_rng<I, S>(sources: I, direction: Direction, rng: StdRng) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        Self {
            sources: sources
                .into_iter()
                .map(|(name, enabled)| Source {
                    name: name.into(),
                    enabled,
                    status: LoadStatus::NotRequested,
                })
                .collect(),
            direction,
            state: SessionState::default(),
            rng,
            revision: 0,
        }
    }

    pub fn current_word(&self) -> Option<&WordPair> {
        self.state.current_word.as_ref()
    }

    pub fn attempt(&self) -> &str {
        &self.state.attempt
    }

    pub fn feedback(&self) -> Feedback {
        self.state.feedback
    }

    pub fn wrong_count(&self) -> u8 {
        self.state.wrong_count
    }

    pub fn hint_revealed(&self) -> bool {
        self.state.hint_revealed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn sources(&self) -> impl Iterator<Item = SourceView<'_>> {
        self.sources.iter().map(|source| SourceView {
            name: &source.name,
            enabled: source.enabled,
            status: &source.status,
        })
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.sources
            .iter()
            .any(|source| source.name == name && source.enabled)
    }

    pub fn word_set(&self, name: &str) -> Option<&WordSet> {
        self.sources
            .iter()
            .find(|source| source.name == name)
            .and_then(|source| match &source.status {
                LoadStatus::Loaded(set) => Some(set),
                _ => None,
            })
    }

    /// Loaded words of every enabled source, in configured order.
    pub fn active_pool(&self) -> Vec<&WordPair> {
        self.sources
            .iter()
            .filter(|source| source.enabled)
            .filter_map(|source| match &source.status {
                LoadStatus::Loaded(set) => Some(set.words()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    pub fn set_selection(&mut self, name: &str, enabled: bool) {
        let Some(source) = self.sources.iter_mut().find(|source| source.name == name) else {
            logger::log(&format!("Ignoring selection change for unknown source {}", name));
            return;
        };

        source.enabled = enabled;
        if enabled && matches!(source.status, LoadStatus::Failed(_)) {
            source.status = LoadStatus::NotRequested;
        }
        self.revision += 1;
        self.reconcile();
    }

    pub fn toggle_selection(&mut self, name: &str) {
        let enabled = self.is_enabled(name);
        self.set_selection(name, !enabled);
    }

    /// Picks a new word uniformly from the active pool and starts a fresh guess.
    pub fn draw_word(&mut self) {
        let pool_len = self.active_pool().len();
        let next = if pool_len == 0 {
            None
        } else {
            let index = self.rng.gen_range(0..pool_len);
            self.active_pool().get(index).map(|word| (*word).clone())
        };

        self.state.current_word = next;
        self.state.reset_guess();
        self.revision += 1;
    }

    pub fn submit_answer(&mut self, raw_input: &str) -> AnswerOutcome {
        let Some(word) = &self.state.current_word else {
            return AnswerOutcome::NoWord;
        };

        if word.accepts(self.direction, raw_input) {
            self.state.feedback = Feedback::Correct;
            self.state.wrong_count = 0;
            self.state.hint_revealed = false;
            // The redraw wipes the feedback again before anything renders it.
            self.draw_word();
            return AnswerOutcome::Correct;
        }

        if self.state.hint_revealed {
            self.state.hint_revealed = false;
            self.state.wrong_count = 0;
        } else {
            self.state.wrong_count = (self.state.wrong_count + 1).min(MAX_WRONG_GUESSES);
            self.state.hint_revealed = self.state.wrong_count == MAX_WRONG_GUESSES;
        }
        self.state.feedback = Feedback::None;
        self.revision += 1;

        AnswerOutcome::Incorrect {
            wrong_count: self.state.wrong_count,
            hint_revealed: self.state.hint_revealed,
        }
    }

    pub fn submit_attempt(&mut self) -> AnswerOutcome {
        let attempt = self.state.attempt.clone();
        self.submit_answer(&attempt)
    }

    pub fn edit_attempt(&mut self, edit: impl FnOnce(&mut String)) {
        edit(&mut self.state.attempt);
        self.revision += 1;
    }

    pub fn prompt_display(&self) -> Option<&str> {
        self.current_word()
            .map(|word| word.prompt(self.direction))
    }

    /// The expected answer when the hint is revealed or `transient_reveal` is held,
    /// otherwise the placeholder.
    pub fn hint_text(&self, transient_reveal: bool) -> &str {
        match self.current_word() {
            Some(word) if self.state.hint_revealed || transient_reveal => {
                word.expected(self.direction)
            }
            _ => HINT_PLACEHOLDER,
        }
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if self.direction != direction {
            self.direction = direction;
            self.revision += 1;
        }
    }

    pub fn toggle_direction(&mut self) {
        self.set_direction(self.direction.flipped());
    }

    /// Enabled sources that were never requested. They are marked pending
    /// so each is handed out once.
    pub fn pending_loads(&mut self) -> Vec<String> {
        let mut names = Vec::new();
        for source in &mut self.sources {
            if source.enabled && source.status == LoadStatus::NotRequested {
                source.status = LoadStatus::Pending;
                names.push(source.name.clone());
            }
        }
        if !names.is_empty() {
            self.revision += 1;
        }
        names
    }

    pub fn word_set_loaded(&mut self, name: &str, words: Vec<WordPair>) {
        let Some(source) = self.sources.iter_mut().find(|source| source.name == name) else {
            logger::log(&format!("Dropping words for unknown source {}", name));
            return;
        };
        if matches!(source.status, LoadStatus::Loaded(_)) {
            return;
        }

        let set = WordSet::new(name, words);
        logger::log(&format!("Loaded {} words for {}", set.len(), set.name()));
        source.status = LoadStatus::Loaded(set);
        self.revision += 1;
        self.reconcile();
    }

    pub fn word_set_failed(&mut self, name: &str, reason: impl Into<String>) {
        let reason = reason.into();
        logger::log(&format!("Error loading {}: {}", name, reason));
        if let Some(source) = self.sources.iter_mut().find(|source| source.name == name)
            && !matches!(source.status, LoadStatus::Loaded(_))
        {
            source.status = LoadStatus::Failed(reason);
            self.revision += 1;
            self.reconcile();
        }
    }

    /// Keeps `current_word` inside the active pool.
    fn reconcile(&mut self) {
        let still_valid = match &self.state.current_word {
            Some(current) => self
                .active_pool()
                .iter()
                .any(|word| word.id == current.id),
            None => false,
        };
        if !still_valid {
            self.draw_word();
        }
    }
}
