use crate::error::LoadError;
use serde::Deserialize;
use std::path::PathBuf;

/// Separates alternative literal answers inside a single field.
pub const ALTERNATIVE_SEPARATOR: char = '/';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    pub source: String,
    pub target: String,
    pub id: String,
}

impl WordPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        let id = format!("{}|{}", source, target);
        Self { source, target, id }
    }

    /// The field shown to the user.
    pub fn prompt(&self, direction: Direction) -> &str {
        match direction {
            Direction::SourceToTarget => &self.source,
            Direction::TargetToSource => &self.target,
        }
    }

    /// The field the user has to type, verbatim.
    pub fn expected(&self, direction: Direction) -> &str {
        match direction {
            Direction::SourceToTarget => &self.target,
            Direction::TargetToSource => &self.source,
        }
    }

    /// Lower-cased, trimmed alternatives of the expected field. A blank field
    /// (a line without a comma) has no alternatives, so it never matches.
    pub fn acceptable_answers(&self, direction: Direction) -> Vec<String> {
        let expected = self.expected(direction);
        if expected.trim().is_empty() {
            return Vec::new();
        }
        expected
            .split(ALTERNATIVE_SEPARATOR)
            .map(|part| part.trim().to_lowercase())
            .collect()
    }

    pub fn accepts(&self, direction: Direction, raw_input: &str) -> bool {
        let guess = raw_input.trim().to_lowercase();
        self.acceptable_answers(direction)
            .iter()
            .any(|answer| *answer == guess)
    }
}

/// Words loaded from one data source. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    name: String,
    words: Vec<WordPair>,
}

impl WordSet {
    pub fn new(name: impl Into<String>, words: Vec<WordPair>) -> Self {
        Self {
            name: name.into(),
            words,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &[WordPair] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    SourceToTarget,
    TargetToSource,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::SourceToTarget => Direction::TargetToSource,
            Direction::TargetToSource => Direction::SourceToTarget,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    None,
    Correct,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub current_word: Option<WordPair>,
    pub attempt: String,
    pub wrong_count: u8,
    pub hint_revealed: bool,
    pub feedback: Feedback,
}

impl SessionState {
    /// Clears everything tied to the word being guessed.
    pub(crate) fn reset_guess(&mut self) {
        self.attempt.clear();
        self.wrong_count = 0;
        self.hint_revealed = false;
        self.feedback = Feedback::None;
    }
}

/// Result of a single submission, reported back to the caller for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    NoWord,
    Correct,
    Incorrect { wrong_count: u8, hint_revealed: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    NotRequested,
    Pending,
    Loaded(WordSet),
    Failed(String),
}

#[derive(Debug)]
pub enum LoadRequest {
    Load { name: String, path: PathBuf },
}

#[derive(Debug)]
pub enum LoadEvent {
    Loaded {
        name: String,
        words: Vec<WordPair>,
    },
    Failed {
        name: String,
        error: LoadError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Quiz,
    Exiting,
}
