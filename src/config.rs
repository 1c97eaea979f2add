use crate::error::ConfigError;
use crate::models::Direction;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "WORD_QUIZ_CONFIG";
pub const DATA_DIR_ENV: &str = "WORD_QUIZ_DATA_DIR";
pub const DEFAULT_CONFIG_FILE: &str = "word_quiz.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    pub file: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl SourceConfig {
    fn csv(name: &str) -> Self {
        Self {
            name: name.to_string(),
            file: format!("{}.csv", name),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub data_dir: PathBuf,
    pub sources: Vec<SourceConfig>,
    pub direction: Direction,
    pub log_file: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            sources: ["nouns", "verbs", "pronouns"]
                .into_iter()
                .map(SourceConfig::csv)
                .collect(),
            direction: Direction::SourceToTarget,
            log_file: Some(PathBuf::from("word_quiz.log")),
        }
    }
}

impl QuizConfig {
    /// Reads `$WORD_QUIZ_CONFIG`, falling back to `word_quiz.json` and then to the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut config = match explicit {
            Some(path) => Self::from_path(&path)?,
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_path(&path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: QuizConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for source in &self.sources {
            if !seen.insert(source.name.as_str()) {
                return Err(ConfigError::DuplicateSource(source.name.clone()));
            }
        }
        Ok(())
    }

    pub fn source_path(&self, name: &str) -> Option<PathBuf> {
        self.sources
            .iter()
            .find(|source| source.name == name)
            .map(|source| self.data_dir.join(&source.file))
    }
}
