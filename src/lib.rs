pub mod app;
pub mod config;
pub mod csv;
pub mod engine;
pub mod error;
pub mod loader;
pub mod logger;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::App;
pub use config::QuizConfig;
pub use csv::{load_csv, parse_csv};
pub use engine::QuizEngine;
pub use error::{ConfigError, LoadError};
pub use loader::spawn_loader;
pub use models::{AppState, Direction, Feedback, SessionState, WordPair, WordSet};
pub use session::handle_quiz_input;
pub use ui::draw_quiz;
