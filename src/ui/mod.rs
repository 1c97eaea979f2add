pub mod layout;
mod quiz;

pub use layout::calculate_quiz_chunks;
pub use quiz::draw_quiz;
