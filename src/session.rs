use crate::app::App;
use crate::logger;
use crate::models::AppState;
use crate::utils::{byte_index, char_count};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    /// Cursor inside the attempt, in characters.
    pub cursor_position: usize,
    /// Left Shift is physically held (needs key release reporting).
    pub shift_held: bool,
    /// One-shot reveal for terminals without release events, cleared by the next key.
    pub peek_requested: bool,
}

/// Kitty-protocol terminals can report Shift+i as `Char('i')` with SHIFT set.
fn shifted_char(c: char, modifiers: KeyModifiers) -> char {
    if !modifiers.contains(KeyModifiers::SHIFT) || !c.is_lowercase() {
        return c;
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

pub fn handle_quiz_input(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Modifier(ModifierKeyCode::LeftShift) {
        app.input.shift_held = key.kind != KeyEventKind::Release;
        return;
    }
    if key.kind == KeyEventKind::Release {
        return;
    }

    app.input.peek_requested = false;
    // the attempt may have been cleared by a redraw since the last key
    let len = char_count(app.engine.attempt());
    app.input.cursor_position = app.input.cursor_position.min(len);

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.app_state = AppState::Exiting,
        KeyCode::Char('c') if ctrl => app.app_state = AppState::Exiting,
        KeyCode::Char('d') if ctrl => app.engine.toggle_direction(),
        KeyCode::Char('r') if ctrl => app.input.peek_requested = true,
        KeyCode::Char('u') if ctrl => {
            app.engine.edit_attempt(String::clear);
            app.input.cursor_position = 0;
        }
        KeyCode::F(n) if n >= 1 => app.toggle_source(usize::from(n - 1)),
        KeyCode::Enter => {
            let outcome = app.engine.submit_attempt();
            logger::log(&format!("Answer outcome: {:?}", outcome));
            app.input.shift_held = false;
            app.input.cursor_position = char_count(app.engine.attempt());
        }
        KeyCode::Left => {
            app.input.cursor_position = app.input.cursor_position.saturating_sub(1);
        }
        KeyCode::Right => {
            if app.input.cursor_position < len {
                app.input.cursor_position += 1;
            }
        }
        KeyCode::Home => app.input.cursor_position = 0,
        KeyCode::End => app.input.cursor_position = len,
        KeyCode::Backspace => {
            if app.input.cursor_position > 0 {
                let at = app.input.cursor_position - 1;
                app.engine.edit_attempt(|attempt| {
                    let idx = byte_index(attempt, at);
                    attempt.remove(idx);
                });
                app.input.cursor_position = at;
            }
        }
        KeyCode::Delete => {
            let at = app.input.cursor_position;
            if at < len {
                app.engine.edit_attempt(|attempt| {
                    let idx = byte_index(attempt, at);
                    attempt.remove(idx);
                });
            }
        }
        KeyCode::Char(c) if !ctrl => {
            let c = shifted_char(c, key.modifiers);
            let at = app.input.cursor_position;
            app.engine.edit_attempt(|attempt| {
                let idx = byte_index(attempt, at);
                attempt.insert(idx, c);
            });
            app.input.cursor_position += 1;
        }
        _ => {}
    }
}
