//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use mytodo::config::UiConfig;
use mytodo::ui::app::App;
use mytodo::ui::input::handle_key;

pub fn make_app() -> App {
    App::new(&UiConfig::default())
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn alt(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::ALT,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, key(code));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Type `text` into the new-item field and submit it.
pub fn submit(app: &mut App, text: &str) {
    type_text(app, text);
    press(app, KeyCode::Enter);
}

/// Texts of the items visible under the active tab.
pub fn visible_texts(app: &App) -> Vec<String> {
    app.visible_items()
        .iter()
        .map(|item| item.text().to_string())
        .collect()
}
