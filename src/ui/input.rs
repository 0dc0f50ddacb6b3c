use crate::todo::FilterMode;
use crate::ui::app::{App, Focus};
use crate::ui::text_input::TextInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 't') {
        app.toggle_theme();
        return;
    }

    // The confirmation is modal: nothing else reacts while it is open
    if let Some(id) = app.delete_dialog().pending_id() {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => app.confirm_delete(id),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        }
        return;
    }

    if is_ctrl_char(key, 'o') {
        app.dismiss_notice();
        return;
    }

    match app.focus() {
        Focus::Input => handle_input_key(app, key),
        Focus::List => handle_list_key(app, key),
        Focus::Editing(_) => handle_edit_key(app, key),
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit_new_item();
        }
        KeyCode::Esc => app.request_quit(),
        KeyCode::Down => {
            app.focus_list();
        }
        KeyCode::Tab => app.next_filter(),
        KeyCode::BackTab => app.prev_filter(),
        _ => edit_text(app.new_item_input_mut(), key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(_) if !is_plain(key) => {}
        KeyCode::Up if app.selected_index() == Some(0) => app.focus_input(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('e') => app.begin_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('c') => app.copy_selected(),
        KeyCode::Char(ch @ '1'..='3') => {
            let index = ch.to_digit(10).map_or(0, |d| d as usize - 1);
            app.set_filter(FilterMode::from_index(index));
        }
        KeyCode::Tab => app.next_filter(),
        KeyCode::BackTab => app.prev_filter(),
        KeyCode::Esc | KeyCode::Char('i') => app.focus_input(),
        _ => {}
    }
    // The tab may have emptied under the cursor
    if app.focus() == Focus::List && app.selected_item().is_none() {
        app.focus_input();
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.save_edit();
        }
        KeyCode::Esc => app.cancel_edit(),
        _ => edit_text(app.edit_input_mut(), key),
    }
}

fn edit_text(input: &mut TextInput, key: KeyEvent) {
    match key.code {
        KeyCode::Char(ch) if is_plain(key) => input.insert(ch),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ => {}
    }
}

/// No Ctrl or Alt held; Shift is part of the character.
fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
