mod common;

use common::{alt, ctrl, make_app, press, submit, type_text, visible_texts};
use crossterm::event::KeyCode;
use mytodo::config::ThemeMode;
use mytodo::todo::FilterMode;
use mytodo::ui::app::Focus;
use mytodo::ui::input::handle_key;
use mytodo::ui::notice::{NoticeKind, NoticeState};

#[test]
fn submit_adds_item_and_clears_field() {
    let mut app = make_app();
    submit(&mut app, "Buy milk");

    assert_eq!(visible_texts(&app), vec!["Buy milk"]);
    assert!(app.new_item_input().is_empty());
    assert_eq!(app.new_item_input().char_count(), 0);
    assert_eq!(app.notice().message(), Some("Added new to-do item"));
}

#[test]
fn blank_submit_is_ignored() {
    let mut app = make_app();
    submit(&mut app, "   ");
    assert!(app.store().is_empty());
    assert!(!app.notice().is_visible());
}

#[test]
fn character_counter_follows_typing() {
    let mut app = make_app();
    type_text(&mut app, "héllo");
    assert_eq!(app.new_item_input().char_count(), 5);
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.new_item_input().char_count(), 4);
}

#[test]
fn toggling_moves_item_between_tabs() {
    let mut app = make_app();
    submit(&mut app, "Buy milk");
    submit(&mut app, "Call mom");

    press(&mut app, KeyCode::Down);
    assert_eq!(app.focus(), Focus::List);
    press(&mut app, KeyCode::Char(' '));

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.filter(), FilterMode::Pending);
    assert_eq!(visible_texts(&app), vec!["Call mom"]);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.filter(), FilterMode::Done);
    assert_eq!(visible_texts(&app), vec!["Buy milk"]);

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(visible_texts(&app), vec!["Buy milk", "Call mom"]);
}

#[test]
fn tab_cycles_filters_from_input() {
    let mut app = make_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.filter(), FilterMode::Pending);
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.filter(), FilterMode::Done);
}

#[test]
fn emptied_tab_returns_focus_to_input() {
    let mut app = make_app();
    submit(&mut app, "only");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.focus(), Focus::List);

    press(&mut app, KeyCode::Char(' '));
    assert!(app.visible_items().is_empty());
    assert_eq!(app.focus(), Focus::Input);
}

#[test]
fn edit_replaces_text() {
    let mut app = make_app();
    submit(&mut app, "Buy milk");
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('e'));
    assert!(matches!(app.focus(), Focus::Editing(_)));
    assert_eq!(app.edit_input().value(), "Buy milk");

    type_text(&mut app, " and eggs");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.focus(), Focus::List);
    assert_eq!(visible_texts(&app), vec!["Buy milk and eggs"]);
    assert_eq!(app.notice().message(), Some("Updated item successfully"));
}

#[test]
fn blank_edit_is_rejected() {
    let mut app = make_app();
    submit(&mut app, "Buy milk");
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('e'));
    for _ in 0..8 {
        press(&mut app, KeyCode::Backspace);
    }
    press(&mut app, KeyCode::Enter);

    assert!(matches!(app.focus(), Focus::Editing(_)));
    assert_eq!(visible_texts(&app), vec!["Buy milk"]);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus(), Focus::List);
    assert_eq!(visible_texts(&app), vec!["Buy milk"]);
}

#[test]
fn delete_requires_confirmation() {
    let mut app = make_app();
    submit(&mut app, "Buy milk");
    submit(&mut app, "Call mom");
    press(&mut app, KeyCode::Down);

    press(&mut app, KeyCode::Char('d'));
    assert!(app.delete_dialog().is_visible());
    assert_eq!(app.store().len(), 2);

    // Other keys are swallowed while the dialog is open
    press(&mut app, KeyCode::Char(' '));
    assert!(app.store().all().iter().all(|item| !item.is_done()));

    press(&mut app, KeyCode::Char('y'));
    assert!(!app.delete_dialog().is_visible());
    assert_eq!(visible_texts(&app), vec!["Call mom"]);
    assert_eq!(app.notice().message(), Some("Deleted item successfully"));
}

#[test]
fn cancelled_delete_keeps_item() {
    let mut app = make_app();
    submit(&mut app, "Buy milk");
    press(&mut app, KeyCode::Down);

    press(&mut app, KeyCode::Delete);
    assert!(app.delete_dialog().is_visible());
    press(&mut app, KeyCode::Esc);

    assert!(!app.delete_dialog().is_visible());
    assert_eq!(visible_texts(&app), vec!["Buy milk"]);
    assert_eq!(app.focus(), Focus::List);
}

#[test]
fn deleting_selected_second_item_moves_selection_up() {
    let mut app = make_app();
    submit(&mut app, "a");
    submit(&mut app, "b");
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_item().map(|item| item.text().to_string()), Some("b".to_string()));

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.selected_index(), Some(0));
    assert_eq!(visible_texts(&app), vec!["a"]);
}

#[test]
fn up_from_top_of_list_returns_to_input() {
    let mut app = make_app();
    submit(&mut app, "a");
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.focus(), Focus::Input);
}

#[test]
fn ctrl_t_toggles_theme() {
    let mut app = make_app();
    assert_eq!(app.theme(), ThemeMode::Light);
    handle_key(&mut app, ctrl('t'));
    assert_eq!(app.theme(), ThemeMode::Dark);
    handle_key(&mut app, ctrl('t'));
    assert_eq!(app.theme(), ThemeMode::Light);
}

#[test]
fn ctrl_t_does_not_type_into_field() {
    let mut app = make_app();
    handle_key(&mut app, ctrl('t'));
    assert!(app.new_item_input().is_empty());
}

#[test]
fn quit_keys() {
    let mut app = make_app();
    handle_key(&mut app, ctrl('q'));
    assert!(app.should_quit());

    let mut app = make_app();
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}

#[test]
fn paste_goes_to_focused_field() {
    let mut app = make_app();
    app.on_paste("Buy\nmilk");
    assert_eq!(app.new_item_input().value(), "Buy milk");
}

#[test]
fn copy_shows_notice_and_keeps_items() {
    let mut app = make_app();
    submit(&mut app, "Buy milk");
    submit(&mut app, "Call mom");
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    let before = app.store().all().to_vec();

    press(&mut app, KeyCode::Char('c'));

    // Headless machines have no clipboard; either outcome is reported
    match app.notice() {
        NoticeState::Visible { message, kind, .. } => match kind {
            NoticeKind::Info => assert_eq!(message, "Copied to clipboard"),
            NoticeKind::Error => assert!(!message.is_empty()),
        },
        NoticeState::Hidden => panic!("copy left no notice"),
    }
    assert_eq!(app.store().all(), before.as_slice());
    assert_eq!(app.focus(), Focus::List);
}

#[test]
fn ctrl_o_dismisses_notice() {
    let mut app = make_app();
    submit(&mut app, "Buy milk");
    assert!(app.notice().is_visible());

    handle_key(&mut app, ctrl('o'));
    assert!(!app.notice().is_visible());
    assert!(app.new_item_input().is_empty());
}

#[test]
fn ctrl_o_is_ignored_while_dialog_open() {
    let mut app = make_app();
    submit(&mut app, "Buy milk");
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('d'));

    handle_key(&mut app, ctrl('o'));
    assert!(app.notice().is_visible());
    assert!(app.delete_dialog().is_visible());
}

#[test]
fn modified_letters_do_not_trigger_list_actions() {
    let mut app = make_app();
    submit(&mut app, "Buy milk");
    press(&mut app, KeyCode::Down);

    handle_key(&mut app, ctrl('e'));
    assert_eq!(app.focus(), Focus::List);

    handle_key(&mut app, alt('d'));
    assert!(!app.delete_dialog().is_visible());

    handle_key(&mut app, alt('i'));
    handle_key(&mut app, ctrl(' '));
    assert_eq!(app.focus(), Focus::List);
    assert!(app.store().all().iter().all(|item| !item.is_done()));

    press(&mut app, KeyCode::Char('e'));
    assert!(matches!(app.focus(), Focus::Editing(_)));
}
