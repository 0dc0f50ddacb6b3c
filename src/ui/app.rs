use crate::clipboard::ClipboardHandler;
use crate::config::{ThemeMode, UiConfig};
use crate::todo::{visible, Counts, FilterMode, Item, ItemId, ItemStore};
use crate::ui::delete_dialog::{DeleteDialogState, DeleteIntent, DeleteReducer};
use crate::ui::mvi::Reducer;
use crate::ui::notice::{NoticeIntent, NoticeKind, NoticeReducer, NoticeState};
use crate::ui::text_input::TextInput;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    /// Typing a new item.
    Input,
    /// Navigating the item list.
    List,
    /// Editing the text of an existing item.
    Editing(ItemId),
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
        $self.mark_dirty();
    };
}

pub struct App {
    should_quit: bool,
    store: ItemStore,
    filter: FilterMode,
    focus: Focus,
    /// Index into the currently visible items.
    selected: usize,
    new_item: TextInput,
    edit: TextInput,
    /// State of the delete confirmation (MVI pattern).
    delete_dialog: DeleteDialogState,
    /// Transient status message (MVI pattern).
    notice: NoticeState,
    notice_ttl: Duration,
    theme: ThemeMode,
    /// Opened on first copy; stays `None` where no clipboard exists.
    clipboard: Option<ClipboardHandler>,
    /// Set by the store observer and by UI changes, cleared on draw.
    dirty: Rc<Cell<bool>>,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let mut store = ItemStore::new();
        let flag = Rc::clone(&dirty);
        store.subscribe(move |_| flag.set(true));

        Self {
            should_quit: false,
            store,
            filter: FilterMode::default(),
            focus: Focus::Input,
            selected: 0,
            new_item: TextInput::new(),
            edit: TextInput::new(),
            delete_dialog: DeleteDialogState::default(),
            notice: NoticeState::default(),
            notice_ttl: Duration::from_millis(config.notice_duration_ms),
            theme: config.theme,
            clipboard: None,
            dirty,
        }
    }

    /// Add items given on the command line. Blank entries are skipped.
    pub fn add_initial_items<I>(&mut self, texts: I)
    where
        I: IntoIterator<Item = String>,
    {
        for text in texts {
            self.store.add(text);
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn counts(&self) -> Counts {
        self.store.counts()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn new_item_input(&self) -> &TextInput {
        &self.new_item
    }

    pub fn new_item_input_mut(&mut self) -> &mut TextInput {
        self.mark_dirty();
        &mut self.new_item
    }

    pub fn edit_input(&self) -> &TextInput {
        &self.edit
    }

    pub fn edit_input_mut(&mut self) -> &mut TextInput {
        self.mark_dirty();
        &mut self.edit
    }

    pub fn delete_dialog(&self) -> &DeleteDialogState {
        &self.delete_dialog
    }

    pub fn notice(&self) -> &NoticeState {
        &self.notice
    }

    /// Items shown under the active tab.
    pub fn visible_items(&self) -> Vec<&Item> {
        visible(self.store.all(), self.filter)
    }

    /// Selection index, or `None` when the active tab is empty.
    pub fn selected_index(&self) -> Option<usize> {
        (self.selected < self.visible_items().len()).then_some(self.selected)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.visible_items().get(self.selected).copied()
    }

    /// Returns and clears the redraw flag.
    pub fn take_redraw(&self) -> bool {
        self.dirty.replace(false)
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    pub fn on_resize(&mut self) {
        self.mark_dirty();
    }

    pub fn on_tick(&mut self, now: Instant) {
        if !self.notice.is_visible() {
            return;
        }
        let expired = NoticeReducer::reduce(
            self.notice.clone(),
            NoticeIntent::Expire {
                now,
                ttl: self.notice_ttl,
            },
        );
        if expired != self.notice {
            self.notice = expired;
            self.mark_dirty();
        }
    }

    /// Hide the current notice before it expires.
    pub fn dismiss_notice(&mut self) {
        if self.notice.is_visible() {
            dispatch_mvi!(self, notice, NoticeReducer, NoticeIntent::Dismiss);
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        match self.focus {
            Focus::Input => self.new_item_input_mut().insert_str(text),
            Focus::Editing(_) => self.edit_input_mut().insert_str(text),
            Focus::List => {}
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::info!(theme = self.theme.label(), "Theme toggled");
        self.mark_dirty();
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        if self.filter != mode {
            self.filter = mode;
            self.selected = 0;
            self.mark_dirty();
        }
    }

    pub fn next_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn prev_filter(&mut self) {
        self.set_filter(self.filter.prev());
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
        self.mark_dirty();
    }

    /// Move focus to the list. Stays on the input when the tab is empty.
    pub fn focus_list(&mut self) -> bool {
        if self.visible_items().is_empty() {
            return false;
        }
        self.focus = Focus::List;
        self.clamp_selection();
        self.mark_dirty();
        true
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.visible_items().len();
        if len == 0 {
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
        self.mark_dirty();
    }

    /// Submit the new-item field. Blank input is ignored.
    pub fn submit_new_item(&mut self) -> bool {
        let Some(item) = self.store.add(self.new_item.value()) else {
            return false;
        };
        self.new_item.clear();
        tracing::info!(id = %item.id(), "New item submitted");
        self.show_notice("Added new to-do item", NoticeKind::Info);
        true
    }

    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_item().map(Item::id) else {
            return;
        };
        self.store.toggle_done(id);
        self.clamp_selection();
    }

    pub fn begin_edit(&mut self) {
        let Some((id, text)) = self
            .selected_item()
            .map(|item| (item.id(), item.text().to_string()))
        else {
            return;
        };
        self.edit = TextInput::with_text(&text);
        self.focus = Focus::Editing(id);
        self.mark_dirty();
    }

    /// Save the edit buffer. Blank text is rejected and editing continues.
    pub fn save_edit(&mut self) -> bool {
        let Focus::Editing(id) = self.focus else {
            return false;
        };
        if self.store.get(id).is_none() {
            self.focus = Focus::List;
            self.clamp_selection();
            return false;
        }
        if !self.store.set_text(id, self.edit.value()) {
            return false;
        }
        self.edit.clear();
        self.focus = Focus::List;
        self.show_notice("Updated item successfully", NoticeKind::Info);
        true
    }

    pub fn cancel_edit(&mut self) {
        if matches!(self.focus, Focus::Editing(_)) {
            self.edit.clear();
            self.focus = Focus::List;
            self.mark_dirty();
        }
    }

    /// Open the confirmation for the selected item.
    pub fn request_delete(&mut self) {
        let Some((id, text)) = self
            .selected_item()
            .map(|item| (item.id(), item.text().to_string()))
        else {
            return;
        };
        dispatch_mvi!(self, delete_dialog, DeleteReducer, DeleteIntent::Request { id, text });
    }

    /// Remove `id` and close the confirmation.
    pub fn confirm_delete(&mut self, id: ItemId) {
        let removed = self.store.remove(id);
        dispatch_mvi!(self, delete_dialog, DeleteReducer, DeleteIntent::Confirm);
        self.clamp_selection();
        if removed {
            tracing::info!(%id, "Item deleted");
            self.show_notice("Deleted item successfully", NoticeKind::Info);
        }
        if self.visible_items().is_empty() {
            self.focus = Focus::Input;
        }
    }

    pub fn cancel_delete(&mut self) {
        dispatch_mvi!(self, delete_dialog, DeleteReducer, DeleteIntent::Cancel);
    }

    pub fn copy_selected(&mut self) {
        let Some(text) = self.selected_item().map(|item| item.text().to_string()) else {
            return;
        };
        let mut handler = match self.clipboard.take() {
            Some(handler) => handler,
            None => match ClipboardHandler::new() {
                Ok(handler) => handler,
                Err(err) => {
                    tracing::warn!(error = %err, "Clipboard unavailable");
                    self.show_notice(err.to_string(), NoticeKind::Error);
                    return;
                }
            },
        };
        let result = handler.set_text(&text);
        self.clipboard = Some(handler);
        match result {
            Ok(()) => self.show_notice("Copied to clipboard", NoticeKind::Info),
            Err(err) => {
                tracing::warn!(error = %err, "Copy failed");
                self.show_notice(err.to_string(), NoticeKind::Error);
            }
        }
    }

    fn show_notice(&mut self, message: impl Into<String>, kind: NoticeKind) {
        dispatch_mvi!(
            self,
            notice,
            NoticeReducer,
            NoticeIntent::Show {
                message: message.into(),
                kind,
                at: Instant::now(),
            }
        );
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_items().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
