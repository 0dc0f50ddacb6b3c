//! Ordered in-memory collection of to-do items.

use crate::todo::filter::Counts;
use crate::todo::item::{is_valid_text, Item, ItemId};

/// Change notification emitted after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(ItemId),
    Removed(ItemId),
    DoneChanged { id: ItemId, done: bool },
    TextChanged(ItemId),
}

/// Handle returned by [`ItemStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&StoreEvent)>;

/// Authoritative collection of items, kept in insertion order.
///
/// Rejected input (blank text) and unknown ids never mutate the store and
/// never notify subscribers.
#[derive(Default)]
pub struct ItemStore {
    items: Vec<Item>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new pending item. Returns `None` for blank text.
    pub fn add(&mut self, text: impl Into<String>) -> Option<Item> {
        let text = text.into();
        if !is_valid_text(&text) {
            tracing::debug!("Rejected blank item");
            return None;
        }
        let item = Item::new(text);
        let id = item.id();
        self.items.push(item.clone());
        tracing::debug!(%id, total = self.items.len(), "Item added");
        self.notify(StoreEvent::Added(id));
        Some(item)
    }

    /// Remove an item. Returns `false` if the id is unknown.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.items.remove(index);
        tracing::debug!(%id, total = self.items.len(), "Item removed");
        self.notify(StoreEvent::Removed(id));
        true
    }

    /// Set the completion flag. Returns whether the id was found.
    pub fn set_done(&mut self, id: ItemId, done: bool) -> bool {
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        if item.done == done {
            return true;
        }
        item.done = done;
        tracing::debug!(%id, done, "Item completion changed");
        self.notify(StoreEvent::DoneChanged { id, done });
        true
    }

    /// Flip the completion flag, returning the new value.
    pub fn toggle_done(&mut self, id: ItemId) -> Option<bool> {
        let done = !self.get(id)?.done;
        self.set_done(id, done);
        Some(done)
    }

    /// Replace the item text. Blank text is rejected and returns `false`.
    pub fn set_text(&mut self, id: ItemId, text: impl Into<String>) -> bool {
        let text = text.into();
        if !is_valid_text(&text) {
            tracing::debug!(%id, "Rejected blank edit");
            return false;
        }
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        item.text = text;
        tracing::debug!(%id, "Item text changed");
        self.notify(StoreEvent::TextChanged(id));
        true
    }

    /// All items in insertion order.
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn counts(&self) -> Counts {
        Counts::of(&self.items)
    }

    /// Register a callback fired synchronously after every mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drop a callback. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription);
        self.observers.len() != before
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish()
    }
}
