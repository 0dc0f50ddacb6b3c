use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a to-do item. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    pub(crate) text: String,
    pub(crate) done: bool,
}

impl Item {
    pub(crate) fn new(text: String) -> Self {
        Self {
            id: ItemId::new(),
            text,
            done: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Item text must contain at least one non-whitespace character.
pub(crate) fn is_valid_text(text: &str) -> bool {
    !text.trim().is_empty()
}
