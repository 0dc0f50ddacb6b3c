use crate::todo::ItemId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DeleteIntent {
    /// User asked to delete an item; opens the confirmation.
    Request { id: ItemId, text: String },
    /// User accepted. The caller removes the item from the store.
    Confirm,
    /// User declined. Nothing is removed.
    Cancel,
}

impl Intent for DeleteIntent {}
