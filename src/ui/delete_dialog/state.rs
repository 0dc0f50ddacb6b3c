use crate::todo::ItemId;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeleteDialogState {
    #[default]
    Hidden,
    /// Waiting for the user to confirm or cancel deleting `id`.
    Pending { id: ItemId, text: String },
}

impl UiState for DeleteDialogState {}

impl DeleteDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn pending_id(&self) -> Option<ItemId> {
        match self {
            Self::Pending { id, .. } => Some(*id),
            Self::Hidden => None,
        }
    }
}
