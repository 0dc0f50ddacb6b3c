use crate::ui::mvi::UiState;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum NoticeState {
    #[default]
    Hidden,
    Visible {
        message: String,
        kind: NoticeKind,
        shown_at: Instant,
    },
}

impl UiState for NoticeState {}

impl NoticeState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Visible { message, .. } => Some(message),
            Self::Hidden => None,
        }
    }
}
