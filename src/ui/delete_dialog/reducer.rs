use crate::ui::delete_dialog::intent::DeleteIntent;
use crate::ui::delete_dialog::state::DeleteDialogState;
use crate::ui::mvi::Reducer;

pub struct DeleteReducer;

impl Reducer for DeleteReducer {
    type State = DeleteDialogState;
    type Intent = DeleteIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // A new request replaces whatever was pending
            DeleteIntent::Request { id, text } => DeleteDialogState::Pending { id, text },
            DeleteIntent::Confirm | DeleteIntent::Cancel => match state {
                DeleteDialogState::Pending { .. } => DeleteDialogState::Hidden,
                other => other,
            },
        }
    }
}
