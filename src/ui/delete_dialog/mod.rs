mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_delete_dialog;
pub use intent::DeleteIntent;
pub use reducer::DeleteReducer;
pub use state::DeleteDialogState;
