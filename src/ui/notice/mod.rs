//! Transient status line shown after user actions.

mod intent;
mod reducer;
mod state;

pub use intent::NoticeIntent;
pub use reducer::NoticeReducer;
pub use state::{NoticeKind, NoticeState};
