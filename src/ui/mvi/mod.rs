//! Model-View-Intent (MVI) architecture primitives.
//!
//! Dialog-like pieces of the UI keep their state in small enums that only
//! change through a reducer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
