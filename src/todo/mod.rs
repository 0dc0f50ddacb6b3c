//! To-do list core: the item collection and the filtered view over it.
//!
//! ```text
//! UI action ──→ ItemStore ──→ StoreEvent ──→ subscribers (redraw)
//!                   │
//!                   └──→ all() ──→ visible(mode) ──→ render
//! ```

mod filter;
mod item;
mod store;

pub use filter::{visible, Counts, FilterMode};
pub use item::{Item, ItemId};
pub use store::{ItemStore, StoreEvent, SubscriptionId};
