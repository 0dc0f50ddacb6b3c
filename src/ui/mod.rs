pub mod app;
pub mod delete_dialog;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notice;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod text_input;
pub mod theme;

pub use runtime::run;
