/// Marker trait for intent objects: key presses, timer ticks and other
/// events a reducer understands.
pub trait Intent: Send + 'static {}
