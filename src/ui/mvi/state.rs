/// Marker trait for UI state objects.
///
/// `Default` is the resting state, which lets the app take the current
/// state out of its field while the reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
