/// Marker trait for view state.
///
/// `Default` is the state before any engine data arrived; stores take the
/// current value with `std::mem::take` and put the reduced one back.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
