/// Marker trait for intents.
///
/// Intents are facts that already happened (the engine answered, the timer
/// ticked, the player closed a dialog). They never carry a request.
pub trait Intent: Send + 'static {}
