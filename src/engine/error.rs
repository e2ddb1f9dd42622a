use thiserror::Error;

/// Failures talking to the game engine.
///
/// All variants mean the same thing to the client: the request did not
/// complete and nothing changed.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine request '{command}' failed: {source}")]
    Transport {
        command: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("engine request '{command}' returned {status}: {message}")]
    Status {
        command: &'static str,
        status: u16,
        message: String,
    },

    #[error("engine request '{command}' timed out after {millis}ms")]
    Timeout { command: &'static str, millis: u64 },

    #[error("engine response to '{command}' could not be decoded: {message}")]
    Decode {
        command: &'static str,
        message: String,
    },

    #[error("engine unavailable: {0}")]
    Unavailable(String),
}
