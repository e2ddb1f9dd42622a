//! HTTP transport for the game engine.
//!
//! Commands are JSON over `POST`/`GET`; duration ticks arrive as a
//! Server-Sent Events stream on `/events`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::time::timeout;

use super::sse::SseDecoder;
use super::{EngineError, FlagResult, GameEngine, OpenResult, TimeEvent, WinHistory, TIME_EVENT};
use crate::board::Position;
use crate::config::EngineConfig;

/// Ticks buffered between the SSE reader and the timer bridge.
const TICK_BUFFER: usize = 32;

pub struct HttpEngine {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl HttpEngine {
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .map_err(|e| EngineError::Unavailable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_millis(config.request_timeout_ms),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        command: &'static str,
        request: RequestBuilder,
    ) -> Result<T, EngineError> {
        let bytes = self.exchange(command, request).await?;
        serde_json::from_slice(&bytes).map_err(|e| EngineError::Decode {
            command,
            message: e.to_string(),
        })
    }

    /// Send a request whose response body carries nothing of interest.
    async fn call_unit(&self, command: &'static str, request: RequestBuilder) -> Result<(), EngineError> {
        self.exchange(command, request).await.map(drop)
    }

    async fn exchange(
        &self,
        command: &'static str,
        request: RequestBuilder,
    ) -> Result<Vec<u8>, EngineError> {
        let millis = self.request_timeout.as_millis() as u64;
        let result = timeout(self.request_timeout, async {
            let response = request
                .send()
                .await
                .map_err(|source| EngineError::Transport { command, source })?;

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(EngineError::Status {
                    command,
                    status: status.as_u16(),
                    message,
                });
            }

            response
                .bytes()
                .await
                .map(|b| b.to_vec())
                .map_err(|source| EngineError::Transport { command, source })
        })
        .await;

        match result {
            Ok(response) => response,
            Err(_) => Err(EngineError::Timeout { command, millis }),
        }
    }
}

#[async_trait]
impl GameEngine for HttpEngine {
    async fn new_game(&self) -> Result<Vec<Position>, EngineError> {
        self.call("new_game", self.client.post(self.url("new_game")))
            .await
    }

    async fn reveal(&self, position: Position) -> Result<OpenResult, EngineError> {
        let request = self
            .client
            .post(self.url("open"))
            .json(&json!({ "position": position }));
        self.call("open", request).await
    }

    async fn toggle_flag(&self, position: Position) -> Result<FlagResult, EngineError> {
        let request = self
            .client
            .post(self.url("flag"))
            .json(&json!({ "position": position }));
        self.call("flag", request).await
    }

    async fn win_history(&self) -> Result<WinHistory, EngineError> {
        self.call("win_history", self.client.get(self.url("win_history")))
            .await
    }

    async fn pause_timer(&self) -> Result<(), EngineError> {
        self.call_unit("pause", self.client.post(self.url("pause")))
            .await
    }

    async fn resume_timer(&self) -> Result<(), EngineError> {
        self.call_unit("resume", self.client.post(self.url("resume")))
            .await
    }

    async fn duration_events(&self) -> Result<mpsc::Receiver<TimeEvent>, EngineError> {
        let command = "events";
        let millis = self.request_timeout.as_millis() as u64;
        let request = self
            .client
            .get(self.url("events"))
            .header("accept", "text/event-stream");

        // Only the handshake is bounded; the stream itself is long-lived.
        let mut response = timeout(self.request_timeout, request.send())
            .await
            .map_err(|_| EngineError::Timeout { command, millis })?
            .map_err(|source| EngineError::Transport { command, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Status {
                command,
                status: status.as_u16(),
                message: "duration stream refused".to_string(),
            });
        }

        let (tx, rx) = mpsc::channel(TICK_BUFFER);
        tokio::spawn(async move {
            let mut decoder = SseDecoder::new();
            loop {
                let chunk = tokio::select! {
                    // Listener released, stop reading.
                    _ = tx.closed() => return,
                    chunk = response.chunk() => chunk,
                };
                let chunk = match chunk {
                    Ok(Some(chunk)) => chunk,
                    Ok(None) => {
                        tracing::debug!("engine closed the duration stream");
                        break;
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "duration stream failed");
                        break;
                    }
                };

                for event in decoder.push(&chunk) {
                    let Some(tick) = event.time_event(TIME_EVENT) else {
                        tracing::debug!(event = %event.event_type, "ignoring engine event");
                        continue;
                    };
                    if tx.send(tick).await.is_err() {
                        return;
                    }
                }
            }
        });

        Ok(rx)
    }
}
