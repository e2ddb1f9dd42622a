//! Server-Sent Events decoding for the engine's duration stream.
//!
//! Accepts both `data:{...}` and `data: {...}`. Chunks may split records at
//! any byte, so the decoder buffers until a blank line closes a record.

use serde_json::Value;

use super::types::TimeEvent;

/// A decoded SSE record.
#[derive(Debug, Clone, PartialEq)]
pub struct SseEvent {
    /// The `event:` field, `"message"` when absent.
    pub event_type: String,
    /// Parsed JSON payload of the joined `data:` lines.
    pub data: Value,
}

impl SseEvent {
    /// Interpret the record as a duration tick if it is one.
    pub fn time_event(&self, name: &str) -> Option<TimeEvent> {
        if self.event_type != name {
            return None;
        }
        serde_json::from_value(self.data.clone()).ok()
    }
}

/// Incremental SSE decoder.
///
/// Bytes are held undecoded until a record is complete, so a UTF-8 sequence
/// split between chunks survives.
#[derive(Debug, Default)]
pub struct SseDecoder {
    pending: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw bytes, returning every record completed by them.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        self.pending.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(end) = record_end(&self.pending) {
            let record: Vec<u8> = self.pending.drain(..end).collect();
            if let Some(event) = parse_record(&String::from_utf8_lossy(&record)) {
                events.push(event);
            }
        }
        events
    }
}

/// Offset just past the first blank line, LF or CRLF.
fn record_end(buf: &[u8]) -> Option<usize> {
    let lf = buf.windows(2).position(|w| w == b"\n\n").map(|i| i + 2);
    let crlf = buf.windows(4).position(|w| w == b"\r\n\r\n").map(|i| i + 4);
    match (lf, crlf) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Parse a complete byte buffer into events.
pub fn parse_sse_events(bytes: &[u8]) -> Vec<SseEvent> {
    let mut decoder = SseDecoder::new();
    let mut events = decoder.push(bytes);
    // A trailing record without its blank line still counts.
    events.extend(decoder.push(b"\n\n"));
    events
}

fn parse_record(record: &str) -> Option<SseEvent> {
    let mut event_type = None;
    let mut data = Vec::new();

    for line in record.lines() {
        if line.is_empty() || line.starts_with(':') {
            continue;
        }
        if let Some(value) = line.strip_prefix("event:") {
            event_type = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("data:") {
            data.push(value.trim_start());
        }
    }

    if data.is_empty() {
        return None;
    }
    let data: Value = serde_json::from_str(&data.join("\n")).ok()?;
    Some(SseEvent {
        event_type: event_type.unwrap_or_else(|| "message".to_string()),
        data,
    })
}
