//! # Feedback Sink
//!
//! Where chat output goes. The host displays `(speaker, content)` pairs;
//! whisper routing is already encoded in `content` by the caller.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::Mutex;

/// Sends a chat message as `speaker`
pub trait FeedbackSink: Send + Sync {
    fn send_chat(&self, speaker: &str, content: &str) -> Result<()>;
}

/// One message handed to a sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: String,
    pub content: String,
}

/// Writes every message to stdout as one JSON line
#[derive(Debug, Default)]
pub struct StdoutSink;

impl FeedbackSink for StdoutSink {
    fn send_chat(&self, speaker: &str, content: &str) -> Result<()> {
        let line = serde_json::to_string(&ChatMessage {
            speaker: speaker.to_string(),
            content: content.to_string(),
        })?;
        let mut out = std::io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}

/// Keeps every message in memory, for tests and dry runs
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<ChatMessage>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl FeedbackSink for RecordingSink {
    fn send_chat(&self, speaker: &str, content: &str) -> Result<()> {
        self.messages
            .lock()
            .map_err(|_| anyhow!("recording sink lock poisoned"))?
            .push(ChatMessage {
                speaker: speaker.to_string(),
                content: content.to_string(),
            });
        Ok(())
    }
}
