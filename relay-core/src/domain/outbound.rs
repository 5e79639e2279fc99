use crate::foundation::{Identity, RelayError, Result};
use serde::{Deserialize, Serialize};

/// A permissionless submission recorded by the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub index: u64,
    pub sender: Identity,
    pub content: String,
    /// Unix seconds, read from the relay clock.
    pub submitted_at: u64,
    /// Reserved; nothing in the relay sets it.
    pub delivered: bool,
}

/// Append-only ledger of outbound messages. Indices are dense and start at 0.
#[derive(Clone, Debug, Default)]
pub struct OutboundLedger {
    messages: Vec<OutboundMessage>,
    max_content_bytes: usize,
}

impl OutboundLedger {
    /// `max_content_bytes == 0` disables the size check.
    pub fn new(max_content_bytes: usize) -> Self {
        Self { messages: Vec::new(), max_content_bytes }
    }

    pub fn max_content_bytes(&self) -> usize {
        self.max_content_bytes
    }

    pub fn validate_content(&self, content: &str) -> Result<()> {
        if content.is_empty() {
            return Err(RelayError::EmptyContent);
        }
        if self.max_content_bytes > 0 && content.len() > self.max_content_bytes {
            return Err(RelayError::ContentTooLarge { size: content.len(), max: self.max_content_bytes });
        }
        Ok(())
    }

    pub fn append(&mut self, sender: Identity, content: String, submitted_at: u64) -> Result<&OutboundMessage> {
        self.validate_content(&content)?;
        let index = self.count();
        self.messages.push(OutboundMessage { index, sender, content, submitted_at, delivered: false });
        Ok(&self.messages[self.messages.len() - 1])
    }

    pub fn count(&self) -> u64 {
        self.messages.len() as u64
    }

    pub fn list_all(&self) -> Vec<OutboundMessage> {
        self.messages.clone()
    }

    /// Entries `[start, start + limit)`, clamped to the ledger.
    pub fn list_range(&self, start: u64, limit: u64) -> Vec<OutboundMessage> {
        let len = self.messages.len();
        let start = usize::try_from(start).unwrap_or(usize::MAX).min(len);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        let end = start.saturating_add(limit).min(len);
        self.messages[start..end].to_vec()
    }

    pub fn get(&self, index: u64) -> Option<OutboundMessage> {
        usize::try_from(index).ok().and_then(|idx| self.messages.get(idx)).cloned()
    }
}
