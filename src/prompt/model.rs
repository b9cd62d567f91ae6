//! Prompt record, message, and history types.

use crate::error::{PromptError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// One role-tagged template message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Open role tag (`system`, `user`, `assistant`, ...).
    pub role: String,
    /// Template text; replaced by its expansion on load.
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// One turn of the conversation so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: String,
    pub content: String,
}

impl HistoryEntry {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Parse a JSON array of `{role, content}` objects.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        serde_json::from_str(json).map_err(|e| {
            PromptError::UserError(format!("failed to parse conversation history JSON: {}", e))
        })
    }

    /// Load a JSON array of history entries from a file.
    pub fn load_list<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let path = path.as_ref();
        let content = read_input(path, "conversation history")?;
        Self::list_from_json(&content)
    }
}

/// A prompt document: template messages plus whatever settings travel with them.
///
/// Fields other than `messages` (`model`, `temperature`, `max_tokens`, ...)
/// are kept verbatim in `extra` and written back out on serialization, so the
/// caller can hand them to its model client unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub messages: Vec<Message>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PromptRecord {
    /// Create a record holding only `messages`.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            extra: Map::new(),
        }
    }

    /// Parse a prompt record from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| PromptError::UserError(format!("failed to parse prompt JSON: {}", e)))
    }

    /// Load a prompt record from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = read_input(path, "prompt")?;
        Self::from_json(&content)
    }

    /// Serialize the record as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PromptError::UserError(format!("failed to serialize prompt JSON: {}", e)))
    }
}

fn read_input(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        PromptError::UserError(format!(
            "failed to read {} file '{}': {}",
            what,
            path.display(),
            e
        ))
    })
}
