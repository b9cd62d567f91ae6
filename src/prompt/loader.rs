//! The message loader.

use super::model::{HistoryEntry, Message, PromptRecord};
use crate::error::Result;
use crate::expand::{DirectiveError, Expander};
use tracing::debug;

/// Token replaced by the rendered conversation history.
pub const CONVERSATION_HISTORY_PLACEHOLDER: &str = "<$conversation_history$>";

/// Depth budget each message starts with unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Render history as `role: content` lines joined by `\n`.
///
/// # Examples
///
/// ```
/// use prompt_include::prompt::{HistoryEntry, render_history};
///
/// let history = vec![
///     HistoryEntry::new("user", "hi"),
///     HistoryEntry::new("model", "hello"),
/// ];
/// assert_eq!(render_history(&history), "user: hi\nmodel: hello");
/// ```
pub fn render_history(history: &[HistoryEntry]) -> String {
    history
        .iter()
        .map(|entry| format!("{}: {}", entry.role, entry.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Output of [`PromptLoader::load`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPrompt {
    /// The input record with every message's content expanded.
    pub record: PromptRecord,
    /// Inline errors rendered across all messages, in message order.
    pub errors: Vec<DirectiveError>,
}

impl LoadedPrompt {
    pub fn messages(&self) -> &[Message] {
        &self.record.messages
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.record.messages
    }

    /// True when no directive in any message failed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Expands prompt records message by message.
#[derive(Debug, Clone)]
pub struct PromptLoader {
    expander: Expander,
    max_depth: u32,
}

impl PromptLoader {
    /// Create a loader with [`DEFAULT_MAX_DEPTH`].
    pub fn new(expander: Expander) -> Self {
        Self {
            expander,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the depth budget every message starts with.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn expander(&self) -> &Expander {
        &self.expander
    }

    /// Substitute the history placeholder, then expand every message.
    ///
    /// Every occurrence of the placeholder is replaced, in every message.
    /// History text is substituted before expansion, so directives written
    /// into a conversation turn are expanded like template text.
    pub fn load(&self, mut record: PromptRecord, history: &[HistoryEntry]) -> LoadedPrompt {
        let rendered_history = render_history(history);
        let mut errors = Vec::new();

        for (index, message) in record.messages.iter_mut().enumerate() {
            if message.content.contains(CONVERSATION_HISTORY_PLACEHOLDER) {
                message.content = message
                    .content
                    .replace(CONVERSATION_HISTORY_PLACEHOLDER, &rendered_history);
            }

            let expansion = self.expander.expand(&message.content, self.max_depth);
            debug!(
                index,
                role = %message.role,
                errors = expansion.errors.len(),
                "expanded message"
            );
            message.content = expansion.text;
            errors.extend(expansion.errors);
        }

        LoadedPrompt { record, errors }
    }
}

/// Load `record` against the process working directory with default settings.
///
/// # Returns
///
/// * `Ok(Vec<Message>)` - The expanded messages; directive failures are inline
/// * `Err(PromptError::IoError)` - If the working directory cannot be read
pub fn load_prompt(record: PromptRecord, history: &[HistoryEntry]) -> Result<Vec<Message>> {
    let loader = PromptLoader::new(Expander::from_current_dir()?);
    Ok(loader.load(record, history).into_messages())
}
