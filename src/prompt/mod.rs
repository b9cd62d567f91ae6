//! Message loading: conversation history substitution plus expansion.
//!
//! The caller owns the prompt record and the conversation history. Loading
//! takes both, substitutes the history into any message carrying the
//! `<$conversation_history$>` placeholder, and expands every message with its
//! own depth budget.

mod loader;
mod model;


pub use loader::{
    CONVERSATION_HISTORY_PLACEHOLDER, DEFAULT_MAX_DEPTH, LoadedPrompt, PromptLoader, load_prompt,
    render_history,
};
pub use model::{HistoryEntry, Message, PromptRecord};
