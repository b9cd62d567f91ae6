//! prompt-include: recursive directive expansion for prompt templates.
//!
//! Templates carry inline directives that are resolved at load time:
//!
//! - `<$PATH$>` - include a file, expanding its directives in turn
//! - `<$dir:PATTERN$>` - include every file matching a glob pattern
//! - `<$datetime:FORMAT$>` - the current local time
//! - `<$conversation_history$>` - the conversation so far (message loading only)
//!
//! Failures never abort expansion: an unresolvable directive is replaced by
//! an inline `[ERROR: ...]` marker and the rest of the template expands
//! normally.
//!
//! ```no_run
//! use prompt_include::prompt::{HistoryEntry, Message, PromptRecord, load_prompt};
//!
//! let record = PromptRecord::new(vec![
//!     Message::new("system", "<$persona.md$>\nToday is <$datetime:%A$>."),
//!     Message::new("user", "<$conversation_history$>"),
//! ]);
//! let history = vec![HistoryEntry::new("user", "hi")];
//!
//! let messages = load_prompt(record, &history).unwrap();
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod expand;
pub mod logging;
pub mod prompt;

#[cfg(test)]
mod test_support;
