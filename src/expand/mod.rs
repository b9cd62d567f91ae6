//! Directive expansion engine for prompt templates.
//!
//! This module provides:
//!
//! - **Directive**: locating directive spans in text, tagged by kind
//! - **Datetime**: `<$datetime:FORMAT$>` rendering of the current time
//! - **Directory**: `<$dir:PATTERN$>` glob inclusion with optional per-file delimiters
//! - **File**: `<$PATH$>` single-file inclusion
//! - **Orchestrator**: the [`Expander`] that drives all three in a fixed order
//!
//! # Directive Syntax
//!
//! ```text
//! Today is <$datetime:%A$>.
//!
//! Style guide:
//! <$docs/style.md$>
//!
//! All notes:
//! <$dir:notes/*.md$>
//! ```
//!
//! Datetime directives are resolved first, then directory directives, then
//! generic file directives. Included content is expanded recursively until the
//! depth budget runs out.
//!
//! # Error Handling
//!
//! A directive that cannot be resolved is replaced by a bracketed marker such
//! as `[ERROR: File notes.md not found]`. The rest of the text still expands.
//! Every rendered marker is also reported in [`Expansion::errors`].

mod datetime;
mod delimiter;
mod directive;
mod directory;
mod error;
mod file;
mod orchestrator;


pub use datetime::{DEFAULT_DATETIME_FORMAT, format_timestamp};
pub use delimiter::{FileDelimiter, TemplateError};
pub use directive::{DirectiveKind, DirectiveSpan, find_directives, scan};
pub use error::DirectiveError;
pub use orchestrator::{Expander, Expansion};
