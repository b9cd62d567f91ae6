//! CLI argument parsing for prompt-include.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// prompt-include: expand file, directory, datetime and history directives in prompt templates.
///
/// Directives:
/// - `<$PATH$>` includes a file
/// - `<$dir:PATTERN$>` includes every file matching a glob
/// - `<$datetime:FORMAT$>` inserts the current time (strftime format)
/// - `<$conversation_history$>` inserts the conversation so far (`expand` only)
#[derive(Parser, Debug)]
#[command(name = "prompt-include")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log every resolved directive to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Expand every message of a JSON prompt record.
    ///
    /// Substitutes the conversation history, expands all directives, and
    /// prints the record as JSON. Fields other than `messages` pass through.
    Expand(ExpandArgs),

    /// Expand a single template and print the resulting text.
    Render(RenderArgs),

    /// List the directives a template contains without resolving them.
    Scan(ScanArgs),
}

/// Settings shared by the expanding commands.
///
/// Flags override values from the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ExpansionOptions {
    /// Depth budget per message (default: 5).
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Header printed before each file of a directory inclusion, e.g. "--- {filename} ---".
    #[arg(long)]
    pub file_delimiter: Option<String>,

    /// Directory that directive paths resolve against (default: working directory).
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Config file (default: .prompt-include.yaml in the working directory, if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Exit with status 2 if any directive rendered an error marker.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `expand` command.
#[derive(Parser, Debug)]
pub struct ExpandArgs {
    /// Prompt record: JSON object with a `messages` array of {role, content}.
    pub prompt: PathBuf,

    /// Conversation history: JSON array of {role, content}.
    #[arg(long)]
    pub history: Option<PathBuf>,

    #[command(flatten)]
    pub options: ExpansionOptions,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Template file, or `-` for stdin.
    pub template: String,

    #[command(flatten)]
    pub options: ExpansionOptions,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Template file, or `-` for stdin.
    pub template: String,
}
