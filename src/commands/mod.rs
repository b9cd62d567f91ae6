//! Command implementations for prompt-include.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the option and input handling they share.

mod expand;
mod render;
mod scan;


use crate::cli::{Command, ExpansionOptions};
use crate::config::Config;
use crate::error::{PromptError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Expand(args) => expand::cmd_expand(args),
        Command::Render(args) => render::cmd_render(args),
        Command::Scan(args) => scan::cmd_scan(args),
    }
}

/// The process working directory, as a hard failure if unreadable.
fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        PromptError::IoError(format!("failed to get current working directory: {}", e))
    })
}

/// Merge the config file (explicit or discovered) with command-line flags.
fn resolve_config(options: &ExpansionOptions, cwd: &Path) -> Result<Config> {
    let mut config = match &options.config {
        Some(path) => Config::load(cwd.join(path))?,
        None => Config::discover(cwd)?,
    };

    if let Some(max_depth) = options.max_depth {
        config.max_depth = max_depth;
    }
    if let Some(delimiter) = &options.file_delimiter {
        config.file_delimiter = Some(delimiter.clone());
    }
    if let Some(base_dir) = &options.base_dir {
        config.base_dir = Some(base_dir.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Read a template from a file, or from stdin when `source` is `-`.
fn read_template(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| PromptError::IoError(format!("failed to read stdin: {}", e)))?;
        return Ok(buf);
    }

    std::fs::read_to_string(source).map_err(|e| {
        PromptError::UserError(format!("failed to read template '{}': {}", source, e))
    })
}

/// Turn the inline error count into the command outcome.
fn finish(error_count: usize, strict: bool) -> Result<()> {
    if error_count == 0 {
        return Ok(());
    }

    warn!(count = error_count, "expansion rendered inline errors");
    if strict {
        Err(PromptError::ExpansionErrors(error_count))
    } else {
        Ok(())
    }
}
