//! The `expand` command: load and expand a prompt record.

use super::{current_dir, finish, resolve_config};
use crate::cli::ExpandArgs;
use crate::error::Result;
use crate::prompt::{HistoryEntry, LoadedPrompt, PromptRecord};
use std::path::Path;

pub(super) fn cmd_expand(args: ExpandArgs) -> Result<()> {
    let cwd = current_dir()?;
    let loaded = expand_record(&args, &cwd)?;

    println!("{}", loaded.record.to_json_pretty()?);
    finish(loaded.errors.len(), args.options.strict)
}

/// Load the record and history named by `args` and expand them.
pub(super) fn expand_record(args: &ExpandArgs, cwd: &Path) -> Result<LoadedPrompt> {
    let config = resolve_config(&args.options, cwd)?;
    let loader = config.loader(cwd)?;

    let record = PromptRecord::load(cwd.join(&args.prompt))?;
    let history = match &args.history {
        Some(path) => HistoryEntry::load_list(cwd.join(path))?,
        None => Vec::new(),
    };

    Ok(loader.load(record, &history))
}
