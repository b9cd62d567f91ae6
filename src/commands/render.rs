//! The `render` command: expand one template.

use super::{current_dir, finish, read_template, resolve_config};
use crate::cli::RenderArgs;
use crate::error::Result;
use crate::expand::Expansion;
use std::path::Path;

pub(super) fn cmd_render(args: RenderArgs) -> Result<()> {
    let cwd = current_dir()?;
    let template = read_template(&args.template)?;
    let expansion = render_text(&template, &args, &cwd)?;

    print!("{}", expansion.text);
    finish(expansion.errors.len(), args.options.strict)
}

pub(super) fn render_text(template: &str, args: &RenderArgs, cwd: &Path) -> Result<Expansion> {
    let config = resolve_config(&args.options, cwd)?;
    let expander = config.expander(cwd)?;
    Ok(expander.expand(template, config.max_depth))
}
