//! The `scan` command: list directives without resolving them.

use super::read_template;
use crate::cli::ScanArgs;
use crate::error::Result;
use crate::expand::{DirectiveKind, scan};
use crate::prompt::CONVERSATION_HISTORY_PLACEHOLDER;

pub(super) fn cmd_scan(args: ScanArgs) -> Result<()> {
    let template = read_template(&args.template)?;
    for line in scan_lines(&template) {
        println!("{}", line);
    }
    Ok(())
}

/// One `kind<TAB>start..end<TAB>argument` line per directive.
///
/// The history placeholder is matched by the generic file pattern but is
/// labelled `history`, since the loader replaces it before expansion.
pub(super) fn scan_lines(template: &str) -> Vec<String> {
    scan(template)
        .into_iter()
        .map(|span| {
            let is_history = span.kind == DirectiveKind::File
                && &template[span.range.clone()] == CONVERSATION_HISTORY_PLACEHOLDER;
            let label = if is_history { "history" } else { span.kind.as_str() };
            format!(
                "{}\t{}..{}\t{}",
                label, span.range.start, span.range.end, span.argument
            )
        })
        .collect()
}
