//! `<$PATH$>` resolution.

use super::error::DirectiveError;
use super::orchestrator::Expander;
use std::fs;
use std::io::ErrorKind;
use tracing::debug;

/// Read one file and expand its content with one less level of budget.
///
/// The depth check happens before the file is touched. The content is
/// expanded without the file delimiter, so directories reached through a
/// single-file include are joined bare.
pub(crate) fn resolve(
    expander: &Expander,
    path: &str,
    depth: u32,
    errors: &mut Vec<DirectiveError>,
) -> Result<String, DirectiveError> {
    if depth == 0 {
        return Err(DirectiveError::DepthExceeded);
    }

    let full_path = expander.resolve_path(path);
    let content = fs::read_to_string(&full_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DirectiveError::FileNotFound {
            path: path.to_string(),
        },
        _ => DirectiveError::FileReadFailure {
            path: path.to_string(),
            reason: e.to_string(),
        },
    })?;

    debug!(path = %full_path.display(), depth, "including file");
    Ok(expander
        .without_file_delimiter()
        .expand_into(&content, depth - 1, errors))
}
