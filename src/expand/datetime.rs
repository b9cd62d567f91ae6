//! `<$datetime:FORMAT$>` resolution.

use super::error::DirectiveError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write as _};

/// Format used when the directive carries no format string.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the current local time. The clock is read on every call.
pub(crate) fn resolve(format: &str) -> Result<String, DirectiveError> {
    format_timestamp(&Local::now(), format)
}

/// Render `at` with a strftime-style format string.
///
/// An empty format selects [`DEFAULT_DATETIME_FORMAT`]. Any other format is
/// trimmed first, so an all-whitespace format renders as an empty string.
/// Unknown specifiers, and specifiers the timestamp cannot supply, yield
/// [`DirectiveError::InvalidDatetimeFormat`].
pub fn format_timestamp<Tz>(at: &DateTime<Tz>, format: &str) -> Result<String, DirectiveError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let format = match format {
        "" => DEFAULT_DATETIME_FORMAT,
        f => f.trim(),
    };

    let invalid = || DirectiveError::InvalidDatetimeFormat {
        format: format.to_string(),
    };

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    // DelayedFormat reports unrenderable items through fmt::Error rather than
    // a panic, as long as we never go through to_string().
    let mut rendered = String::new();
    write!(rendered, "{}", at.format_with_items(StrftimeItems::new(format)))
        .map_err(|_| invalid())?;
    Ok(rendered)
}
