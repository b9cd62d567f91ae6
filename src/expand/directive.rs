//! Directive matching.
//!
//! Locates directive spans in a text blob. Matching is a pure scan: the
//! expander collects the spans for one kind, resolves them, and rebuilds the
//! text around them. Nothing here performs I/O.
//!
//! # Syntax
//!
//! - `<$datetime:FORMAT$>` - current time, `FORMAT` optional
//! - `<$dir:PATTERN$>` - every file matching a glob pattern
//! - `<$PATH$>` - a single file (catch-all for any other `<$...$>` marker)
//!
//! A marker never spans a line break. The generic file form also matches the
//! other two forms, which is why [`DirectiveKind::ORDER`] puts it last.

use regex::Regex;
use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

static DATETIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<\$datetime:(.*?)\$>").expect("Invalid datetime directive regex")
});

static DIRECTORY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\$dir:(.*?)\$>").expect("Invalid dir directive regex"));

static FILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\$(.*?)\$>").expect("Invalid file directive regex"));

/// The three directive forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `<$datetime:FORMAT$>`
    Datetime,
    /// `<$dir:PATTERN$>`
    Directory,
    /// `<$PATH$>`
    File,
}

impl DirectiveKind {
    /// Resolution order used by the expander. Each kind is fully resolved
    /// before the next one is matched against the rewritten text.
    pub const ORDER: [DirectiveKind; 3] = [
        DirectiveKind::Datetime,
        DirectiveKind::Directory,
        DirectiveKind::File,
    ];

    /// Short name, matching the marker prefix where there is one.
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveKind::Datetime => "datetime",
            DirectiveKind::Directory => "dir",
            DirectiveKind::File => "file",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            DirectiveKind::Datetime => &DATETIME_PATTERN,
            DirectiveKind::Directory => &DIRECTORY_PATTERN,
            DirectiveKind::File => &FILE_PATTERN,
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One matched directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveSpan {
    /// Which directive form matched.
    pub kind: DirectiveKind,
    /// Byte range of the whole marker, `<$` through `$>`.
    pub range: Range<usize>,
    /// The captured argument with surrounding whitespace trimmed.
    pub argument: String,
    /// The captured argument exactly as written.
    pub raw_argument: String,
}

/// Find every directive of one kind, left to right, without overlaps.
pub fn find_directives(text: &str, kind: DirectiveKind) -> Vec<DirectiveSpan> {
    find_directives_outside(text, kind, &[])
}

/// Like [`find_directives`], but skips any marker whose opening `<$` or
/// closing `$>` lies inside one of the `inert` byte ranges.
///
/// After a skipped candidate the search resumes one byte past its `<`, so a
/// live marker that starts inside the rejected candidate is still found.
pub(crate) fn find_directives_outside(
    text: &str,
    kind: DirectiveKind,
    inert: &[Range<usize>],
) -> Vec<DirectiveSpan> {
    let mut spans = Vec::new();
    let mut start = 0;

    while let Some(caps) = kind.pattern().captures_at(text, start) {
        let Some(whole) = caps.get(0) else { break };
        let range = whole.range();
        let opening = range.start..range.start + 2;
        let closing = range.end - 2..range.end;

        if inert
            .iter()
            .any(|r| overlaps(r, &opening) || overlaps(r, &closing))
        {
            // `<` is a single byte, so this is a char boundary.
            start = range.start + 1;
            continue;
        }

        let raw_argument = caps.get(1).map_or("", |m| m.as_str());
        spans.push(DirectiveSpan {
            kind,
            argument: raw_argument.trim().to_string(),
            raw_argument: raw_argument.to_string(),
            range: range.clone(),
        });
        start = range.end;
    }

    spans
}

/// Find the directives of every kind present in `text`, ordered by position.
///
/// Generic file markers that overlap a datetime or directory marker are not
/// reported, since the earlier kinds claim those spans first.
pub fn scan(text: &str) -> Vec<DirectiveSpan> {
    let mut spans = find_directives(text, DirectiveKind::Datetime);
    spans.extend(find_directives(text, DirectiveKind::Directory));

    let claimed: Vec<Range<usize>> = spans.iter().map(|s| s.range.clone()).collect();
    spans.extend(
        find_directives(text, DirectiveKind::File)
            .into_iter()
            .filter(|span| !claimed.iter().any(|r| overlaps(r, &span.range))),
    );

    spans.sort_by_key(|s| s.range.start);
    spans
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}
