//! The expansion driver.
//!
//! Each stage of [`DirectiveKind::ORDER`] runs over the text the previous
//! stage produced, so `<$notes-<$datetime:%Y$>.md$>` includes this year's
//! notes file. The byte ranges of resolver output are tracked alongside the
//! text: a later stage never accepts a marker whose `<$` or `$>` lies in
//! one of them. Delimiters that come from a datetime format or from included
//! content therefore stay literal.

use super::delimiter::FileDelimiter;
use super::directive::{DirectiveKind, DirectiveSpan, find_directives_outside};
use super::error::DirectiveError;
use super::{datetime, directory, file};
use crate::error::{PromptError, Result};
use std::borrow::Cow;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of expanding one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// The fully substituted text.
    pub text: String,
    /// Every inline error rendered into `text`, nested includes included,
    /// in resolution order.
    pub errors: Vec<DirectiveError>,
}

impl Expansion {
    /// True when no directive failed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Resolves directives against a base directory.
///
/// Relative file paths and glob patterns are joined onto `base_dir`; absolute
/// ones are used as given. There is no sandboxing: `../` escapes the base
/// directory.
#[derive(Debug, Clone)]
pub struct Expander {
    base_dir: PathBuf,
    file_delimiter: Option<FileDelimiter>,
}

impl Expander {
    /// Create an expander rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            file_delimiter: None,
        }
    }

    /// Create an expander rooted at the process working directory.
    ///
    /// # Returns
    ///
    /// * `Err(PromptError::IoError)` - If the working directory cannot be read
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            PromptError::IoError(format!("failed to get current working directory: {}", e))
        })?;
        Ok(Self::new(cwd))
    }

    /// Emit `delimiter` before every file included by a directory directive.
    pub fn with_file_delimiter(mut self, delimiter: FileDelimiter) -> Self {
        self.file_delimiter = Some(delimiter);
        self
    }

    /// This expander with the file delimiter removed.
    pub(crate) fn without_file_delimiter(&self) -> Cow<'_, Self> {
        match self.file_delimiter {
            None => Cow::Borrowed(self),
            Some(_) => Cow::Owned(Self::new(self.base_dir.clone())),
        }
    }

    /// Directory that relative directive paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The configured per-file delimiter, if any.
    pub fn file_delimiter(&self) -> Option<&FileDelimiter> {
        self.file_delimiter.as_ref()
    }

    /// Expand every directive in `text`.
    ///
    /// `depth` is the inclusion budget: each file or directory inclusion
    /// spends one level, and an inclusion attempted with no budget left
    /// renders `[ERROR: Maximum inclusion depth reached]`. Datetime
    /// directives never spend budget.
    ///
    /// # Examples
    ///
    /// ```
    /// use prompt_include::expand::Expander;
    ///
    /// let expander = Expander::new(std::env::temp_dir());
    /// let result = expander.expand("<$definitely-missing-file.txt$> stays inline", 5);
    /// assert_eq!(
    ///     result.text,
    ///     "[ERROR: File definitely-missing-file.txt not found] stays inline"
    /// );
    /// assert_eq!(result.errors.len(), 1);
    /// ```
    pub fn expand(&self, text: &str, depth: u32) -> Expansion {
        let mut errors = Vec::new();
        let text = self.expand_into(text, depth, &mut errors);
        Expansion { text, errors }
    }

    /// Expand `text`, appending inline failures to `errors`.
    ///
    /// This is the re-entry point the file and directory resolvers use for
    /// included content.
    pub(crate) fn expand_into(
        &self,
        text: &str,
        depth: u32,
        errors: &mut Vec<DirectiveError>,
    ) -> String {
        let mut text = text.to_string();
        let mut resolved = Vec::new();

        for kind in DirectiveKind::ORDER {
            (text, resolved) = self.resolve_stage(&text, &resolved, kind, depth, errors);
        }

        text
    }

    /// Resolve every live `kind` directive in `text`.
    ///
    /// `resolved` holds the byte ranges of earlier resolver output. Returns
    /// the rewritten text and the ranges of all resolver output in it.
    fn resolve_stage(
        &self,
        text: &str,
        resolved: &[Range<usize>],
        kind: DirectiveKind,
        depth: u32,
        errors: &mut Vec<DirectiveError>,
    ) -> (String, Vec<Range<usize>>) {
        let spans = find_directives_outside(text, kind, resolved);
        if spans.is_empty() {
            return (text.to_string(), resolved.to_vec());
        }

        let mut out = String::with_capacity(text.len());
        let mut out_resolved = Vec::with_capacity(resolved.len() + spans.len());
        let mut cursor = 0;

        for span in &spans {
            copy_segment(text, resolved, cursor..span.range.start, &mut out, &mut out_resolved);

            let output = self.resolve_span(span, depth, errors);
            if !output.is_empty() {
                out_resolved.push(out.len()..out.len() + output.len());
            }
            out.push_str(&output);
            cursor = span.range.end;
        }
        copy_segment(text, resolved, cursor..text.len(), &mut out, &mut out_resolved);

        (out, out_resolved)
    }

    fn resolve_span(
        &self,
        span: &DirectiveSpan,
        depth: u32,
        errors: &mut Vec<DirectiveError>,
    ) -> String {
        let resolved = match span.kind {
            DirectiveKind::Datetime => datetime::resolve(&span.raw_argument),
            DirectiveKind::Directory => directory::resolve(self, &span.argument, depth, errors),
            DirectiveKind::File => file::resolve(self, &span.argument, depth, errors),
        };

        match resolved {
            Ok(output) => {
                debug!(kind = %span.kind, argument = %span.argument, depth, "resolved directive");
                output
            }
            Err(err) => {
                warn!(kind = %span.kind, argument = %span.argument, depth, "{}", err);
                let marker = err.to_string();
                errors.push(err);
                marker
            }
        }
    }

    /// Join a directive path onto the base directory.
    pub(crate) fn resolve_path(&self, path: &str) -> PathBuf {
        self.base_dir.join(path)
    }
}

/// Append `text[segment]` to `out`, carrying over the resolved ranges that
/// lie inside it.
///
/// Resolved ranges never straddle a live marker's delimiters, so each one is
/// either wholly inside a copied segment or wholly inside a replaced span.
fn copy_segment(
    text: &str,
    resolved: &[Range<usize>],
    segment: Range<usize>,
    out: &mut String,
    out_resolved: &mut Vec<Range<usize>>,
) {
    let offset = out.len();
    out_resolved.extend(
        resolved
            .iter()
            .filter(|r| r.start >= segment.start && r.end <= segment.end)
            .map(|r| r.start - segment.start + offset..r.end - segment.start + offset),
    );
    out.push_str(&text[segment]);
}
