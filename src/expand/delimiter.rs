//! Per-file delimiter templates for directory inclusion.
//!
//! A delimiter is emitted on its own line before each file included by a
//! `<$dir:...$>` directive.
//!
//! # Syntax
//!
//! - `{filename}` - Substitutes the included file's base name
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Templates are parsed once, up front. Any placeholder other than
//! `{filename}` is rejected at parse time, so rendering cannot fail.

use std::fmt;

/// Name of the only placeholder a delimiter may use.
const FILENAME_PLACEHOLDER: &str = "filename";

/// Error type for delimiter template parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder other than `{filename}` was used.
    UnknownPlaceholder {
        /// The placeholder name as written (trimmed).
        name: String,
        /// Byte position of the opening `{`.
        position: usize,
    },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace {
        /// Byte position of the unmatched `{`.
        position: usize,
    },
    /// An empty placeholder was found (e.g., `{}`).
    EmptyPlaceholder {
        /// Byte position of the empty placeholder.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnknownPlaceholder { name, position } => {
                write!(
                    f,
                    "unknown placeholder '{{{}}}' at position {} in file delimiter (only {{filename}} is supported)",
                    name, position
                )
            }
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched '{{' at position {} in file delimiter", position)
            }
            TemplateError::EmptyPlaceholder { position } => {
                write!(
                    f,
                    "empty placeholder '{{}}' at position {} in file delimiter",
                    position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Filename,
}

/// A parsed delimiter template such as `--- {filename} ---`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDelimiter {
    source: String,
    segments: Vec<Segment>,
}

impl FileDelimiter {
    /// Parse a delimiter template.
    ///
    /// # Examples
    ///
    /// ```
    /// use prompt_include::expand::FileDelimiter;
    ///
    /// let delimiter = FileDelimiter::parse("--- {filename} ---").unwrap();
    /// assert_eq!(delimiter.render("a.txt"), "--- a.txt ---");
    ///
    /// let escaped = FileDelimiter::parse("{{{filename}}}").unwrap();
    /// assert_eq!(escaped.render("b.md"), "{b.md}");
    /// ```
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            match ch {
                '{' => {
                    if let Some((_, '{')) = chars.peek() {
                        chars.next();
                        literal.push('{');
                        continue;
                    }

                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, c)) => name.push(c),
                            None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                        }
                    }

                    if name.is_empty() {
                        return Err(TemplateError::EmptyPlaceholder { position: pos });
                    }

                    let name = name.trim();
                    if name != FILENAME_PLACEHOLDER {
                        return Err(TemplateError::UnknownPlaceholder {
                            name: name.to_string(),
                            position: pos,
                        });
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Filename);
                }
                '}' => {
                    // `}}` collapses to one brace; a lone `}` is kept as-is.
                    if let Some((_, '}')) = chars.peek() {
                        chars.next();
                    }
                    literal.push('}');
                }
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    /// Render the delimiter line for one included file.
    pub fn render(&self, filename: &str) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::Filename => filename,
            })
            .collect()
    }

    /// The template text this delimiter was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}
