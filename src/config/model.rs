//! Config struct definition and default implementation.

use crate::prompt::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".prompt-include.yaml";

/// Expansion settings.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Depth budget each message starts with (default: 5).
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    /// Header emitted before each file of a directory inclusion.
    /// `{filename}` is replaced by the file's base name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_delimiter: Option<String>,

    /// Directory that directive paths resolve against.
    /// Relative values are taken relative to the working directory;
    /// unset means the working directory itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            file_delimiter: None,
            base_dir: None,
        }
    }
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}
