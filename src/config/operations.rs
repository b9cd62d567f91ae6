//! Config loading, validation, and conversion into an expander.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{PromptError, Result};
use crate::expand::{Expander, FileDelimiter};
use crate::prompt::PromptLoader;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PromptError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `.prompt-include.yaml` from `dir` if it exists, defaults otherwise.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let candidate = dir.as_ref().join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// `file_delimiter` must be a valid delimiter template. A `max_depth` of
    /// 0 is allowed: datetime directives still resolve, every inclusion is
    /// refused inline.
    pub fn validate(&self) -> Result<()> {
        self.parsed_file_delimiter()?;
        Ok(())
    }

    /// Parse `file_delimiter`, if set.
    pub fn parsed_file_delimiter(&self) -> Result<Option<FileDelimiter>> {
        self.file_delimiter
            .as_deref()
            .map(|template| {
                FileDelimiter::parse(template).map_err(|e| {
                    PromptError::UserError(format!("config validation failed: {}", e))
                })
            })
            .transpose()
    }

    /// Build an expander rooted at `base_dir`, resolved against `cwd`.
    pub fn expander(&self, cwd: &Path) -> Result<Expander> {
        let base_dir = match &self.base_dir {
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        };

        let mut expander = Expander::new(base_dir);
        if let Some(delimiter) = self.parsed_file_delimiter()? {
            expander = expander.with_file_delimiter(delimiter);
        }
        Ok(expander)
    }

    /// Build a prompt loader from this config.
    pub fn loader(&self, cwd: &Path) -> Result<PromptLoader> {
        Ok(PromptLoader::new(self.expander(cwd)?).with_max_depth(self.max_depth))
    }
}
