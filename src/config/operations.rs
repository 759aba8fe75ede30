//! Config loading, validation, and resolution.

use super::model::Config;
use crate::error::{NocommitError, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Config file looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = ".nocommit.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(NocommitError::Config)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            NocommitError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            NocommitError::Config(msg) => {
                NocommitError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| NocommitError::Config(format!("failed to parse YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Find the config that applies to a repository.
    ///
    /// An explicit path (relative to the working directory) must exist.
    /// Without one, `<repo_root>/.nocommit.yaml` is used when present and the
    /// defaults otherwise.
    pub fn resolve(repo_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading explicit config");
            return Self::load(path);
        }

        let default_path = repo_root.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            debug!(path = %default_path.display(), "loading repository config");
            Self::load(default_path)
        } else {
            debug!("no config file, using default patterns");
            Ok(Self::default())
        }
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `patterns` entries must be non-empty
    /// - `exclude` entries must be non-empty
    ///
    /// Regex and glob syntax is checked when the matcher compiles them.
    pub fn validate(&self) -> Result<()> {
        if self.patterns.iter().any(|p| p.is_empty()) {
            return Err(NocommitError::Config(
                "patterns entries must be non-empty".to_string(),
            ));
        }

        if self.exclude.iter().any(|g| g.is_empty()) {
            return Err(NocommitError::Config(
                "exclude entries must be non-empty".to_string(),
            ));
        }

        if self.patterns.is_empty() {
            warn!("no forbidden patterns configured; every commit will be allowed");
        }

        Ok(())
    }
}
