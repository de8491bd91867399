//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/course-planner/course-planner.toml`
//! 3. Environment variables: `COURSE_PLANNER_*` prefix
//! 4. Positional FILE argument (applied by the CLI, see [`Settings::with_file`])

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, DEFAULT_DELIMITER};

/// File loaded when no FILE argument is given.
pub const DEFAULT_COURSE_FILE: &str = "courses2.txt";

/// Unified configuration for course-planner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Course file loaded by menu entry 1 (default: courses2.txt)
    pub default_file: PathBuf,
    /// Field delimiter of the course file (default: ',')
    pub delimiter: char,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from(DEFAULT_COURSE_FILE),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub default_file: Option<PathBuf>,
    pub delimiter: Option<char>,
}

/// Get the XDG config directory for course-planner.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "course-planner").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("course-planner.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Load settings with layered precedence, reading the global config file.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `config_path` in place of the global config file.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Config file
        if let Some(path) = config_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();
        Ok(current)
    }

    /// Override the course file, e.g. from the command line.
    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        if let Some(file) = file {
            self.default_file = file;
        }
        self
    }

    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            default_file: overlay
                .default_file
                .clone()
                .unwrap_or_else(|| self.default_file.clone()),
            delimiter: overlay.delimiter.unwrap_or(self.delimiter),
        }
    }

    /// Expand `~` and `$VAR` in the course file path.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.default_file.to_string_lossy().as_ref());
        self.default_file = PathBuf::from(expanded);
    }

    /// Apply COURSE_PLANNER_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("COURSE_PLANNER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("default_file") {
            settings.default_file = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("delimiter") {
            settings.delimiter = parse_delimiter(&val)?;
        }

        Ok(settings)
    }
}

fn parse_delimiter(value: &str) -> Result<char, ApplicationError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ApplicationError::Config {
            message: format!("delimiter must be a single character, got {:?}", value),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_sources_when_defaulting_then_uses_course_file_and_comma() {
        let settings = Settings::default();
        assert_eq!(settings.default_file, PathBuf::from("courses2.txt"));
        assert_eq!(settings.delimiter, ',');
    }

    #[test]
    fn given_cli_file_when_applying_then_overrides_default() {
        let settings = Settings::default().with_file(Some(PathBuf::from("abcu.csv")));
        assert_eq!(settings.default_file, PathBuf::from("abcu.csv"));

        let settings = Settings::default().with_file(None);
        assert_eq!(settings.default_file, PathBuf::from("courses2.txt"));
    }

    #[test]
    fn given_multi_char_delimiter_when_parsing_then_config_error() {
        assert_eq!(parse_delimiter(";").unwrap(), ';');
        assert!(matches!(
            parse_delimiter(";;"),
            Err(ApplicationError::Config { .. })
        ));
        assert!(parse_delimiter("").is_err());
    }
}
