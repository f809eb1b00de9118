// crates/chickenhead-core/src/config.rs - rc file configuration
//
// Configuration comes from an optional TOML file in the user's home directory:
//
// ```toml
// # ~/.chickenheadrc
// SnippetDirectory = "~/Dropbox/snippets"
// Editor = "vim"
// ```
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Environment variables (CHICKENHEAD_SNIPPET_DIR, CHICKENHEAD_EDITOR)
// 2. ~/.chickenheadrc
// 3. Built-in defaults (~/.chickenhead, OS default application)
//
// The file is read once at startup and never written back. Unknown keys are
// ignored so the same rc file can carry settings for other versions.

use directories::BaseDirs;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the rc file inside the home directory
pub const RC_FILE: &str = ".chickenheadrc";

/// Snippet root used when the rc file doesn't set one
pub const DEFAULT_SNIPPET_DIR: &str = ".chickenhead";

/// Overrides `SnippetDirectory` from the rc file
pub const SNIPPET_DIR_ENV: &str = "CHICKENHEAD_SNIPPET_DIR";

/// Overrides `Editor` from the rc file
pub const EDITOR_ENV: &str = "CHICKENHEAD_EDITOR";

/// Errors that can occur during configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine the home directory")]
    HomeNotFound,

    #[error("invalid TOML syntax in {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("I/O error reading config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings for one chickenhead invocation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Root directory for all snippets, exactly as configured
    ///
    /// May start with `~`; use [`Config::snippet_root`] for the usable path.
    #[serde(rename = "SnippetDirectory", default)]
    pub snippet_directory: PathBuf,

    /// Editor command; empty means "let the OS pick the application"
    #[serde(rename = "Editor", default)]
    pub editor: String,
}

impl Config {
    /// The configured editor, if any
    pub fn editor(&self) -> Option<&str> {
        let editor = self.editor.trim();
        (!editor.is_empty()).then_some(editor)
    }

    /// Snippet directory with a leading `~` expanded against `home`
    pub fn snippet_root(&self, home: &Path) -> PathBuf {
        expand_home(&self.snippet_directory, home)
    }

    /// Fill in defaults for anything the rc file left empty
    fn with_defaults(mut self, home: &Path) -> Self {
        if self.snippet_directory.as_os_str().is_empty() {
            self.snippet_directory = home.join(DEFAULT_SNIPPET_DIR);
        }
        self
    }
}

/// Loads [`Config`] from the rc file and the environment
pub struct ConfigManager;

impl ConfigManager {
    /// Home directory of the current user
    pub fn home_dir() -> ConfigResult<PathBuf> {
        BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or(ConfigError::HomeNotFound)
    }

    /// Location of the rc file for a given home directory
    pub fn rc_path(home: &Path) -> PathBuf {
        home.join(RC_FILE)
    }

    /// Load `<home>/.chickenheadrc`, falling back to defaults when it's absent
    ///
    /// ERROR HANDLING:
    /// - A missing rc file is not an error
    /// - Invalid TOML or wrongly typed values are
    pub fn load(home: &Path) -> ConfigResult<Config> {
        let rc_path = Self::rc_path(home);

        let config = if rc_path.exists() {
            let content = fs::read_to_string(&rc_path)?;
            Self::parse(&content, &rc_path)?
        } else {
            Config {
                snippet_directory: PathBuf::new(),
                editor: String::new(),
            }
        };

        Ok(config.with_defaults(home))
    }

    /// Like [`ConfigManager::load`], then apply environment variable overrides
    pub fn load_with_env(home: &Path) -> ConfigResult<Config> {
        let mut config = Self::load(home)?;
        Self::apply_overrides(
            &mut config,
            env::var(SNIPPET_DIR_ENV).ok(),
            env::var(EDITOR_ENV).ok(),
        );
        Ok(config)
    }

    /// Parse rc file content; `origin` is only used in error messages
    pub fn parse(content: &str, origin: &Path) -> ConfigResult<Config> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            file: origin.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Replace config values with non-empty overrides
    fn apply_overrides(config: &mut Config, snippet_dir: Option<String>, editor: Option<String>) {
        if let Some(dir) = snippet_dir.filter(|d| !d.is_empty()) {
            config.snippet_directory = PathBuf::from(dir);
        }

        if let Some(editor) = editor.filter(|e| !e.is_empty()) {
            config.editor = editor;
        }
    }
}

/// Expand `~` and `~/...` against `home`; other paths come back unchanged
fn expand_home(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
