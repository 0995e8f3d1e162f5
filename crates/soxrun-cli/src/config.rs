//! Configuration loading.
//!
//! Settings are resolved in priority order:
//! 1. Command-line flags (and their environment variables, via clap)
//! 2. TOML config file: `--config`/`SOXRUN_CONFIG`, else the user config dir
//! 3. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use soxrun_recipe::{CommandBuilder, ExecOptions, DEFAULT_TOOL};

/// Default shell used to run command lines.
pub const DEFAULT_SHELL: &str = "sh";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The config file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`Config`].
    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Effective soxrun settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// sox executable name or path.
    pub sox: String,
    /// Shell that runs each command line via `-c`.
    pub shell: String,
    /// Capture sox's standard output instead of inheriting the terminal.
    pub capture_stdout: bool,
    /// Wait for dispatched commands before exiting.
    pub wait: bool,
    /// Print command lines without running them.
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sox: DEFAULT_TOOL.to_string(),
            shell: DEFAULT_SHELL.to_string(),
            capture_stdout: true,
            wait: true,
            dry_run: false,
        }
    }
}

impl Config {
    /// Parses a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Applies command-line overrides on top of this config.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(ref sox) = overrides.sox {
            self.sox = sox.clone();
        }
        if let Some(ref shell) = overrides.shell {
            self.shell = shell.clone();
        }
        if overrides.no_capture {
            self.capture_stdout = false;
        }
        if overrides.no_wait {
            self.wait = false;
        }
        if overrides.dry_run {
            self.dry_run = true;
        }
    }

    /// Creates the command builder described by this config.
    pub fn command_builder(&self) -> CommandBuilder {
        CommandBuilder::new()
            .tool(self.sox.clone())
            .exec_options(ExecOptions {
                capture_stdout: self.capture_stdout,
            })
    }
}

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub sox: Option<String>,
    pub shell: Option<String>,
    pub no_capture: bool,
    pub no_wait: bool,
    pub dry_run: bool,
}

/// A config together with the file it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: Config,
    /// `None` when only defaults were used.
    pub source: Option<PathBuf>,
}

/// Returns `<config_dir>/soxrun/config.toml` for the current user.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("soxrun").join("config.toml"))
}

/// Loads the config file.
///
/// An `explicit` path must exist. Without one, the default location is used
/// if present, otherwise defaults.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            path.to_path_buf()
        }
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => path,
            None => {
                debug!("no config file found, using defaults");
                return Ok(LoadedConfig {
                    config: Config::default(),
                    source: None,
                });
            }
        },
    };

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config = Config::from_toml(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "loaded config");

    Ok(LoadedConfig {
        config,
        source: Some(path),
    })
}

/// Loads the config file and applies `overrides`.
pub fn resolve(explicit: Option<&Path>, overrides: &Overrides) -> Result<LoadedConfig, ConfigError> {
    let mut loaded = load(explicit)?;
    loaded.config.apply(overrides);
    Ok(loaded)
}
