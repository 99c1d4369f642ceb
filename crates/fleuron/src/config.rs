// File: src/config.rs
// Purpose: Configuration parsing from fleuron.toml

use crate::layout::COMPONENT_PREFIX;
use crate::route::RoutePattern;
use crate::selector::DEFAULT_BACKEND_PATTERN;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Default configuration file name
pub const CONFIG_FILE: &str = "fleuron.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FleuronConfig {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Shown as the page title when a page has none
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub version: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Layout selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Route name patterns rendered with the backend shell (default: ["backend.*"])
    #[serde(default = "default_backend_patterns")]
    pub backend_patterns: Vec<String>,

    /// Prefix for component names in dynamic dispatch (default: "layouts.app.")
    #[serde(default = "default_component_prefix")]
    pub component_prefix: String,

    #[serde(default)]
    pub dispatch: Dispatch,
}

/// How the chosen layout is reached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dispatch {
    /// Match on the layout name
    #[default]
    Branch,
    /// Look the layout up by computed component name
    Dynamic,
}

// Default values
fn default_name() -> String {
    "fleuron-app".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_backend_patterns() -> Vec<String> {
    vec![DEFAULT_BACKEND_PATTERN.to_string()]
}

fn default_component_prefix() -> String {
    COMPONENT_PREFIX.to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: String::new(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            backend_patterns: default_backend_patterns(),
            component_prefix: default_component_prefix(),
            dispatch: Dispatch::default(),
        }
    }
}

impl FleuronConfig {
    /// Load from `fleuron.toml` in the current directory.
    /// Falls back to defaults if the file is missing or invalid.
    pub fn load() -> Self {
        Self::load_or_default(CONFIG_FILE)
    }

    /// Load from `path`, falling back to defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        Self::load_from(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            Self::default()
        })
    }

    /// Load from a specific path
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse from TOML text; backend patterns are checked as well
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every backend pattern compiles
    pub fn validate(&self) -> Result<()> {
        RoutePattern::compile_all(&self.layout.backend_patterns)
            .context("Invalid [layout] backend_patterns")?;
        Ok(())
    }

    /// `host:port` for binding the server
    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
