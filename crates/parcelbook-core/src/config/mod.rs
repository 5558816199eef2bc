//! Catalog configuration
//!
//! Read from `parcelbook.toml` (explicit path or current directory), then
//! overridden by `PARCELBOOK_*` environment variables. Command-line flags
//! are applied last by the binary.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::usage::UsageCatalog;

pub use types::{
    AiConfig, CatalogConfig, MapConfig, NotesConfig, PhotoLink, UsageConfig, AI_TIMEOUT_RANGE,
    DEFAULT_AI_TIMEOUT_SECONDS, DEFAULT_MAP_SEARCH_URL,
};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "parcelbook.toml";

pub const ENV_DATASET: &str = "PARCELBOOK_DATASET";
pub const ENV_NOTES_URL: &str = "PARCELBOOK_NOTES_URL";
pub const ENV_NOTES_FILE: &str = "PARCELBOOK_NOTES_FILE";
pub const ENV_AI_URL: &str = "PARCELBOOK_AI_URL";
pub const ENV_AI_TIMEOUT: &str = "PARCELBOOK_AI_TIMEOUT";

impl CatalogConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CatalogError::io_operation("read config", path.display(), e))?;
        let mut config: CatalogConfig = toml::from_str(&content)?;
        config.base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf);
        config.normalize();
        debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Explicit path if given, else `parcelbook.toml` in `cwd`, else defaults
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = cwd.join(CONFIG_FILE);
        if candidate.is_file() {
            return Self::load(&candidate);
        }
        Ok(Self::default())
    }

    /// Apply `PARCELBOOK_*` overrides from the process environment.
    ///
    /// Relative paths in the environment are taken against `cwd`, the same
    /// as command-line flags, not against the config file's directory.
    pub fn apply_env(&mut self, cwd: &Path) {
        self.apply_env_with(|key| std::env::var(key).ok(), cwd);
    }

    /// Apply overrides from an arbitrary lookup; blank values are ignored
    pub fn apply_env_with<F>(&mut self, lookup: F, cwd: &Path)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dataset) = get(ENV_DATASET) {
            self.dataset = cwd.join(dataset);
        }
        if let Some(url) = get(ENV_NOTES_URL) {
            self.notes.url = Some(url);
        }
        if let Some(file) = get(ENV_NOTES_FILE) {
            self.notes.file = cwd.join(file);
        }
        if let Some(url) = get(ENV_AI_URL) {
            self.ai.url = Some(url);
        }
        if let Some(timeout) = get(ENV_AI_TIMEOUT) {
            match timeout.trim().parse::<u64>() {
                Ok(seconds) => self.ai.timeout_seconds = seconds,
                Err(_) => warn!(value = %timeout, "ignoring invalid {}", ENV_AI_TIMEOUT),
            }
        }
        self.normalize();
    }

    fn normalize(&mut self) {
        let (min, max) = AI_TIMEOUT_RANGE;
        self.ai.timeout_seconds = self.ai.timeout_seconds.clamp(min, max);
        self.page_size = self.page_size.max(1);
        self.notes.url = self.notes.url.take().filter(|u| !u.trim().is_empty());
        self.ai.url = self.ai.url.take().filter(|u| !u.trim().is_empty());
    }

    /// Resolve a configured path against the config file's directory
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.resolve_path(&self.dataset)
    }

    pub fn notes_file_path(&self) -> PathBuf {
        self.resolve_path(&self.notes.file)
    }

    pub fn ai_timeout(&self) -> Duration {
        Duration::from_secs(self.ai.timeout_seconds)
    }

    /// Configured usage catalog, or the built-in one
    pub fn usage_catalog(&self) -> Result<UsageCatalog> {
        match &self.usage.catalog {
            Some(path) => UsageCatalog::load(&self.resolve_path(path)),
            None => Ok(UsageCatalog::builtin()),
        }
    }
}
