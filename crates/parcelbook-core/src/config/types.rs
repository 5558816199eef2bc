//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::query::DEFAULT_PAGE_SIZE;

/// Default AI request timeout in seconds
pub const DEFAULT_AI_TIMEOUT_SECONDS: u64 = 60;

/// Accepted AI timeout range in seconds
pub const AI_TIMEOUT_RANGE: (u64, u64) = (5, 300);

/// Public cadastral map search template
pub const DEFAULT_MAP_SEARCH_URL: &str = "https://pkk.rosreestr.ru/#/search/{cadastral}";

/// Catalog configuration (`parcelbook.toml`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Dataset CSV path, relative to the config file
    #[serde(default = "default_dataset")]
    pub dataset: PathBuf,

    /// Rows per page in the parcel list
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default)]
    pub notes: NotesConfig,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub usage: UsageConfig,

    /// Photo album links matched by keyword
    #[serde(default = "default_photo_links")]
    pub photo_links: Vec<PhotoLink>,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub(crate) base_dir: Option<PathBuf>,
}

/// Where notes are persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesConfig {
    /// Notes service base URL; takes precedence over `file`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Local JSON notes file
    #[serde(default = "default_notes_file")]
    pub file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Describe endpoint; unset means AI is not configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default = "default_ai_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Search URL with a `{cadastral}` placeholder
    #[serde(default = "default_map_search_url")]
    pub search_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageConfig {
    /// Usage catalog replacing the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

/// Link shown when `keyword` occurs in a record's context, article, or region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoLink {
    pub keyword: String,
    pub label: String,
    pub url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            page_size: default_page_size(),
            notes: NotesConfig::default(),
            ai: AiConfig::default(),
            map: MapConfig::default(),
            usage: UsageConfig::default(),
            photo_links: default_photo_links(),
            base_dir: None,
        }
    }
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            url: None,
            file: default_notes_file(),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_seconds: default_ai_timeout(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            search_url: default_map_search_url(),
        }
    }
}

fn default_dataset() -> PathBuf {
    PathBuf::from("all_regions.csv")
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_notes_file() -> PathBuf {
    PathBuf::from("data").join("notes.json")
}

fn default_ai_timeout() -> u64 {
    DEFAULT_AI_TIMEOUT_SECONDS
}

fn default_map_search_url() -> String {
    DEFAULT_MAP_SEARCH_URL.to_string()
}

fn default_photo_links() -> Vec<PhotoLink> {
    vec![PhotoLink {
        keyword: "аватар".to_string(),
        label: "Фото \"Аватар\"".to_string(),
        url: "https://disk.yandex.ru/d/9rIQf-kuOEHjEA".to_string(),
    }]
}
