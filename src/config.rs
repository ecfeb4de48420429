use anyhow::{Context, Result};
use lexdoc_core::document::DocumentKind;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub documents: DocumentsConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DocumentsConfig {
    /// File extensions (without the dot) loaded as Java documents.
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            source_extensions: default_source_extensions(),
        }
    }
}

fn default_source_extensions() -> Vec<String> {
    vec!["java".to_string()]
}

impl DocumentsConfig {
    /// Pick the document kind for `path` from its extension.
    pub fn kind_for(&self, path: &Path) -> DocumentKind {
        let is_source = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                self.source_extensions
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false);
        if is_source {
            DocumentKind::Java
        } else {
            DocumentKind::Text
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    20
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "warn".to_string()
}

impl Config {
    /// Defaults used when no config file exists.
    pub fn minimal() -> Self {
        Self::default()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    validate(&config)?;
    Ok(config)
}

/// Load `path` when it exists, otherwise fall back to [`Config::minimal`].
pub fn load_or_minimal(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::minimal())
    }
}

fn validate(config: &Config) -> Result<()> {
    if config.search.limit < 1 {
        anyhow::bail!("search.limit must be >= 1");
    }

    for ext in &config.documents.source_extensions {
        if ext.is_empty() {
            anyhow::bail!("documents.source_extensions must not contain empty entries");
        }
        if ext.starts_with('.') {
            anyhow::bail!(
                "documents.source_extensions entry '{}' must not start with a dot",
                ext
            );
        }
    }

    Ok(())
}
