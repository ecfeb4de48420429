//! Load raw text files into a [`DocumentService`].
//!
//! Each file becomes one document whose id is the path as given and whose
//! kind comes from [`DocumentsConfig::kind_for`].

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::DocumentsConfig;
use crate::service::DocumentService;

/// Read `path` and add it to `service`. Returns the document id.
pub fn load_file(
    service: &mut DocumentService,
    config: &DocumentsConfig,
    path: &Path,
) -> Result<String> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;
    let id = path.display().to_string();
    let kind = config.kind_for(path);

    service
        .add_document(&id, &raw, kind)
        .with_context(|| format!("Failed to add document: {}", id))?;

    tracing::info!(id = %id, kind = %kind, bytes = raw.len(), "loaded document");
    Ok(id)
}

/// Load every path in order, stopping at the first failure.
pub fn load_files(
    service: &mut DocumentService,
    config: &DocumentsConfig,
    paths: &[PathBuf],
) -> Result<Vec<String>> {
    paths
        .iter()
        .map(|p| load_file(service, config, p))
        .collect()
}
