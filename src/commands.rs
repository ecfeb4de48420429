//! CLI command implementations.
//!
//! Every command starts from an empty [`DocumentService`], loads the files
//! named on the command line, runs one operation, and prints to stdout.

use anyhow::{Context, Result};
use lexdoc_core::document::keys;
use lexdoc_core::predicate::Predicate;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::loader::{load_file, load_files};
use crate::service::DocumentService;

/// Parse a `KEY=VALUE` pair for `--where` arguments.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no '=' found in '{}'", s))?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key or value in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

pub fn run_similarity(config: &Config, a: &Path, b: &Path) -> Result<()> {
    let mut service = DocumentService::new();
    let id_a = load_file(&mut service, &config.documents, a)?;
    let id_b = load_file(&mut service, &config.documents, b)?;

    let score = service
        .similarity(&id_a, &id_b)
        .with_context(|| format!("Failed to compare {} and {}", id_a, id_b))?;
    println!("{:.4}", score);
    Ok(())
}

pub fn run_search(
    config: &Config,
    files: &[PathBuf],
    pairs: &[(String, String)],
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let predicate: Predicate = pairs.iter().cloned().collect();

    let mut service = DocumentService::new();
    load_files(&mut service, &config.documents, files)?;

    let mut outcome = service.search(predicate)?;
    outcome.hits.truncate(limit.unwrap_or(config.search.limit));

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if outcome.hits.is_empty() {
        println!("No results.");
    } else {
        for hit in &outcome.hits {
            println!("{}\t{}\t{}", hit.score, hit.kind, hit.id);
        }
    }
    println!();
    println!("--- Query ---");
    for [key, value] in &outcome.description {
        println!("{} = {}", key, value);
    }
    Ok(())
}

pub fn run_term(config: &Config, term: &str, files: &[PathBuf]) -> Result<()> {
    let mut service = DocumentService::new();
    load_files(&mut service, &config.documents, files)?;

    let ids = service.search_term(term);
    if ids.is_empty() {
        println!("No results.");
    }
    for id in ids {
        println!("{}", id);
    }
    Ok(())
}

pub fn run_inspect(config: &Config, file: &Path, json: bool) -> Result<()> {
    let mut service = DocumentService::new();
    let id = load_file(&mut service, &config.documents, file)?;
    let view = service.inspect(&id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("--- Document ---");
    println!("id:           {}", view.id);
    println!("kind:         {}", view.kind);
    println!("terms:        {}", view.term_count);
    println!("useful_ratio: {:.4}", view.useful_text_ratio);
    println!();

    println!("--- Metadata ---");
    for (key, value) in &view.metadata {
        if key == keys::METADATA_DATE {
            println!("{:<13}{} ({})", key, value, format_ms_iso(value));
        } else {
            println!("{:<13}{}", key, value);
        }
    }
    println!();

    println!("--- Normalized ---");
    println!("{}", view.normalized);
    Ok(())
}

fn format_ms_iso(ms: &str) -> String {
    ms.parse::<i64>()
        .ok()
        .and_then(|ms| {
            let nanos = (ms.rem_euclid(1000) * 1_000_000) as u32;
            chrono::DateTime::from_timestamp(ms.div_euclid(1000), nanos)
        })
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| ms.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("TYPE=java").unwrap(),
            ("TYPE".to_string(), "java".to_string())
        );
        assert_eq!(
            parse_key_val(" AUTHOR = TRUE ").unwrap(),
            ("AUTHOR".to_string(), "TRUE".to_string())
        );
        assert!(parse_key_val("TYPE").is_err());
        assert!(parse_key_val("=java").is_err());
        assert!(parse_key_val("TYPE=").is_err());
    }

    #[test]
    fn test_format_ms_iso() {
        assert_eq!(format_ms_iso("0"), "1970-01-01T00:00:00Z");
        assert_eq!(format_ms_iso("1700000000000"), "2023-11-14T22:13:20Z");
        assert_eq!(format_ms_iso("soon"), "soon");
    }
}
