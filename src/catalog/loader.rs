use super::Catalog;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// On-disk catalog encoding, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(CatalogFormat::Yaml),
            Some("json") => Ok(CatalogFormat::Json),
            _ => anyhow::bail!(
                "Unsupported catalog file {}: expected a .yaml, .yml or .json extension",
                path.display()
            ),
        }
    }
}

/// Parse catalog text in the given format
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Catalog> {
    let catalog = match format {
        CatalogFormat::Yaml => {
            serde_saphyr::from_str(content).context("Invalid YAML destination catalog")?
        }
        CatalogFormat::Json => {
            serde_json::from_str(content).context("Invalid JSON destination catalog")?
        }
    };
    Ok(catalog)
}

/// Load a destination catalog from a YAML or JSON file
///
/// # Errors
///
/// Returns an error if:
/// - The file extension is not recognised
/// - The file does not exist or cannot be read
/// - The content cannot be parsed
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let format = CatalogFormat::from_path(path)?;

    if !path.exists() {
        anyhow::bail!("Catalog file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file at {}", path.display()))?;

    let catalog = parse_catalog(&content, format)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        destinations = catalog.len(),
        "Loaded destination catalog"
    );

    Ok(catalog)
}
