//! Loads the class and skill catalog used by every sheet

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::dto::CatalogDto;
use crate::domain::value_objects::Catalog;

/// Read a catalog file, or fall back to the built-in catalog when no path is set
pub async fn load_catalog(path: Option<&Path>) -> Result<Arc<Catalog>> {
    let Some(path) = path else {
        tracing::debug!("Using built-in catalog");
        return Ok(Arc::new(Catalog::default()));
    };

    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    let dto: CatalogDto = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;
    let catalog = Catalog::try_from(dto)
        .with_context(|| format!("Invalid catalog in {}", path.display()))?;

    tracing::info!(
        classes = catalog.classes().len(),
        skills = catalog.skills().len(),
        "Loaded catalog from {}",
        path.display()
    );
    Ok(Arc::new(catalog))
}
