//! Reading catalog items that were rendered into the page.
//!
//! The host serializes the product cards (name, description, category,
//! optional thumbnail) into a JSON array once at load time; the catalog
//! never reads presentation attributes after that.

use std::path::Path;

use showcase_model::CatalogItem;

use crate::error::CatalogLoadError;

pub fn parse_items(raw: &str, origin: &str) -> Result<Vec<CatalogItem>, CatalogLoadError> {
    let items: Vec<CatalogItem> =
        serde_json::from_str(raw).map_err(|source| CatalogLoadError::Parse {
            origin: origin.to_string(),
            source,
        })?;
    if let Some((index, item)) = items
        .iter()
        .enumerate()
        .find(|(_, item)| item.category.trim().is_empty())
    {
        return Err(CatalogLoadError::EmptyCategory {
            index,
            name: item.name.clone(),
        });
    }
    Ok(items)
}

pub fn load_items(path: &Path) -> Result<Vec<CatalogItem>, CatalogLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_items(&raw, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), count = items.len(), "loaded catalog items");
    Ok(items)
}
