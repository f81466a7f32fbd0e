//! Read-only access to the creature catalog compiled in by `build.rs`.

use crate::errors::{CatalogError, CatalogResult};
use schema::{CatalogData, CreatureTemplate};
use std::sync::OnceLock;

static CATALOG_BYTES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/catalog.bin"));

static CATALOG: OnceLock<CatalogResult<CatalogData>> = OnceLock::new();

/// The decoded catalog. Decoding happens once, on first access.
pub fn catalog() -> CatalogResult<&'static CatalogData> {
    CATALOG
        .get_or_init(|| {
            let data = CatalogData::from_postcard(CATALOG_BYTES)
                .map_err(|e| CatalogError::MalformedData(e.to_string()))?;
            log::debug!(
                "Decoded creature catalog: {} templates, {} starters",
                data.templates.len(),
                data.starters.len()
            );
            Ok(data)
        })
        .as_ref()
        .map_err(Clone::clone)
}

pub fn templates() -> CatalogResult<&'static [CreatureTemplate]> {
    let data = catalog()?;
    if data.templates.is_empty() {
        return Err(CatalogError::NoTemplates);
    }
    Ok(&data.templates)
}

pub fn get_template(name: &str) -> CatalogResult<&'static CreatureTemplate> {
    catalog()?
        .find(name)
        .ok_or_else(|| CatalogError::TemplateNotFound(name.to_string()))
}

/// Templates the player's first creature may be drawn from, in catalog order.
pub fn starter_templates() -> CatalogResult<Vec<&'static CreatureTemplate>> {
    let data = catalog()?;
    let starters = data
        .starters
        .iter()
        .map(|name| get_template(name))
        .collect::<CatalogResult<Vec<_>>>()?;

    if starters.is_empty() {
        return Err(CatalogError::NoStarters);
    }
    Ok(starters)
}
