//! JSON export of a repository catalog.

use log::info;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::catalog::{RepoCatalog, Repository};
use crate::error::Result;

/// Render the catalog as a pretty-printed JSON object keyed by repository id.
pub fn to_json(catalog: &RepoCatalog) -> Result<String> {
    let by_id: BTreeMap<String, &Repository> =
        catalog.iter().map(|r| (r.id.to_string(), r)).collect();
    Ok(serde_json::to_string_pretty(&by_id)?)
}

/// Write the JSON export to `path`.
pub fn export_json(catalog: &RepoCatalog, path: &Path) -> Result<()> {
    let json = to_json(catalog)?;
    fs::write(path, json)?;
    info!(
        "Exported {} repositories to {}",
        catalog.len(),
        path.display()
    );
    Ok(())
}
