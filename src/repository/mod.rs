//! Repository layer: destination rate tables loaded from the data directory

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::{
    config::RatesConfig,
    error::RateTableError,
    models::RateSheet,
    quote::RateTable,
};

/// Main repository struct holding every destination's rate table
#[derive(Clone, Default)]
pub struct Repository {
    destinations: Arc<IndexMap<String, Arc<RateTable>>>,
}

impl Repository {
    /// Create a repository from already validated tables
    pub fn new(tables: impl IntoIterator<Item = (String, RateTable)>) -> Self {
        let mut destinations: IndexMap<String, Arc<RateTable>> = tables
            .into_iter()
            .map(|(name, table)| (name, Arc::new(table)))
            .collect();
        destinations.sort_keys();
        Self {
            destinations: Arc::new(destinations),
        }
    }

    /// Load every `*.json` rate sheet in the configured directory.
    /// Office lock files (`~$...`) and dotfiles are skipped.
    pub async fn load(config: &RatesConfig) -> Result<Self, RateTableError> {
        let dir = Path::new(&config.data_dir);
        let io_error = |source| RateTableError::Io {
            path: dir.display().to_string(),
            source,
        };

        let mut entries = tokio::fs::read_dir(dir).await.map_err(io_error)?;
        let mut tables = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let path = entry.path();
            let Some(name) = destination_name(&path) else {
                continue;
            };

            let table = load_sheet(&path).await?;
            tracing::info!(
                "Loaded rates for {} from {} ({} overlapping ranges)",
                name,
                path.display(),
                table.overlaps().len()
            );
            tables.push((name, table));
        }

        if tables.is_empty() {
            tracing::warn!("No rate sheets found in {}", dir.display());
        }

        Ok(Self::new(tables))
    }

    /// Rate table for a destination
    pub fn destination(&self, name: &str) -> Option<Arc<RateTable>> {
        self.destinations.get(name).cloned()
    }

    /// Destination names in sorted order
    pub fn destination_names(&self) -> Vec<String> {
        self.destinations.keys().cloned().collect()
    }
}

fn destination_name(path: &Path) -> Option<String> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.starts_with("~$") || stem.starts_with('.') {
        return None;
    }
    Some(stem.to_string())
}

async fn load_sheet(path: &Path) -> Result<RateTable, RateTableError> {
    let raw = tokio::fs::read(path).await.map_err(|source| RateTableError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let sheet: RateSheet = serde_json::from_slice(&raw).map_err(|source| RateTableError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    RateTable::from_sheet(sheet)
}
