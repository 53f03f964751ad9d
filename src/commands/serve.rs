use anyhow::Result;
use std::path::Path;

use llm_pricing::catalog::CatalogStore;
use llm_pricing::{config, server};

/// Execute the serve command
///
/// Loads configuration and the catalog, then runs the API server until
/// shutdown. A `--catalog` flag beats the configured path.
pub async fn execute(config_path: &Path, catalog_override: Option<&Path>) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    let catalog_path = match catalog_override {
        Some(path) => Some(path.to_path_buf()),
        None => cfg.catalog.path.as_ref().map(std::path::PathBuf::from),
    };

    let store = CatalogStore::load(catalog_path.as_deref())?;

    server::start_server(cfg, store).await
}
