use fm_core::{CatalogError, FaultEngine, MessageCatalog};
use fm_shared::HandlingOptions;
use std::env;
use std::path::PathBuf;

/// Everything needed to build the error engine at startup
#[derive(Debug, Clone)]
pub struct ErrorConfig {
    /// Disclosure and localization policy
    pub options: HandlingOptions,

    /// Extra catalog merged over the built-in messages
    pub catalog_path: Option<PathBuf>,
}

impl ErrorConfig {
    pub fn new(options: HandlingOptions) -> Self {
        Self {
            options,
            catalog_path: None,
        }
    }

    /// Take the catalog path from `ERROR_CATALOG_PATH`
    pub fn from_env(options: HandlingOptions) -> Self {
        Self {
            options,
            catalog_path: env::var("ERROR_CATALOG_PATH").ok().map(PathBuf::from),
        }
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Build the engine, merging the extra catalog when one is configured
    pub fn build_engine(&self) -> Result<FaultEngine, CatalogError> {
        let Some(path) = &self.catalog_path else {
            return Ok(FaultEngine::new(self.options.clone()));
        };

        let custom = MessageCatalog::from_file(path)?;
        log::info!("Loaded message catalog from {}", path.display());
        let catalog = MessageCatalog::builtin().merged_with(&custom);
        Ok(FaultEngine::with_catalog(self.options.clone(), catalog))
    }
}
