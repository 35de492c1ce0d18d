//! Catalog loading
//!
//! Catalogs are TOML documents. A default catalog is compiled into the crate
//! so the application works without any file on disk.

use crate::catalog::Catalog;
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// The catalog shipped with the crate
pub const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.toml");

/// Parse a catalog from TOML text
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    let catalog: Catalog = toml::from_str(content).context("Invalid catalog document")?;
    Ok(catalog)
}

/// Load the bundled catalog
pub fn bundled_catalog() -> Result<Catalog> {
    let catalog = parse_catalog(BUNDLED_CATALOG).context("Bundled catalog is invalid")?;
    info!(
        "event=catalog_load module=storage status=ok source=bundled regions={} crops={}",
        catalog.regions().len(),
        catalog.crop_count()
    );
    Ok(catalog)
}

/// File-backed catalog source
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Read and validate the catalog file
    ///
    /// A missing file is an error.
    pub fn load(&self) -> Result<Catalog> {
        let content = fs::read_to_string(&self.file_path).with_context(|| {
            format!("Failed to read catalog '{}'", self.file_path.display())
        })?;
        let catalog = parse_catalog(&content)
            .with_context(|| format!("Failed to load catalog '{}'", self.file_path.display()))?;

        info!(
            "event=catalog_load module=storage status=ok source={} regions={} crops={}",
            self.file_path.display(),
            catalog.regions().len(),
            catalog.crop_count()
        );
        Ok(catalog)
    }

    /// Write a catalog back out as TOML
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        let content = toml::to_string_pretty(catalog)?;
        fs::write(&self.file_path, content).with_context(|| {
            format!("Failed to write catalog '{}'", self.file_path.display())
        })?;
        Ok(())
    }
}
