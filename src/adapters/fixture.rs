use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::model::{Category, Service, Subcategory};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct FixtureFile {
    categories: Vec<Category>,
    subcategories: Vec<Subcategory>,
    services: Vec<Service>,
}

/// Catalog source reading a single JSON fixture file, used for local
/// development and for seeding before the admin API has real data. The file
/// is re-read on every fetch; the store's cache sits above this.
#[derive(Debug, Clone)]
pub struct FixtureCatalogSource {
    path: PathBuf,
}

impl FixtureCatalogSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Result<FixtureFile> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[async_trait]
impl CatalogSource for FixtureCatalogSource {
    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        Ok(self.load()?.categories)
    }

    async fn fetch_subcategories(&self) -> Result<Vec<Subcategory>> {
        Ok(self.load()?.subcategories)
    }

    async fn fetch_services(&self) -> Result<Vec<Service>> {
        Ok(self.load()?.services)
    }
}
