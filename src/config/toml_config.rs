use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: CatalogSection,
    pub scope: Option<ScopeSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeSection {
    pub tags: Option<Vec<String>>,
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.catalog.endpoint
    }

    fn request_timeout_secs(&self) -> u64 {
        self.catalog.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    fn scope_tags(&self) -> &[String] {
        self.scope
            .as_ref()
            .and_then(|scope| scope.tags.as_deref())
            .unwrap_or(&[])
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("catalog.endpoint", &self.catalog.endpoint)?;
        validate_range(
            "catalog.timeout_seconds",
            self.request_timeout_secs(),
            1,
            300,
        )?;
        for tag in self.scope_tags() {
            validate_non_empty_string("scope.tags", tag)?;
        }
        Ok(())
    }
}
