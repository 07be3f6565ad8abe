pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_range, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "claimsutra-catalog")]
#[command(about = "Catalog resolution and search for the Claimsutra site")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:3000/api/catalog")]
    pub api_endpoint: String,

    #[arg(long, default_value = "5")]
    pub request_timeout_secs: u64,

    /// Restrict the resolved tree to categories carrying any of these tags
    #[arg(long, value_delimiter = ',')]
    pub scope_tags: Vec<String>,

    /// Read the catalog from a JSON fixture file instead of the API
    #[arg(long)]
    pub fixture: Option<String>,

    /// Load endpoint, timeout, and scope from a TOML file (wins over flags)
    #[arg(long)]
    pub config: Option<String>,

    /// Print services matching this query instead of the resolved tree
    #[arg(long)]
    pub search: Option<String>,

    /// Print the popular-services shortlist instead of the resolved tree
    #[arg(long)]
    pub popular: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    fn scope_tags(&self) -> &[String] {
        &self.scope_tags
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_range("request_timeout_secs", self.request_timeout_secs, 1, 300)?;
        Ok(())
    }
}
