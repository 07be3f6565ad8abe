pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::toml_config::TomlConfig;

pub use crate::adapters::{fixture::FixtureCatalogSource, http::HttpCatalogSource};
pub use crate::core::store::{CatalogStore, SubscriberId};
pub use crate::core::{popular, resolver, search};
pub use crate::domain::model::{
    Category, ContactInfo, Faq, PopularService, ProcessStage, ResolvedCategory,
    ResolvedSubcategory, Service, Subcategory,
};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::{CatalogError, Result};
