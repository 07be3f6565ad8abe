use crate::domain::model::{Category, Service, Subcategory};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Boundary to the persistence layer. Each fetch returns the full collection;
/// caching happens above this trait, in the store.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_categories(&self) -> Result<Vec<Category>>;
    async fn fetch_subcategories(&self) -> Result<Vec<Subcategory>>;
    async fn fetch_services(&self) -> Result<Vec<Service>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
    fn scope_tags(&self) -> &[String];
}
