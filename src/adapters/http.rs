use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::model::{Category, Service, Subcategory};
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::{CatalogError, Result};

/// Catalog source backed by the site's data-access API:
/// `GET {base}/categories|subcategories|services`, each returning a JSON
/// array. The request timeout is applied at the client so a slow backend
/// degrades into the callers' fallback paths instead of hanging a render.
pub struct HttpCatalogSource {
    client: Client,
    base_url: String,
}

impl HttpCatalogSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &dyn ConfigProvider) -> Result<Self> {
        Self::new(
            config.api_endpoint(),
            Duration::from_secs(config.request_timeout_secs()),
        )
    }

    async fn fetch_collection<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, collection);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::FetchFailed {
                collection: collection.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        self.fetch_collection("categories").await
    }

    async fn fetch_subcategories(&self) -> Result<Vec<Subcategory>> {
        self.fetch_collection("subcategories").await
    }

    async fn fetch_services(&self) -> Result<Vec<Service>> {
        self.fetch_collection("services").await
    }
}
