use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::RwLock;

use crate::core::{popular, search};
use crate::domain::model::{Category, PopularService, Service, Subcategory};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by `subscribe`; pass it back to `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

#[derive(Default)]
struct CacheState {
    categories: Option<Arc<Vec<Category>>>,
    subcategories: Option<Arc<Vec<Subcategory>>>,
    services: Option<Arc<Vec<Service>>>,
}

/// Single source of truth for the catalog collections. Fetches lazily from
/// the backing source, caches for the process lifetime, and notifies
/// subscribers when a mutation goes through the admin surface.
///
/// Readers get `Arc`-shared snapshots; a fetch failure never poisons the
/// cache, so a later read can still succeed.
pub struct CatalogStore<S: CatalogSource> {
    source: S,
    cache: RwLock<CacheState>,
    subscribers: Mutex<Vec<(SubscriberId, Listener)>>,
    next_subscriber_id: AtomicU64,
}

impl<S: CatalogSource> CatalogStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: RwLock::new(CacheState::default()),
            subscribers: Mutex::new(Vec::new()),
            next_subscriber_id: AtomicU64::new(0),
        }
    }

    /// Cached categories, propagating fetch errors to the caller.
    pub async fn try_categories(&self) -> Result<Arc<Vec<Category>>> {
        if let Some(cached) = self.cache.read().await.categories.clone() {
            return Ok(cached);
        }
        let fetched = Arc::new(self.source.fetch_categories().await?);
        let mut state = self.cache.write().await;
        // a concurrent reader may have filled the slot while we fetched
        Ok(state.categories.get_or_insert_with(|| fetched).clone())
    }

    pub async fn try_subcategories(&self) -> Result<Arc<Vec<Subcategory>>> {
        if let Some(cached) = self.cache.read().await.subcategories.clone() {
            return Ok(cached);
        }
        let fetched = Arc::new(self.source.fetch_subcategories().await?);
        let mut state = self.cache.write().await;
        Ok(state.subcategories.get_or_insert_with(|| fetched).clone())
    }

    pub async fn try_services(&self) -> Result<Arc<Vec<Service>>> {
        if let Some(cached) = self.cache.read().await.services.clone() {
            return Ok(cached);
        }
        let fetched = Arc::new(self.source.fetch_services().await?);
        let mut state = self.cache.write().await;
        Ok(state.services.get_or_insert_with(|| fetched).clone())
    }

    /// Cached categories; on failure logs and returns an empty sequence so
    /// render paths never have to handle an error.
    pub async fn get_all_categories(&self) -> Arc<Vec<Category>> {
        match self.try_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                tracing::warn!("Failed to load categories: {}", e);
                Arc::new(Vec::new())
            }
        }
    }

    pub async fn get_all_subcategories(&self) -> Arc<Vec<Subcategory>> {
        match self.try_subcategories().await {
            Ok(subcategories) => subcategories,
            Err(e) => {
                tracing::warn!("Failed to load subcategories: {}", e);
                Arc::new(Vec::new())
            }
        }
    }

    pub async fn get_all_services(&self) -> Arc<Vec<Service>> {
        match self.try_services().await {
            Ok(services) => services,
            Err(e) => {
                tracing::warn!("Failed to load services: {}", e);
                Arc::new(Vec::new())
            }
        }
    }

    pub async fn get_service_by_id(&self, id: &str) -> Option<Service> {
        self.get_all_services()
            .await
            .iter()
            .find(|service| service.id == id)
            .cloned()
    }

    /// Case-insensitive substring search over the cached service list.
    pub async fn search(&self, query: &str) -> Vec<Service> {
        search::filter_services(&self.get_all_services().await, query)
    }

    /// Landing-page shortlist; a fetch error degrades to the static fallback.
    pub async fn popular(&self) -> Vec<PopularService> {
        match self.try_services().await {
            Ok(services) => popular::shortlist(&services),
            Err(e) => {
                tracing::warn!("Falling back to static popular services: {}", e);
                popular::fallback()
            }
        }
    }

    /// Registers a change listener. Delivery is synchronous and in
    /// registration order.
    pub fn subscribe<F>(&self, listener: F) -> SubscriberId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = SubscriberId(self.next_subscriber_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Removes exactly one registration; calling again with the same id is a
    /// no-op.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(subscriber_id, _)| *subscriber_id != id);
    }

    fn notify_subscribers(&self) {
        // clone out of the lock so a listener may subscribe/unsubscribe
        let listeners: Vec<Listener> = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }

    /// Drops every cached collection and notifies subscribers. The next read
    /// fetches fresh data.
    pub async fn invalidate(&self) {
        {
            let mut state = self.cache.write().await;
            *state = CacheState::default();
        }
        self.notify_subscribers();
    }

    /// Drops caches and refetches all three collections concurrently.
    pub async fn refresh(&self) -> Result<()> {
        {
            let mut state = self.cache.write().await;
            *state = CacheState::default();
        }
        let (categories, subcategories, services) = tokio::try_join!(
            self.source.fetch_categories(),
            self.source.fetch_subcategories(),
            self.source.fetch_services(),
        )?;
        {
            let mut state = self.cache.write().await;
            state.categories = Some(Arc::new(categories));
            state.subcategories = Some(Arc::new(subcategories));
            state.services = Some(Arc::new(services));
        }
        self.notify_subscribers();
        Ok(())
    }

    // Mutation appliers for the admin surface. The persisted write happens
    // upstream; here we rewrite the cached copy when one is loaded (a cold
    // cache stays cold and the next read refetches) and notify subscribers.

    pub async fn upsert_category(&self, category: Category) {
        {
            let mut state = self.cache.write().await;
            if let Some(cached) = state.categories.as_mut() {
                upsert_by_id(Arc::make_mut(cached), category, |c| &c.id);
            }
        }
        self.notify_subscribers();
    }

    pub async fn remove_category(&self, id: &str) {
        {
            let mut state = self.cache.write().await;
            if let Some(cached) = state.categories.as_mut() {
                Arc::make_mut(cached).retain(|category| category.id != id);
            }
        }
        self.notify_subscribers();
    }

    pub async fn upsert_subcategory(&self, subcategory: Subcategory) {
        {
            let mut state = self.cache.write().await;
            if let Some(cached) = state.subcategories.as_mut() {
                upsert_by_id(Arc::make_mut(cached), subcategory, |s| &s.id);
            }
        }
        self.notify_subscribers();
    }

    pub async fn remove_subcategory(&self, id: &str) {
        {
            let mut state = self.cache.write().await;
            if let Some(cached) = state.subcategories.as_mut() {
                Arc::make_mut(cached).retain(|subcategory| subcategory.id != id);
            }
        }
        self.notify_subscribers();
    }

    pub async fn upsert_service(&self, service: Service) {
        {
            let mut state = self.cache.write().await;
            if let Some(cached) = state.services.as_mut() {
                upsert_by_id(Arc::make_mut(cached), service, |s| &s.id);
            }
        }
        self.notify_subscribers();
    }

    pub async fn remove_service(&self, id: &str) {
        {
            let mut state = self.cache.write().await;
            if let Some(cached) = state.services.as_mut() {
                Arc::make_mut(cached).retain(|service| service.id != id);
            }
        }
        self.notify_subscribers();
    }
}

fn upsert_by_id<T, F>(list: &mut Vec<T>, entry: T, id_of: F)
where
    F: Fn(&T) -> &str,
{
    match list.iter().position(|existing| id_of(existing) == id_of(&entry)) {
        Some(index) => list[index] = entry,
        None => list.push(entry),
    }
}
