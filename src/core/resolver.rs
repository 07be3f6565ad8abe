use std::collections::HashMap;

use crate::core::store::CatalogStore;
use crate::domain::model::{Category, ResolvedCategory, ResolvedSubcategory, Service, Subcategory};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;

/// Joins categories, subcategories, and services into the nested navigation
/// tree. The three collections are fetched concurrently; any fetch failure
/// yields `Err` rather than a partial tree. Entities are sorted by `number`
/// at every level (stable, so equal numbers keep insertion order), and
/// dangling references are silently omitted.
pub async fn resolve_tree<S, F>(store: &CatalogStore<S>, scope: F) -> Result<Vec<ResolvedCategory>>
where
    S: CatalogSource,
    F: Fn(&Category) -> bool,
{
    let (categories, subcategories, services) = tokio::try_join!(
        store.try_categories(),
        store.try_subcategories(),
        store.try_services(),
    )?;

    let services_by_id: HashMap<&str, &Service> = services
        .iter()
        .map(|service| (service.id.as_str(), service))
        .collect();

    let mut scoped: Vec<Category> = categories
        .iter()
        .filter(|category| scope(category))
        .cloned()
        .collect();
    scoped.sort_by_key(|category| category.number);

    let mut tree = Vec::with_capacity(scoped.len());
    for category in scoped {
        let mut children: Vec<Subcategory> = subcategories
            .iter()
            .filter(|subcategory| subcategory.category_id == category.id)
            .cloned()
            .collect();
        children.sort_by_key(|subcategory| subcategory.number);

        let resolved_children = children
            .into_iter()
            .map(|subcategory| {
                let mut resolved: Vec<Service> = subcategory
                    .service_ids
                    .iter()
                    .filter_map(|id| services_by_id.get(id.as_str()).map(|s| (*s).clone()))
                    .collect();
                resolved.sort_by_key(|service| service.number);
                ResolvedSubcategory {
                    subcategory,
                    services: resolved,
                }
            })
            .collect();

        tree.push(ResolvedCategory {
            category,
            subcategories: resolved_children,
        });
    }

    Ok(tree)
}

/// Scope predicate over category tags: an empty tag list matches everything,
/// otherwise a category matches when it carries any of the given tags.
pub fn tag_scope(tags: &[String]) -> impl Fn(&Category) -> bool + '_ {
    move |category: &Category| {
        tags.is_empty() || category.tags.iter().any(|tag| tags.contains(tag))
    }
}
