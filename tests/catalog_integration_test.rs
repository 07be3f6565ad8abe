use std::time::Duration;

use claimsutra_catalog::core::resolver;
use claimsutra_catalog::{popular, CatalogError, CatalogStore, HttpCatalogSource};
use httpmock::prelude::*;
use httpmock::Mock;

fn mock_catalog<'a>(server: &'a MockServer) -> (Mock<'a>, Mock<'a>, Mock<'a>) {
    let categories = server.mock(|when, then| {
        when.method(GET).path("/api/catalog/categories");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": "legal", "name": "Legal Assistance", "number": 2, "tags": ["assistance"]},
                {"id": "insurance", "name": "Insurance Claims", "icon": "🛡️", "number": 1,
                 "tags": ["insurance", "claims"]}
            ]));
    });

    let subcategories = server.mock(|when, then| {
        when.method(GET).path("/api/catalog/subcategories");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": "motor", "name": "Motor", "categoryId": "insurance",
                 "serviceIds": ["motor-claim"], "number": 2},
                {"id": "health", "name": "Health", "categoryId": "insurance",
                 "serviceIds": ["health-claim", "deleted-claim"], "number": 1},
                {"id": "consumer", "name": "Consumer", "categoryId": "legal",
                 "serviceIds": [], "number": 1}
            ]));
    });

    let services = server.mock(|when, then| {
        when.method(GET).path("/api/catalog/services");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": "motor-claim", "title": "Motor Accident Claim", "icon": "🚗",
                 "category": "insurance", "number": 1},
                {"id": "health-claim", "title": "Health Claim Assistance", "icon": "🏥",
                 "category": "insurance", "popular": true, "number": 1,
                 "features": ["Cashless hospitalization"],
                 "contactInfo": {"phone": "1800-100-200", "email": "help@claimsutra.in"}}
            ]));
    });

    (categories, subcategories, services)
}

#[tokio::test]
async fn test_end_to_end_resolve_over_http() {
    let server = MockServer::start();
    let (categories_mock, subcategories_mock, services_mock) = mock_catalog(&server);

    let source =
        HttpCatalogSource::new(server.url("/api/catalog"), Duration::from_secs(5)).unwrap();
    let store = CatalogStore::new(source);

    let tree = resolver::resolve_tree(&store, |_| true).await.unwrap();

    categories_mock.assert();
    subcategories_mock.assert();
    services_mock.assert();

    // categories sorted by number
    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].category.id, "insurance");
    assert_eq!(tree[1].category.id, "legal");

    // subcategories sorted, dangling service id omitted
    let insurance = &tree[0];
    assert_eq!(insurance.subcategories.len(), 2);
    assert_eq!(insurance.subcategories[0].subcategory.id, "health");
    let health_services: Vec<&str> = insurance.subcategories[0]
        .services
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(health_services, vec!["health-claim"]);

    // empty subcategory kept with an empty service list
    let legal = &tree[1];
    assert_eq!(legal.subcategories.len(), 1);
    assert!(legal.subcategories[0].services.is_empty());

    // a second resolve is served from the cache, not the API
    let _ = resolver::resolve_tree(&store, |_| true).await.unwrap();
    categories_mock.assert_hits(1);
    subcategories_mock.assert_hits(1);
    services_mock.assert_hits(1);
}

#[tokio::test]
async fn test_scoped_resolve_filters_by_tag() {
    let server = MockServer::start();
    mock_catalog(&server);

    let source =
        HttpCatalogSource::new(server.url("/api/catalog"), Duration::from_secs(5)).unwrap();
    let store = CatalogStore::new(source);

    let tags = vec!["claims".to_string()];
    let tree = resolver::resolve_tree(&store, resolver::tag_scope(&tags))
        .await
        .unwrap();

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].category.id, "insurance");
}

#[tokio::test]
async fn test_search_and_popular_over_http() {
    let server = MockServer::start();
    mock_catalog(&server);

    let source =
        HttpCatalogSource::new(server.url("/api/catalog"), Duration::from_secs(5)).unwrap();
    let store = CatalogStore::new(source);

    let results = store.search("health").await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "health-claim");

    // case-insensitive match against the category label hits both services
    assert_eq!(store.search("INSURANCE").await.len(), 2);
    assert!(store.search("   ").await.is_empty());

    let entries = store.popular().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Health Claim"); // first two words only
    assert_eq!(entries[0].link, "/service/health-claim");

    assert!(store.get_service_by_id("motor-claim").await.is_some());
    assert!(store.get_service_by_id("deleted-claim").await.is_none());
}

#[tokio::test]
async fn test_upstream_failure_degrades_per_caller() {
    let server = MockServer::start();
    for path in [
        "/api/catalog/categories",
        "/api/catalog/subcategories",
        "/api/catalog/services",
    ] {
        server.mock(|when, then| {
            when.method(GET).path(path);
            then.status(503);
        });
    }

    let source =
        HttpCatalogSource::new(server.url("/api/catalog"), Duration::from_secs(5)).unwrap();
    let store = CatalogStore::new(source);

    // the resolver surfaces the error instead of a partial tree
    let result = resolver::resolve_tree(&store, |_| true).await;
    assert!(matches!(
        result,
        Err(CatalogError::FetchFailed { status: 503, .. })
    ));

    // render paths degrade: empty search results, static popular fallback
    assert!(store.search("health").await.is_empty());
    assert_eq!(store.popular().await, popular::fallback());
}
