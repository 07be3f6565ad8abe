use crate::domain::model::{PopularService, Service};

/// Landing-page shortlist: services flagged `popular`, with the title
/// trimmed to its first two words and a `/service/{id}` link. An empty
/// selection falls back to the static list so the landing page is never
/// blank before the catalog has been curated.
pub fn shortlist(services: &[Service]) -> Vec<PopularService> {
    let picked: Vec<PopularService> = services
        .iter()
        .filter(|service| service.popular)
        .map(to_entry)
        .collect();
    if picked.is_empty() {
        fallback()
    } else {
        picked
    }
}

fn to_entry(service: &Service) -> PopularService {
    let title = service
        .title
        .split_whitespace()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ");
    PopularService {
        title,
        icon: service.icon.clone(),
        link: format!("/service/{}", service.id),
    }
}

/// The five defaults shown before any real catalog data exists.
pub fn fallback() -> Vec<PopularService> {
    [
        ("Health Insurance", "🏥", "/service/health-claim"),
        ("Car Insurance", "🚗", "/service/motor-claim"),
        ("Life Insurance", "👥", "/service/life-claim"),
        ("Property Insurance", "🏠", "/service/property-claim"),
        ("Travel Insurance", "✈️", "/service/travel-claim"),
    ]
    .into_iter()
    .map(|(title, icon, link)| PopularService {
        title: title.to_string(),
        icon: icon.to_string(),
        link: link.to_string(),
    })
    .collect()
}
