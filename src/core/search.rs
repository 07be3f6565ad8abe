use crate::domain::model::Service;

/// Case-insensitive substring filter over the flattened service list. A
/// service matches when any of title, category label, description, or
/// feature text contains the query. Result order is input order; a blank
/// query means "no search performed" and returns nothing.
pub fn filter_services(services: &[Service], query: &str) -> Vec<Service> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    services
        .iter()
        .filter(|service| matches(service, &needle))
        .cloned()
        .collect()
}

fn matches(service: &Service, needle: &str) -> bool {
    service.title.to_lowercase().contains(needle)
        || service.category.to_lowercase().contains(needle)
        || service.description.to_lowercase().contains(needle)
        || service
            .features
            .iter()
            .any(|feature| feature.to_lowercase().contains(needle))
}
