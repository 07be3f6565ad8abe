// Concrete CatalogSource implementations for external systems.

pub mod fixture;
pub mod http;
