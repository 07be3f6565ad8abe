pub mod popular;
pub mod resolver;
pub mod search;
pub mod store;

pub use crate::domain::model::{
    Category, PopularService, ResolvedCategory, ResolvedSubcategory, Service, Subcategory,
};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
