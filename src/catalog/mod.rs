pub mod http;
pub mod source;
pub mod types;

pub use http::HttpCatalog;
pub use source::{CatalogError, CatalogSource};
pub use types::{Category, MalformedPlant, Plant, PlantId};
