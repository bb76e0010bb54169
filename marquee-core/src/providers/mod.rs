pub mod catalog;
pub mod omdb_api_provider;
pub mod omdb_wire;

pub use crate::error::ProviderError;
pub use catalog::{CatalogClient, SearchHit};
pub use omdb_api_provider::{OmdbApiProvider, OmdbSettings};
