pub mod catalog;
pub mod rapidapi;

pub use catalog::{CatalogClient, CatalogError, ResponseInfo};
pub use rapidapi::RapidApiClient;
