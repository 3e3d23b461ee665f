// gamevault/storefront/src/services/mod.rs

pub mod upstream;

pub use upstream::HttpCatalogSource;
