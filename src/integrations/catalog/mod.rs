pub mod client;

pub use client::{CatalogClient, CatalogSource};

#[cfg(test)]
pub use client::MockCatalogSource;
