// src/integrations/mod.rs
//
// External Integrations Module

pub mod catalog;

pub use catalog::{CatalogClient, CatalogSource};
