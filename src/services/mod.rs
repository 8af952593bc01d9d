// src/services/mod.rs
//
// Service layer
//
// CRITICAL RULES:
// - Services orchestrate repositories and emit events
// - Storage failures are logged, never surfaced to the UI

pub mod favorites_service;

pub use favorites_service::FavoritesStore;
