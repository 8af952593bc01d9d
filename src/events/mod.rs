// src/events/mod.rs
//
// Internal Event System - Public API

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{CatalogFetchFailed, CatalogPageLoaded, FavoriteAdded, FavoriteRemoved};

pub use bus::{EventBus, EventLogEntry, EVENT_LOG_CAPACITY};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
