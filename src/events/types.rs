// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::CharacterId;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($event:ty, $name:literal) => {
        impl DomainEvent for $event {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { $name }
        }
    };
}

// ============================================================================
// FAVORITES EVENTS
// ============================================================================

/// Emitted when a character snapshot enters the favorites
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub character_id: CharacterId,
    pub name: String,
    pub favorites_count: usize,
}

impl FavoriteAdded {
    pub fn new(character_id: CharacterId, name: String, favorites_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            character_id,
            name,
            favorites_count,
        }
    }
}

impl_domain_event!(FavoriteAdded, "FavoriteAdded");

/// Emitted when a character leaves the favorites
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub character_id: CharacterId,
    pub favorites_count: usize,
}

impl FavoriteRemoved {
    pub fn new(character_id: CharacterId, favorites_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            character_id,
            favorites_count,
        }
    }
}

impl_domain_event!(FavoriteRemoved, "FavoriteRemoved");

// ============================================================================
// CATALOG EVENTS
// ============================================================================

/// Emitted when a fetched page has been applied to the view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPageLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub request_token: u64,
    pub page: u32,
    pub total_pages: u32,
    pub character_count: usize,
}

impl CatalogPageLoaded {
    pub fn new(request_token: u64, page: u32, total_pages: u32, character_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            request_token,
            page,
            total_pages,
            character_count,
        }
    }
}

impl_domain_event!(CatalogPageLoaded, "CatalogPageLoaded");

/// Emitted when the latest catalog request failed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFetchFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub request_token: u64,
    pub reason: String,
}

impl CatalogFetchFailed {
    pub fn new(request_token: u64, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            request_token,
            reason,
        }
    }
}

impl_domain_event!(CatalogFetchFailed, "CatalogFetchFailed");
