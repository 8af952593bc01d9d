// src/lib.rs
// rickdex - Rick and Morty character catalog browser
//
// Architecture:
// - Domain-centric: characters, favorites and query state are plain data
// - Event-driven: the favorites store and controller publish typed events
// - Explicit: every fetch carries a ticket, stale results are dropped
// - Local-first favorites: snapshots live in a local key-value slot

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;
pub mod view;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_character, CatalogOutcome, Character, CharacterId, CharacterStatus,
    FavoritesCollection, FetchResult, LocationRef, QueryAction, QueryState, Tab, Transition,
};

// ============================================================================
// PUBLIC API - Errors & Config
// ============================================================================

pub use config::AppConfig;
pub use error::{AppError, AppResult, FetchError};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, CatalogFetchFailed, CatalogPageLoaded, DomainEvent, EventBus,
    EventLogEntry, FavoriteAdded, FavoriteRemoved,
};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};
pub use repositories::{InMemoryKeyValueRepository, KeyValueRepository, SqliteKeyValueRepository};
pub use services::FavoritesStore;

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{
    build_controller, parse_command, CatalogController, FetchTicket, Key, ShellCommand, UiEvent,
};
pub use integrations::{CatalogClient, CatalogSource};
pub use view::{render_screen, ViewRenderer};
