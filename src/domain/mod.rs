// src/domain/mod.rs
//
// Domain Root
//
// Declares every domain module and re-exports its public API.
// Other modules import from `crate::domain::*`.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod character;
pub mod favorites;
pub mod query;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use character::{validate_character, Character, CharacterId, CharacterStatus, LocationRef};

pub use favorites::FavoritesCollection;

pub use query::{CatalogOutcome, FetchResult, QueryAction, QueryState, Tab, Transition};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
