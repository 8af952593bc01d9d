//! Character Invariants:
//!
//! 1. The id is assigned upstream and never changes
//! 2. The id uniquely identifies a character for the whole session
//! 3. Names are never empty
//! 4. Status is always one of Alive, Dead, Unknown

pub mod entity;
pub mod invariants;

pub use entity::{Character, CharacterId, CharacterStatus, LocationRef};
pub use invariants::validate_character;
