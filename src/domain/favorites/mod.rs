//! Critical Favorites Invariants:
//!
//! 1. No two snapshots share an id
//! 2. Insertion order is the display order
//! 3. Snapshots are copies; they may drift from the live catalog
//! 4. Membership is decided by id only

pub mod entity;

pub use entity::FavoritesCollection;
