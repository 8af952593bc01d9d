use serde::{Deserialize, Serialize};

use crate::domain::character::{Character, CharacterId};

/// Ordered set of favorited character snapshots.
///
/// Serialized as a plain JSON array of characters, which is the format kept
/// in the favorites storage slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesCollection {
    characters: Vec<Character>,
}

impl FavoritesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from a raw list, keeping the first snapshot of each id
    pub fn from_characters(characters: Vec<Character>) -> Self {
        let mut collection = Self::new();
        for character in characters {
            collection.insert(character);
        }
        collection
    }

    /// Inserts a snapshot unless its id is already present
    pub fn insert(&mut self, character: Character) -> bool {
        if self.contains(character.id) {
            return false;
        }
        self.characters.push(character);
        true
    }

    /// Removes the snapshot with this id, returning it if it was present
    pub fn remove(&mut self, id: CharacterId) -> Option<Character> {
        let index = self.characters.iter().position(|c| c.id == id)?;
        Some(self.characters.remove(index))
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        self.characters.iter().any(|c| c.id == id)
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Snapshots in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    pub fn as_slice(&self) -> &[Character] {
        &self.characters
    }

    pub fn ids(&self) -> Vec<CharacterId> {
        self.characters.iter().map(|c| c.id).collect()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
