// src/services/favorites_service.rs
//
// Favorites Store
//
// RULES:
// - Loaded once at startup; never fails
// - Every mutation is persisted synchronously
// - Write failures are logged, never propagated
// - Emits FavoriteAdded / FavoriteRemoved

use std::sync::Arc;

use crate::domain::{Character, CharacterId, FavoritesCollection};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, FavoriteAdded, FavoriteRemoved};
use crate::repositories::KeyValueRepository;

pub struct FavoritesStore {
    repo: Arc<dyn KeyValueRepository>,
    key: String,
    collection: FavoritesCollection,
    event_bus: Arc<EventBus>,
}

impl FavoritesStore {
    /// Reads the favorites slot.
    ///
    /// A missing slot, a storage error or unparsable contents all yield an
    /// empty collection.
    pub fn load(
        repo: Arc<dyn KeyValueRepository>,
        key: impl Into<String>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        let key = key.into();
        let collection = match Self::read_slot(repo.as_ref(), &key) {
            Ok(Some(collection)) => collection,
            Ok(None) => FavoritesCollection::new(),
            Err(e) => {
                log::warn!("Discarding unreadable favorites in slot {:?}: {}", key, e);
                FavoritesCollection::new()
            }
        };

        log::info!("Loaded {} favorites", collection.len());

        Self {
            repo,
            key,
            collection,
            event_bus,
        }
    }

    fn read_slot(repo: &dyn KeyValueRepository, key: &str) -> AppResult<Option<FavoritesCollection>> {
        let Some(raw) = repo.get(key)? else {
            return Ok(None);
        };
        let characters: Vec<Character> = serde_json::from_str(&raw)?;
        Ok(Some(FavoritesCollection::from_characters(characters)))
    }

    /// Writes the whole collection to the slot; failures are only logged
    pub fn save(&self) {
        let result = serde_json::to_string(&self.collection)
            .map_err(AppError::from)
            .and_then(|json| self.repo.set(&self.key, &json));

        if let Err(e) = result {
            log::warn!("Failed to persist favorites: {}", e);
        }
    }

    /// Adds a snapshot; false (and nothing written) if the id is already present
    pub fn add(&mut self, character: &Character) -> bool {
        if !self.collection.insert(character.clone()) {
            return false;
        }
        self.save();
        self.event_bus.emit(FavoriteAdded::new(
            character.id,
            character.name.clone(),
            self.collection.len(),
        ));
        true
    }

    /// Removes by id and persists; returns whether the id was present
    pub fn remove(&mut self, id: CharacterId) -> bool {
        let removed = self.collection.remove(id).is_some();
        self.save();
        if removed {
            self.event_bus
                .emit(FavoriteRemoved::new(id, self.collection.len()));
        }
        removed
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        self.collection.contains(id)
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.collection.get(id)
    }

    pub fn collection(&self) -> &FavoritesCollection {
        &self.collection
    }

    pub fn list(&self) -> &[Character] {
        self.collection.as_slice()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::character::test_support::character;
    use crate::repositories::InMemoryKeyValueRepository;
    use proptest::prelude::*;

    const KEY: &str = "favorites";

    fn fresh() -> (Arc<InMemoryKeyValueRepository>, Arc<EventBus>, FavoritesStore) {
        let repo = Arc::new(InMemoryKeyValueRepository::new());
        let bus = Arc::new(EventBus::new());
        let store = FavoritesStore::load(repo.clone(), KEY, bus.clone());
        (repo, bus, store)
    }

    /// Slot that rejects every write
    struct ReadOnlyRepository;

    impl KeyValueRepository for ReadOnlyRepository {
        fn get(&self, _key: &str) -> AppResult<Option<String>> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::Other("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        let (_, _, store) = fresh();
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_slot_loads_empty() {
        let repo = Arc::new(InMemoryKeyValueRepository::new());
        repo.set(KEY, "{not json").unwrap();
        let store = FavoritesStore::load(repo, KEY, Arc::new(EventBus::new()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_is_idempotent() {
        let (_, bus, mut store) = fresh();
        let rick = character(1, "Rick Sanchez");

        assert!(store.add(&rick));
        assert!(!store.add(&rick));
        assert_eq!(store.len(), 1);
        assert_eq!(bus.count_of("FavoriteAdded"), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let (_, bus, mut store) = fresh();
        assert!(!store.remove(42));
        assert!(store.is_empty());
        assert_eq!(bus.count_of("FavoriteRemoved"), 0);
    }

    #[test]
    fn test_mutations_survive_reload() {
        let (repo, bus, mut store) = fresh();
        store.add(&character(1, "Rick Sanchez"));
        store.add(&character(2, "Morty Smith"));
        store.add(&character(3, "Summer Smith"));
        store.remove(2);
        store.add(&character(1, "Rick Sanchez"));
        store.add(&character(4, "Beth Smith"));

        let reloaded = FavoritesStore::load(repo, KEY, bus);
        assert_eq!(reloaded.collection().ids(), vec![1, 3, 4]);
        assert!(reloaded.contains(3));
        assert!(!reloaded.contains(2));
    }

    proptest! {
        #[test]
        fn test_any_mutation_sequence_survives_reload(
            ops in prop::collection::vec((any::<bool>(), 1u32..8), 0..40)
        ) {
            let (repo, bus, mut store) = fresh();
            let mut expected: Vec<CharacterId> = Vec::new();

            for (is_add, id) in ops {
                if is_add {
                    let added = store.add(&character(id, &format!("Character {}", id)));
                    prop_assert_eq!(added, !expected.contains(&id));
                    if added {
                        expected.push(id);
                    }
                } else {
                    let removed = store.remove(id);
                    prop_assert_eq!(removed, expected.contains(&id));
                    expected.retain(|kept| *kept != id);
                }
            }

            let reloaded = FavoritesStore::load(repo, KEY, bus);
            prop_assert_eq!(reloaded.collection().ids(), expected);
        }
    }

    #[test]
    fn test_duplicate_ids_in_slot_are_collapsed() {
        let repo = Arc::new(InMemoryKeyValueRepository::new());
        let raw = serde_json::to_string(&vec![
            character(1, "Rick Sanchez"),
            character(1, "Rick Sanchez"),
        ])
        .unwrap();
        repo.set(KEY, &raw).unwrap();

        let store = FavoritesStore::load(repo, KEY, Arc::new(EventBus::new()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_write_failure_does_not_crash() {
        let mut store =
            FavoritesStore::load(Arc::new(ReadOnlyRepository), KEY, Arc::new(EventBus::new()));
        assert!(store.add(&character(1, "Rick Sanchez")));
        assert!(store.contains(1));
        assert!(store.remove(1));
    }
}
