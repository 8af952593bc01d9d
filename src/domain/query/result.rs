use serde::{Deserialize, Serialize};

use crate::domain::character::{Character, CharacterId};

/// One successfully fetched catalog page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchResult {
    pub characters: Vec<Character>,
    pub total_pages: u32,
    /// Total matches across all pages, when upstream reports it
    pub total_count: Option<u32>,
}

impl FetchResult {
    pub fn find(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }
}

/// What the catalog tab shows when redrawn from held state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogOutcome {
    #[default]
    NotLoaded,
    Loaded(FetchResult),
    Failed,
}

impl CatalogOutcome {
    pub fn result(&self) -> Option<&FetchResult> {
        match self {
            CatalogOutcome::Loaded(result) => Some(result),
            _ => None,
        }
    }
}
