// src/view/model.rs
//
// Retained view model
//
// Plain, comparable data describing what each display region shows.
// Cards are keyed by character id so a single favorite toggle can be
// patched in place.

use crate::domain::{Character, CharacterId, FavoritesCollection, QueryState};

pub const ADD_FAVORITE_LABEL: &str = "Add to favorites";
pub const REMOVE_FAVORITE_LABEL: &str = "Remove from favorites";

fn toggle_label(favorited: bool) -> &'static str {
    if favorited {
        REMOVE_FAVORITE_LABEL
    } else {
        ADD_FAVORITE_LABEL
    }
}

/// Uppercases the first character, leaves the rest untouched
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One character tile in a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCard {
    pub id: CharacterId,
    pub name: String,
    pub image: String,
    pub status_label: String,
    /// `status-alive`, `status-dead` or `status-unknown`
    pub status_class: String,
    pub species: String,
    pub favorited: bool,
    pub toggle_label: String,
}

impl CharacterCard {
    pub fn new(character: &Character, favorited: bool) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            image: character.image.clone(),
            status_label: character.status.label().to_string(),
            status_class: format!("status-{}", character.status.as_query_value()),
            species: character.species.clone(),
            favorited,
            toggle_label: toggle_label(favorited).to_string(),
        }
    }

    pub fn set_favorited(&mut self, favorited: bool) {
        self.favorited = favorited;
        self.toggle_label = toggle_label(favorited).to_string();
    }
}

/// Message shown in place of a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub icon: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub retry: bool,
}

impl Placeholder {
    pub fn no_results() -> Self {
        Self {
            icon: "search",
            title: "No characters found",
            message: "Try adjusting the filters or searching for another name",
            retry: false,
        }
    }

    pub fn fetch_failed() -> Self {
        Self {
            icon: "exclamation-triangle",
            title: "Oops! Something went wrong",
            message: "We couldn't load the characters right now",
            retry: true,
        }
    }

    pub fn no_favorites() -> Self {
        Self {
            icon: "heart",
            title: "No favorites yet",
            message: "Use the heart on any character to keep it here",
            retry: false,
        }
    }
}

/// Contents of a grid region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridContent {
    Cards(Vec<CharacterCard>),
    Empty(Placeholder),
    Error(Placeholder),
}

impl Default for GridContent {
    fn default() -> Self {
        GridContent::Cards(Vec::new())
    }
}

impl GridContent {
    pub fn from_characters<'a, I>(characters: I, favorites: &FavoritesCollection) -> Vec<CharacterCard>
    where
        I: IntoIterator<Item = &'a Character>,
    {
        characters
            .into_iter()
            .map(|c| CharacterCard::new(c, favorites.contains(c.id)))
            .collect()
    }

    pub fn cards(&self) -> &[CharacterCard] {
        match self {
            GridContent::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn card(&self, id: CharacterId) -> Option<&CharacterCard> {
        self.cards().iter().find(|card| card.id == id)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, GridContent::Error(_))
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, GridContent::Empty(_))
    }

    /// Updates the toggle of every card with this id; returns how many changed
    pub fn set_favorited(&mut self, id: CharacterId, favorited: bool) -> usize {
        let GridContent::Cards(cards) = self else {
            return 0;
        };
        let mut touched = 0;
        for card in cards.iter_mut().filter(|card| card.id == id) {
            card.set_favorited(favorited);
            touched += 1;
        }
        touched
    }
}

/// Pagination controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub current: u32,
    pub total: u32,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl PaginationView {
    pub fn from_state(state: &QueryState) -> Self {
        Self {
            current: state.page(),
            total: state.total_pages(),
            prev_disabled: state.is_first_page(),
            next_disabled: state.is_last_page(),
        }
    }

    /// `"<current> / <total>"`
    pub fn label(&self) -> String {
        format!("{} / {}", self.current, self.total)
    }
}

impl Default for PaginationView {
    fn default() -> Self {
        Self::from_state(&QueryState::default())
    }
}

/// Detail panel shown in the modal
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub character: Character,
    pub image: String,
    pub name: String,
    pub status_label: String,
    pub status_class: String,
    pub species: String,
    pub favorited: bool,
    pub toggle_label: String,
    pub gender: String,
    pub origin: String,
    pub location: String,
    pub appearance_count: usize,
    pub created_on: String,
}

impl DetailView {
    pub fn new(character: &Character, favorited: bool) -> Self {
        Self::with_created_on(character, favorited, character.created_date_local())
    }

    /// Builds the panel with an already formatted creation date
    pub fn with_created_on(character: &Character, favorited: bool, created_on: String) -> Self {
        Self {
            character: character.clone(),
            image: character.image.clone(),
            name: character.name.clone(),
            status_label: character.status.label().to_string(),
            status_class: format!("status-{}", character.status.as_query_value()),
            species: character.species.clone(),
            favorited,
            toggle_label: toggle_label(favorited).to_string(),
            gender: capitalize_first(&character.gender),
            origin: character.origin.name.clone(),
            location: character.location.name.clone(),
            appearance_count: character.appearance_count(),
            created_on,
        }
    }

    pub fn id(&self) -> CharacterId {
        self.character.id
    }

    pub fn set_favorited(&mut self, favorited: bool) {
        self.favorited = favorited;
        self.toggle_label = toggle_label(favorited).to_string();
    }
}
