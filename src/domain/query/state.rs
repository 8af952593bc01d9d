use serde::{Deserialize, Serialize};

use crate::domain::character::CharacterStatus;

/// Which content section is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Catalog,
    Favorites,
}

impl Tab {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "catalog" | "characters" => Some(Tab::Catalog),
            "favorites" | "favourites" => Some(Tab::Favorites),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tab::Catalog => write!(f, "catalog"),
            Tab::Favorites => write!(f, "favorites"),
        }
    }
}

/// What the catalog should be showing.
///
/// Single source of truth for the next fetch. Changing the search term or a
/// filter always moves back to the first page, and the page never leaves
/// `1..=total_pages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    page: u32,
    total_pages: u32,
    search_term: String,
    status_filter: Option<CharacterStatus>,
    species_filter: Option<String>,
    tab: Tab,
}

/// A requested change to the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAction {
    Search(String),
    ClearSearch,
    StatusFilter(Option<CharacterStatus>),
    SpeciesFilter(Option<String>),
    NextPage,
    PrevPage,
    SwitchTab(Tab),
    /// Re-issue the current query unchanged
    Reload,
}

/// Result of reducing a [`QueryAction`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: QueryState,
    pub needs_fetch: bool,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
            search_term: String::new(),
            status_filter: None,
            species_filter: None,
            tab: Tab::Catalog,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn status_filter(&self) -> Option<CharacterStatus> {
        self.status_filter
    }

    pub fn species_filter(&self) -> Option<&str> {
        self.species_filter.as_deref()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    pub fn set_search(&mut self, term: &str) {
        self.search_term = term.trim().to_string();
        self.page = 1;
    }

    pub fn clear_search(&mut self) {
        self.set_search("");
    }

    pub fn set_status_filter(&mut self, status: Option<CharacterStatus>) {
        self.status_filter = status;
        self.page = 1;
    }

    pub fn set_species_filter(&mut self, species: Option<String>) {
        self.species_filter = species
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self.page = 1;
    }

    /// Advances one page; false at the last known page
    pub fn next_page(&mut self) -> bool {
        if self.is_last_page() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Goes back one page; false at page 1
    pub fn prev_page(&mut self) -> bool {
        if self.is_first_page() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Records the page count of a successful fetch.
    ///
    /// Clamped to at least 1; the current page is pulled back into range.
    pub fn set_total_pages(&mut self, total: u32) {
        self.total_pages = total.max(1);
        self.page = self.page.clamp(1, self.total_pages);
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Computes the state that follows `action` without touching `self`
    pub fn reduce(&self, action: &QueryAction) -> Transition {
        let mut next = self.clone();
        let needs_fetch = match action {
            QueryAction::Search(term) => {
                next.set_search(term);
                true
            }
            QueryAction::ClearSearch => {
                next.clear_search();
                true
            }
            QueryAction::StatusFilter(status) => {
                next.set_status_filter(*status);
                true
            }
            QueryAction::SpeciesFilter(species) => {
                next.set_species_filter(species.clone());
                true
            }
            QueryAction::NextPage => next.next_page(),
            QueryAction::PrevPage => next.prev_page(),
            QueryAction::SwitchTab(tab) => {
                next.set_tab(*tab);
                false
            }
            QueryAction::Reload => true,
        };

        Transition {
            state: next,
            needs_fetch,
        }
    }
}
