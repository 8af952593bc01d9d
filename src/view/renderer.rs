// src/view/renderer.rs
//
// View Renderer
//
// Owns the retained view model for every display region:
// catalog grid, favorites grid, pagination, detail modal,
// counters, loading indicator and notification tray.
//
// RULES:
// - Rendering the same inputs twice produces identical regions
// - Favorite toggles are patched in place by id, never by re-rendering
//   unrelated cards

use std::time::{Duration, Instant};

use crate::domain::{Character, CharacterId, FavoritesCollection, QueryState, Tab};

use super::model::{CharacterCard, DetailView, GridContent, PaginationView, Placeholder};
use super::notifications::{NotificationKind, NotificationTray};

#[derive(Debug, Clone)]
pub struct ViewRenderer {
    active_tab: Tab,
    catalog_grid: GridContent,
    favorites_grid: GridContent,
    pagination: PaginationView,
    detail: Option<DetailView>,
    scroll_locked: bool,
    loading: bool,
    favorites_count: usize,
    characters_count: usize,
    notifications: NotificationTray,
}

impl ViewRenderer {
    pub fn new(notification_lifetime: Duration) -> Self {
        Self {
            active_tab: Tab::Catalog,
            catalog_grid: GridContent::default(),
            favorites_grid: GridContent::Empty(Placeholder::no_favorites()),
            pagination: PaginationView::default(),
            detail: None,
            scroll_locked: false,
            loading: false,
            favorites_count: 0,
            characters_count: 0,
            notifications: NotificationTray::new(notification_lifetime),
        }
    }

    // ========================================================================
    // GRIDS
    // ========================================================================

    /// One card per character in the catalog grid; empty input shows the
    /// no-results placeholder
    pub fn render_list(&mut self, characters: &[Character], favorites: &FavoritesCollection) {
        self.characters_count = characters.len();
        if characters.is_empty() {
            self.render_empty();
            return;
        }
        self.catalog_grid = GridContent::Cards(GridContent::from_characters(characters, favorites));
    }

    pub fn render_empty(&mut self) {
        self.characters_count = 0;
        self.catalog_grid = GridContent::Empty(Placeholder::no_results());
    }

    pub fn render_error(&mut self) {
        self.characters_count = 0;
        self.catalog_grid = GridContent::Error(Placeholder::fetch_failed());
    }

    /// Full redraw of the favorites grid
    pub fn render_favorites(&mut self, favorites: &FavoritesCollection) {
        self.favorites_count = favorites.len();
        self.favorites_grid = if favorites.is_empty() {
            GridContent::Empty(Placeholder::no_favorites())
        } else {
            let cards = favorites
                .iter()
                .map(|c| CharacterCard::new(c, true))
                .collect();
            GridContent::Cards(cards)
        };
    }

    pub fn render_pagination(&mut self, state: &QueryState) {
        self.pagination = PaginationView::from_state(state);
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    // ========================================================================
    // FAVORITE TOGGLES
    // ========================================================================

    /// Updates every visible toggle for `id`: catalog card, favorites card
    /// and the open detail panel
    pub fn set_favorited(&mut self, id: CharacterId, favorited: bool) -> usize {
        let mut touched = self.catalog_grid.set_favorited(id, favorited);
        touched += self.favorites_grid.set_favorited(id, favorited);
        if let Some(detail) = self.detail.as_mut().filter(|d| d.id() == id) {
            detail.set_favorited(favorited);
            touched += 1;
        }
        touched
    }

    pub fn set_favorites_count(&mut self, count: usize) {
        self.favorites_count = count;
    }

    // ========================================================================
    // DETAIL MODAL
    // ========================================================================

    /// Opens (or replaces) the detail panel and locks background scroll
    pub fn open_detail(&mut self, character: &Character, favorited: bool) {
        self.detail = Some(DetailView::new(character, favorited));
        self.scroll_locked = true;
    }

    /// Closes the modal; false if it was already closed
    pub fn close_detail(&mut self) -> bool {
        if self.detail.take().is_none() {
            return false;
        }
        self.scroll_locked = false;
        true
    }

    // ========================================================================
    // LOADING & NOTIFICATIONS
    // ========================================================================

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.notify_at(message, kind, Instant::now())
    }

    pub fn notify_at(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Instant,
    ) -> u64 {
        let message = message.into();
        log::debug!("notify[{:?}] {}", kind, message);
        self.notifications.push(message, kind, now)
    }

    pub fn dismiss_expired(&mut self, now: Instant) -> usize {
        self.notifications.dismiss_expired(now)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn catalog_grid(&self) -> &GridContent {
        &self.catalog_grid
    }

    pub fn favorites_grid(&self) -> &GridContent {
        &self.favorites_grid
    }

    /// Grid of the active tab
    pub fn active_grid(&self) -> &GridContent {
        match self.active_tab {
            Tab::Catalog => &self.catalog_grid,
            Tab::Favorites => &self.favorites_grid,
        }
    }

    pub fn pagination(&self) -> &PaginationView {
        &self.pagination
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.detail.is_some()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn favorites_count(&self) -> usize {
        self.favorites_count
    }

    pub fn characters_count(&self) -> usize {
        self.characters_count
    }

    pub fn notifications(&self) -> &NotificationTray {
        &self.notifications
    }
}
