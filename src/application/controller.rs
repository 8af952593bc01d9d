// src/application/controller.rs
//
// Catalog Controller
//
// ARCHITECTURE:
// - Owns the query state, the last fetch outcome, the favorites store
//   and the retained view
// - Turns UI events into query transitions and fetch tickets
// - Applies fetch results only when their ticket is still the latest
//
// CRITICAL RULES:
// - A ticket snapshots the query at trigger time
// - Stale completions are discarded without touching state or view
// - The loading flag is cleared by every completion of the latest ticket,
//   success or failure

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppConfig;
use crate::domain::{
    CatalogOutcome, Character, CharacterId, DomainError, DomainResult, FetchResult, QueryAction,
    QueryState, Tab,
};
use crate::error::FetchError;
use crate::events::{
    CatalogFetchFailed, CatalogPageLoaded, EventBus, FavoriteAdded, FavoriteRemoved,
};
use crate::integrations::CatalogSource;
use crate::services::FavoritesStore;
use crate::view::{NotificationKind, ViewRenderer};

use super::debounce::SearchDebouncer;
use super::error_handling::fetch_failure_message;
use super::events::{Key, UiEvent};

/// A fetch that has been issued but not yet applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: u64,
    pub query: QueryState,
}

pub struct CatalogController {
    query: QueryState,
    outcome: CatalogOutcome,
    favorites: FavoritesStore,
    view: ViewRenderer,
    source: Arc<dyn CatalogSource>,
    event_bus: Arc<EventBus>,
    debouncer: SearchDebouncer,
    latest_token: u64,
    /// Favorites count as last published on the event bus
    favorites_badge: Arc<AtomicUsize>,
}

impl CatalogController {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        favorites: FavoritesStore,
        event_bus: Arc<EventBus>,
        config: &AppConfig,
    ) -> Self {
        let query = QueryState::new();
        let mut view = ViewRenderer::new(config.toast_duration);
        view.render_favorites(favorites.collection());
        view.render_pagination(&query);
        view.set_active_tab(query.tab());

        let favorites_badge = Arc::new(AtomicUsize::new(favorites.len()));
        let badge = Arc::clone(&favorites_badge);
        event_bus.subscribe::<FavoriteAdded, _>(move |event| {
            badge.store(event.favorites_count, Ordering::SeqCst);
        });
        let badge = Arc::clone(&favorites_badge);
        event_bus.subscribe::<FavoriteRemoved, _>(move |event| {
            badge.store(event.favorites_count, Ordering::SeqCst);
        });

        Self {
            query,
            outcome: CatalogOutcome::NotLoaded,
            favorites,
            view,
            source,
            event_bus,
            debouncer: SearchDebouncer::new(config.search_debounce),
            latest_token: 0,
            favorites_badge,
        }
    }

    // ========================================================================
    // EVENT DISPATCH
    // ========================================================================

    pub fn handle(&mut self, event: UiEvent) -> Option<FetchTicket> {
        self.handle_at(event, Instant::now())
    }

    /// Applies one UI event; returns a ticket when a fetch must be issued
    pub fn handle_at(&mut self, event: UiEvent, now: Instant) -> Option<FetchTicket> {
        log::debug!("ui event: {:?}", event);
        match event {
            UiEvent::SearchInput(term) => {
                self.debouncer.input(term, now);
                None
            }
            UiEvent::ClearSearch => {
                self.debouncer.cancel();
                self.apply(QueryAction::ClearSearch)
            }
            UiEvent::StatusFilterChanged(status) => self.apply(QueryAction::StatusFilter(status)),
            UiEvent::SpeciesFilterChanged(species) => {
                self.apply(QueryAction::SpeciesFilter(species))
            }
            UiEvent::PrevPage => self.apply(QueryAction::PrevPage),
            UiEvent::NextPage => self.apply(QueryAction::NextPage),
            UiEvent::Retry => self.apply(QueryAction::Reload),
            UiEvent::SwitchTab(tab) => {
                self.show_tab(tab);
                None
            }
            UiEvent::CardClicked(id) => {
                if let Err(e) = self.open_detail(id) {
                    log::warn!("Cannot open detail: {}", e);
                }
                None
            }
            UiEvent::FavoriteToggled(id) => {
                if let Err(e) = self.toggle_favorite(id) {
                    log::warn!("Cannot toggle favorite: {}", e);
                }
                None
            }
            UiEvent::CloseClicked | UiEvent::OverlayClicked | UiEvent::KeyPressed(Key::Escape) => {
                self.close_modal();
                None
            }
        }
    }

    /// Releases a debounced search once its quiet period is over
    pub fn poll_debounce(&mut self, now: Instant) -> Option<FetchTicket> {
        let term = self.debouncer.take_ready(now)?;
        self.apply(QueryAction::Search(term))
    }

    pub fn debounce_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    fn apply(&mut self, action: QueryAction) -> Option<FetchTicket> {
        let transition = self.query.reduce(&action);
        self.query = transition.state;
        if !transition.needs_fetch {
            return None;
        }
        self.view.render_pagination(&self.query);
        Some(self.begin_fetch())
    }

    // ========================================================================
    // FETCH LIFECYCLE
    // ========================================================================

    /// Issues a new ticket for the current query and shows the loading state
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_token += 1;
        self.view.set_loading(true);
        log::debug!("fetch #{} for {:?}", self.latest_token, self.query);
        FetchTicket {
            token: self.latest_token,
            query: self.query.clone(),
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.token == self.latest_token
    }

    /// Applies a completed fetch; false if the ticket was stale and ignored
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<FetchResult, FetchError>,
    ) -> bool {
        if !self.is_current(&ticket) {
            log::debug!(
                "Discarding stale fetch #{} (latest is #{})",
                ticket.token,
                self.latest_token
            );
            return false;
        }

        self.view.set_loading(false);

        match result {
            Ok(page) => {
                self.query.set_total_pages(page.total_pages);
                self.view.render_list(&page.characters, self.favorites.collection());
                self.view.render_pagination(&self.query);
                log::info!(
                    "Loaded page {}/{} ({} characters)",
                    self.query.page(),
                    self.query.total_pages(),
                    page.characters.len()
                );
                self.event_bus.emit(CatalogPageLoaded::new(
                    ticket.token,
                    self.query.page(),
                    self.query.total_pages(),
                    page.characters.len(),
                ));
                self.outcome = CatalogOutcome::Loaded(page);
            }
            Err(error) => {
                self.outcome = CatalogOutcome::Failed;
                self.view.render_error();
                self.view
                    .notify(fetch_failure_message(&error), NotificationKind::Error);
                self.event_bus
                    .emit(CatalogFetchFailed::new(ticket.token, error.to_string()));
            }
        }

        true
    }

    /// Runs a ticket against the catalog source and applies the result
    pub async fn run(&mut self, ticket: FetchTicket) -> bool {
        let result = self.source.fetch_page(&ticket.query).await;
        self.complete_fetch(ticket, result)
    }

    /// Fetches the current query
    pub async fn load(&mut self) -> bool {
        let ticket = self.begin_fetch();
        self.run(ticket).await
    }

    /// Handles an event and, if it needs one, performs the fetch inline
    pub async fn dispatch(&mut self, event: UiEvent) {
        if let Some(ticket) = self.handle(event) {
            self.run(ticket).await;
        }
    }

    // ========================================================================
    // TABS
    // ========================================================================

    /// Redraws the target tab from held state; never fetches
    pub fn show_tab(&mut self, tab: Tab) {
        self.query.set_tab(tab);
        self.view.set_active_tab(tab);

        match tab {
            Tab::Favorites => self.view.render_favorites(self.favorites.collection()),
            Tab::Catalog => match &self.outcome {
                CatalogOutcome::Loaded(page) => {
                    self.view
                        .render_list(&page.characters, self.favorites.collection());
                }
                CatalogOutcome::Failed => self.view.render_error(),
                CatalogOutcome::NotLoaded => {}
            },
        }
    }

    // ========================================================================
    // FAVORITES
    // ========================================================================

    fn find_character(&self, id: CharacterId) -> Option<Character> {
        self.view
            .detail()
            .filter(|detail| detail.id() == id)
            .map(|detail| detail.character.clone())
            .or_else(|| self.outcome.result().and_then(|page| page.find(id)).cloned())
            .or_else(|| self.favorites.get(id).cloned())
    }

    /// Flips membership of `id`; returns the new membership
    pub fn toggle_favorite(&mut self, id: CharacterId) -> DomainResult<bool> {
        let character = self
            .find_character(id)
            .ok_or_else(|| DomainError::NotFound(format!("character {}", id)))?;

        if self.favorites.contains(id) {
            self.favorites.remove(id);
            self.view.notify(
                format!("{} was removed from your favorites", character.name),
                NotificationKind::Warning,
            );
        } else if self.favorites.add(&character) {
            self.view.notify(
                format!("{} was added to your favorites!", character.name),
                NotificationKind::Success,
            );
        }

        let favorited = self.favorites.contains(id);
        self.view.set_favorited(id, favorited);
        self.view
            .set_favorites_count(self.favorites_badge.load(Ordering::SeqCst));

        if self.query.tab() == Tab::Favorites {
            self.view.render_favorites(self.favorites.collection());
        }

        Ok(favorited)
    }

    // ========================================================================
    // DETAIL MODAL
    // ========================================================================

    pub fn open_detail(&mut self, id: CharacterId) -> DomainResult<()> {
        let from_active_tab = match self.query.tab() {
            Tab::Favorites => self.favorites.get(id).cloned(),
            Tab::Catalog => self.outcome.result().and_then(|page| page.find(id)).cloned(),
        };
        let character = from_active_tab
            .or_else(|| self.find_character(id))
            .ok_or_else(|| DomainError::NotFound(format!("character {}", id)))?;

        self.view.open_detail(&character, self.favorites.contains(id));
        Ok(())
    }

    /// Closes the modal; no-op when already closed
    pub fn close_modal(&mut self) -> bool {
        self.view.close_detail()
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn dismiss_expired(&mut self, now: Instant) -> usize {
        self.view.dismiss_expired(now)
    }

    pub fn next_notification_deadline(&self) -> Option<Instant> {
        self.view.notifications().next_deadline()
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.view.notify(message, kind);
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn outcome(&self) -> &CatalogOutcome {
        &self.outcome
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn view(&self) -> &ViewRenderer {
        &self.view
    }

    pub fn source(&self) -> Arc<dyn CatalogSource> {
        Arc::clone(&self.source)
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }
}
