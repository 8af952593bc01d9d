// src/application/controller_tests.rs
//
// Controller behaviour: fetch lifecycle, stale responses, favorites,
// tabs and the detail modal. The catalog is mocked; storage is in memory.

#[cfg(test)]
mod tests {
    use std::ops::RangeInclusive;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use crate::application::controller::CatalogController;
    use crate::application::events::{Key, UiEvent};
    use crate::config::AppConfig;
    use crate::domain::character::test_support::character;
    use crate::domain::{CatalogOutcome, CharacterStatus, FetchResult, Tab};
    use crate::error::FetchError;
    use crate::events::{EventBus, EVENT_LOG_CAPACITY};
    use crate::integrations::catalog::MockCatalogSource;
    use crate::repositories::InMemoryKeyValueRepository;
    use crate::services::FavoritesStore;
    use crate::view::{GridContent, NotificationKind, Placeholder, REMOVE_FAVORITE_LABEL};

    // ========================================================================
    // TEST HELPERS
    // ========================================================================

    fn page_of(ids: RangeInclusive<u32>, total_pages: u32) -> FetchResult {
        FetchResult {
            characters: ids.map(|id| character(id, &format!("Character {}", id))).collect(),
            total_pages,
            total_count: None,
        }
    }

    fn controller_with(source: MockCatalogSource) -> CatalogController {
        let bus = Arc::new(EventBus::new());
        let repo = Arc::new(InMemoryKeyValueRepository::new());
        let favorites = FavoritesStore::load(repo, "favorites", bus.clone());
        CatalogController::new(Arc::new(source), favorites, bus, &AppConfig::default())
    }

    /// Catalog that always answers with the first page of 42
    fn first_page_source() -> MockCatalogSource {
        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_page()
            .returning(|_| Ok(page_of(1..=20, 42)));
        source
    }

    async fn loaded_controller() -> CatalogController {
        let mut controller = controller_with(first_page_source());
        assert!(controller.load().await);
        controller
    }

    fn notifications_of(controller: &CatalogController, kind: NotificationKind) -> usize {
        controller.view().notifications().count_of(kind)
    }

    // ========================================================================
    // FETCH LIFECYCLE
    // ========================================================================

    #[tokio::test]
    async fn test_first_page_scenario() {
        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_page()
            .withf(|q| {
                q.page() == 1
                    && q.search_term().is_empty()
                    && q.status_filter().is_none()
                    && q.species_filter().is_none()
            })
            .times(1)
            .returning(|_| Ok(page_of(1..=20, 42)));

        let mut controller = controller_with(source);
        controller.load().await;

        let pagination = controller.view().pagination();
        assert_eq!(pagination.label(), "1 / 42");
        assert!(pagination.prev_disabled);
        assert!(!pagination.next_disabled);
        assert_eq!(controller.view().catalog_grid().cards().len(), 20);
        assert_eq!(controller.view().characters_count(), 20);
        assert!(!controller.view().is_loading());
        assert_eq!(controller.event_bus().count_of("CatalogPageLoaded"), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_renders_error_and_one_notification() {
        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_page()
            .times(1)
            .returning(|_| Err(FetchError::network("Catalog returned status: 500")));

        let mut controller = controller_with(source);
        let ticket = controller
            .handle(UiEvent::StatusFilterChanged(Some(CharacterStatus::Dead)))
            .unwrap();
        let query_before = controller.query().clone();

        assert!(controller.view().is_loading());
        controller.run(ticket).await;

        assert_eq!(controller.query(), &query_before);
        assert_eq!(controller.query().status_filter(), Some(CharacterStatus::Dead));
        assert!(controller.view().catalog_grid().is_error());
        assert_eq!(notifications_of(&controller, NotificationKind::Error), 1);
        assert_eq!(controller.outcome(), &CatalogOutcome::Failed);
        assert!(!controller.view().is_loading());
        assert_eq!(controller.event_bus().count_of("CatalogFetchFailed"), 1);
    }

    #[tokio::test]
    async fn test_retry_after_failure_recovers() {
        let mut source = MockCatalogSource::new();
        let mut calls = 0;
        source.expect_fetch_page().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(FetchError::network("timeout"))
            } else {
                Ok(page_of(1..=3, 1))
            }
        });

        let mut controller = controller_with(source);
        controller.load().await;
        assert!(controller.view().catalog_grid().is_error());

        controller.dispatch(UiEvent::Retry).await;
        assert_eq!(controller.view().catalog_grid().cards().len(), 3);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut controller = controller_with(MockCatalogSource::new());

        let first = controller.handle(UiEvent::NextPage);
        assert!(first.is_none(), "total pages unknown, cannot advance");

        let stale = controller
            .handle(UiEvent::SpeciesFilterChanged(Some("Alien".to_string())))
            .unwrap();
        let latest = controller
            .handle(UiEvent::StatusFilterChanged(Some(CharacterStatus::Alive)))
            .unwrap();
        assert!(latest.token > stale.token);

        assert!(!controller.complete_fetch(stale.clone(), Ok(page_of(100..=101, 9))));
        assert!(controller.view().is_loading(), "latest fetch still in flight");
        assert_eq!(controller.outcome(), &CatalogOutcome::NotLoaded);

        assert!(controller.complete_fetch(latest, Ok(page_of(1..=5, 2))));
        assert!(!controller.view().is_loading());
        assert_eq!(controller.query().total_pages(), 2);

        assert!(!controller.complete_fetch(stale, Err(FetchError::network("late"))));
        assert!(!controller.view().catalog_grid().is_error());
        assert_eq!(notifications_of(&controller, NotificationKind::Error), 0);
    }

    #[test]
    fn test_ticket_snapshots_query_at_trigger_time() {
        let mut controller = controller_with(MockCatalogSource::new());
        let ticket = controller
            .handle(UiEvent::SpeciesFilterChanged(Some("Robot".to_string())))
            .unwrap();
        controller.handle(UiEvent::ClearSearch);
        assert_eq!(ticket.query.species_filter(), Some("Robot"));
    }

    // ========================================================================
    // QUERY CHANGES
    // ========================================================================

    #[tokio::test]
    async fn test_filters_reset_page_and_boundaries_do_not_fetch() {
        let mut controller = loaded_controller().await;

        let ticket = controller.handle(UiEvent::NextPage).unwrap();
        assert_eq!(ticket.query.page(), 2);
        controller.complete_fetch(ticket, Ok(page_of(21..=40, 42)));
        assert_eq!(controller.view().pagination().label(), "2 / 42");

        let ticket = controller
            .handle(UiEvent::SpeciesFilterChanged(Some("Human".to_string())))
            .unwrap();
        assert_eq!(ticket.query.page(), 1);
        controller.complete_fetch(ticket, Ok(page_of(1..=20, 1)));

        assert!(controller.handle(UiEvent::NextPage).is_none());
        assert!(controller.handle(UiEvent::PrevPage).is_none());
        assert_eq!(controller.query().page(), 1);
        let pagination = controller.view().pagination();
        assert!(pagination.prev_disabled && pagination.next_disabled);
    }

    #[test]
    fn test_search_is_debounced() {
        let mut controller = controller_with(MockCatalogSource::new());
        let start = Instant::now();

        assert!(controller
            .handle_at(UiEvent::SearchInput("ri".to_string()), start)
            .is_none());
        assert!(controller
            .handle_at(
                UiEvent::SearchInput("rick".to_string()),
                start + Duration::from_millis(100)
            )
            .is_none());

        assert!(controller
            .poll_debounce(start + Duration::from_millis(399))
            .is_none());
        assert_eq!(controller.query().search_term(), "");

        let ticket = controller
            .poll_debounce(start + Duration::from_millis(400))
            .unwrap();
        assert_eq!(ticket.query.search_term(), "rick");
        assert_eq!(ticket.query.page(), 1);
        assert!(controller.debounce_deadline().is_none());
    }

    #[test]
    fn test_clear_search_fetches_immediately_and_drops_pending_input() {
        let mut controller = controller_with(MockCatalogSource::new());
        let start = Instant::now();
        controller.handle_at(UiEvent::SearchInput("morty".to_string()), start);

        let ticket = controller.handle_at(UiEvent::ClearSearch, start).unwrap();
        assert_eq!(ticket.query.search_term(), "");
        assert!(controller.poll_debounce(start + Duration::from_secs(1)).is_none());
    }

    // ========================================================================
    // FAVORITES
    // ========================================================================

    #[tokio::test]
    async fn test_toggle_emits_one_notification_each_way() {
        let mut controller = loaded_controller().await;

        assert!(controller.toggle_favorite(3).unwrap());
        assert_eq!(notifications_of(&controller, NotificationKind::Success), 1);
        assert_eq!(notifications_of(&controller, NotificationKind::Warning), 0);

        assert!(!controller.toggle_favorite(3).unwrap());
        assert_eq!(notifications_of(&controller, NotificationKind::Success), 1);
        assert_eq!(notifications_of(&controller, NotificationKind::Warning), 1);

        assert!(!controller.favorites().contains(3));
        assert_eq!(controller.view().favorites_count(), 0);
    }

    #[tokio::test]
    async fn test_toggle_updates_card_and_open_detail_together() {
        let mut controller = loaded_controller().await;

        controller.handle(UiEvent::CardClicked(7));
        controller.handle(UiEvent::FavoriteToggled(7));

        assert!(controller.view().catalog_grid().card(7).unwrap().favorited);
        let detail = controller.view().detail().unwrap();
        assert!(detail.favorited);
        assert_eq!(detail.toggle_label, REMOVE_FAVORITE_LABEL);
        assert!(controller.view().is_modal_open(), "toggle must not close or reopen the modal");
        assert!(!controller.view().catalog_grid().card(8).unwrap().favorited);
    }

    #[tokio::test]
    async fn test_toggle_on_card_does_not_open_detail() {
        let mut controller = loaded_controller().await;

        controller.handle(UiEvent::FavoriteToggled(5));

        assert!(controller.favorites().contains(5));
        assert!(!controller.view().is_modal_open());
        assert!(!controller.view().is_scroll_locked());
        assert!(controller.view().detail().is_none());
    }

    #[tokio::test]
    async fn test_long_session_keeps_event_log_bounded() {
        let mut controller = loaded_controller().await;

        for round in 0..2000u32 {
            let species = format!("species-{}", round);
            let ticket = controller
                .handle(UiEvent::SpeciesFilterChanged(Some(species)))
                .unwrap();
            controller.complete_fetch(ticket, Ok(page_of(1..=20, 42)));
            controller.handle(UiEvent::FavoriteToggled(1 + round % 20));
        }

        assert!(controller.event_bus().get_event_log().len() <= EVENT_LOG_CAPACITY);
        assert_eq!(controller.view().favorites_count(), controller.favorites().len());
    }

    #[tokio::test]
    async fn test_favorites_badge_follows_bus_events() {
        let mut controller = loaded_controller().await;

        controller.handle(UiEvent::FavoriteToggled(1));
        controller.handle(UiEvent::FavoriteToggled(2));
        assert_eq!(controller.view().favorites_count(), 2);

        controller.handle(UiEvent::FavoriteToggled(1));
        assert_eq!(controller.view().favorites_count(), 1);
        assert_eq!(controller.event_bus().count_of("FavoriteAdded"), 2);
        assert_eq!(controller.event_bus().count_of("FavoriteRemoved"), 1);
    }

    #[tokio::test]
    async fn test_favorites_tab_scenario() {
        let mut controller = loaded_controller().await;

        controller.handle(UiEvent::FavoriteToggled(2));
        assert!(controller.handle(UiEvent::SwitchTab(Tab::Favorites)).is_none());

        let cards = controller.view().favorites_grid().cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, 2);
        assert_eq!(controller.view().active_grid(), controller.view().favorites_grid());

        controller.handle(UiEvent::FavoriteToggled(2));
        assert_eq!(
            controller.view().favorites_grid(),
            &GridContent::Empty(Placeholder::no_favorites())
        );
        assert!(!controller.view().catalog_grid().card(2).unwrap().favorited);
    }

    #[tokio::test]
    async fn test_favorites_survive_without_catalog() {
        let mut controller = loaded_controller().await;
        controller.toggle_favorite(4).unwrap();

        // catalog moves on; favorite snapshot is still reachable
        let ticket = controller.handle(UiEvent::NextPage).unwrap();
        controller.complete_fetch(ticket, Ok(page_of(21..=40, 42)));
        controller.show_tab(Tab::Favorites);

        controller.handle(UiEvent::CardClicked(4));
        assert_eq!(controller.view().detail().unwrap().id(), 4);
        assert!(!controller.toggle_favorite(4).unwrap());
    }

    #[test]
    fn test_toggle_unknown_character_is_not_found() {
        let mut controller = controller_with(MockCatalogSource::new());
        assert!(controller.toggle_favorite(999).is_err());
        assert!(controller.view().notifications().is_empty());
    }

    // ========================================================================
    // TABS & MODAL
    // ========================================================================

    #[tokio::test]
    async fn test_switching_back_to_catalog_reuses_results() {
        let mut controller = loaded_controller().await;
        controller.show_tab(Tab::Favorites);
        let before = controller.view().catalog_grid().clone();

        assert!(controller.handle(UiEvent::SwitchTab(Tab::Catalog)).is_none());
        assert_eq!(controller.view().catalog_grid(), &before);
        assert_eq!(controller.view().active_tab(), Tab::Catalog);
    }

    #[tokio::test]
    async fn test_modal_open_and_close_paths() {
        let mut controller = loaded_controller().await;

        assert!(!controller.close_modal());

        controller.handle(UiEvent::CardClicked(1));
        assert!(controller.view().is_modal_open());
        assert!(controller.view().is_scroll_locked());

        controller.handle(UiEvent::KeyPressed(Key::Escape));
        assert!(!controller.view().is_modal_open());
        assert!(!controller.view().is_scroll_locked());

        controller.handle(UiEvent::CardClicked(1));
        controller.handle(UiEvent::OverlayClicked);
        assert!(!controller.view().is_modal_open());

        controller.handle(UiEvent::CardClicked(1));
        controller.handle(UiEvent::CloseClicked);
        assert!(!controller.view().is_modal_open());
    }

    #[tokio::test]
    async fn test_notifications_expire() {
        let mut controller = loaded_controller().await;
        controller.toggle_favorite(1).unwrap();
        let deadline = controller.next_notification_deadline().unwrap();

        assert_eq!(controller.dismiss_expired(deadline), 1);
        assert!(controller.view().notifications().is_empty());
    }
}
