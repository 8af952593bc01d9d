// src/application/bootstrap.rs
//
// Application wiring
//
// Order:
// 1. Infrastructure (event bus, storage)
// 2. Repositories
// 3. Services
// 4. Controller

use std::path::Path;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::{
    create_connection_pool, get_connection, initialize_database, verify_database_integrity,
};
use crate::error::AppResult;
use crate::events::create_event_bus;
use crate::integrations::{CatalogClient, CatalogSource};
use crate::repositories::{
    InMemoryKeyValueRepository, KeyValueRepository, SqliteKeyValueRepository,
};
use crate::services::FavoritesStore;
use crate::view::NotificationKind;

use super::controller::CatalogController;
use super::error_handling::app_error_message;

/// Opens the SQLite-backed favorites slot at `db_path`
pub fn open_sqlite_repository(db_path: &Path) -> AppResult<Arc<dyn KeyValueRepository>> {
    let pool = Arc::new(create_connection_pool(db_path)?);

    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn)?;
    }

    Ok(Arc::new(SqliteKeyValueRepository::new(pool)))
}

fn memory_repository() -> Arc<dyn KeyValueRepository> {
    Arc::new(InMemoryKeyValueRepository::new())
}

/// Wires storage, catalog client, event bus and favorites into a controller.
///
/// Storage falls back to memory when no path is configured or the database
/// cannot be opened; favorites then last for the session only and the user is
/// told so with a warning notification.
pub fn build_controller(config: &AppConfig) -> AppResult<CatalogController> {
    let event_bus = Arc::new(create_event_bus());

    let (repo, storage_error) = match config.database_path.as_deref() {
        Some(path) => match open_sqlite_repository(path) {
            Ok(repo) => (repo, None),
            Err(e) => {
                log::warn!("Cannot open database at {}: {}", path.display(), e);
                (memory_repository(), Some(e))
            }
        },
        None => {
            log::warn!("No database path configured, favorites will not be persisted");
            (memory_repository(), None)
        }
    };

    let source: Arc<dyn CatalogSource> = Arc::new(CatalogClient::new(
        config.api_base_url.clone(),
        config.request_timeout,
    )?);

    let favorites = FavoritesStore::load(repo, config.favorites_key.clone(), event_bus.clone());

    log::info!("Catalog source: {}", config.api_base_url);

    let mut controller = CatalogController::new(source, favorites, event_bus, config);
    if let Some(e) = storage_error {
        controller.notify(app_error_message(&e), NotificationKind::Warning);
    }

    Ok(controller)
}
