// src/application/error_handling.rs
//
// Error → user-facing message mapping
//
// ARCHITECTURE:
// - Maps internal errors → short messages for notifications
// - Never exposes internal details to the user
// - Full errors go to the log

use crate::error::{AppError, FetchError};

pub const FETCH_FAILED_MESSAGE: &str = "Oops! Something went wrong while loading the characters";

/// Notification text for a failed catalog request
pub fn fetch_failure_message(error: &FetchError) -> String {
    log::warn!("Catalog fetch failed: {}", error);
    FETCH_FAILED_MESSAGE.to_string()
}

/// Notification text for a storage or bootstrap problem
pub fn app_error_message(error: &AppError) -> String {
    log::warn!("Application error: {}", error);
    match error {
        AppError::Database(_) | AppError::Pool(_) => {
            "Favorites storage is unavailable; changes will not be saved".to_string()
        }
        AppError::Io(_) => "Could not access the data directory".to_string(),
        AppError::Fetch(e) => fetch_failure_message(e),
        AppError::Serialization(_) | AppError::Domain(_) | AppError::Other(_) => {
            "Something unexpected happened".to_string()
        }
    }
}
