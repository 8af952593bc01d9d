// src/application/fetcher.rs
//
// Background catalog fetches
//
// RULES:
// - Every spawned fetch reports exactly one completion, even if it panics
// - The controller alone decides whether a completion is applied

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::domain::FetchResult;
use crate::error::FetchError;
use crate::integrations::CatalogSource;

use super::controller::FetchTicket;

pub type FetchCompletion = (FetchTicket, Result<FetchResult, FetchError>);

/// Runs `ticket` on a separate task and sends its outcome to `completions`
pub fn spawn_fetch(
    source: Arc<dyn CatalogSource>,
    ticket: FetchTicket,
    completions: &UnboundedSender<FetchCompletion>,
) -> JoinHandle<()> {
    let completions = completions.clone();

    tokio::spawn(async move {
        let query = ticket.query.clone();
        let fetch = tokio::spawn(async move { source.fetch_page(&query).await });

        let result = match fetch.await {
            Ok(result) => result,
            Err(e) => {
                log::error!("Fetch #{} aborted: {}", ticket.token, e);
                Err(FetchError::network(format!("fetch task aborted: {}", e)))
            }
        };

        if completions.send((ticket, result)).is_err() {
            log::debug!("Shell closed before fetch completed");
        }
    })
}
