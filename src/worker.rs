//! Background execution of a single search so a modal host stays
//! responsive. One job per user action; the consuming `join` delivers the
//! outcome exactly once.

use crate::api::DigikeyApi;
use crate::digikey_models::SearchResults;
use crate::error::{Error, Result};
use crate::search::KeywordRequest;
use crate::session::Session;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Handle to one in-flight search. Dropped without `join`, the search still
/// runs to completion but its outcome is discarded.
pub struct SearchJob {
    handle: JoinHandle<Result<SearchResults>>,
}

/// Spawns one keyword search on the runtime. The session is shared behind a
/// lock because the token cache may be refreshed mid-search; the host's
/// modal flow guarantees at most one job per session is in flight.
pub fn spawn_search(
    api: DigikeyApi,
    session: Arc<Mutex<Session>>,
    request: KeywordRequest,
) -> SearchJob {
    let handle = tokio::spawn(async move {
        let mut session = session.lock().await;
        api.keyword_search(&mut session, &request).await
    });
    SearchJob { handle }
}

impl SearchJob {
    /// Waits for the search to finish. An `Err` means the call failed (and
    /// is distinct from a successful search that matched nothing).
    pub async fn join(self) -> Result<SearchResults> {
        self.handle
            .await
            .map_err(|e| Error::WorkerError(e.to_string()))?
    }
}
