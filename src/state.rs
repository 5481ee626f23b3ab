use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::models::Snapshot;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Shared application state: the API client plus the last snapshot fetched
/// from the backend. The snapshot is a disposable mirror; it is only ever
/// replaced wholesale, never patched.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    snapshot: Arc<Mutex<Snapshot>>,
}

impl AppState {
    /// Starts with an empty snapshot so rendering degrades to zero counts
    /// until the first successful load.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            snapshot: Arc::new(Mutex::new(Snapshot::default())),
        }
    }

    /// Fetch a fresh snapshot and swap it in atomically. On failure the
    /// previous snapshot stays in place untouched.
    pub async fn reload(&self) -> Result<(), ApiError> {
        let fresh = self.api.fetch_snapshot().await?;
        debug!(
            tenants = fresh.tenants.len(),
            properties = fresh.properties.len(),
            payments = fresh.payments.len(),
            "snapshot reloaded"
        );
        *self.snapshot.lock().await = fresh;
        Ok(())
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.snapshot.lock().await.clone()
    }
}
