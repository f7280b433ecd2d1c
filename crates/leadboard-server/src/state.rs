use crate::error::ApiError;
use leadboard_store::error::StoreError;
use leadboard_store::LeadStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    store: Arc<LeadStore>,
}

impl AppState {
    pub fn new(store: Arc<LeadStore>) -> Self {
        Self { store }
    }

    /// Runs a store operation on the blocking pool. `context` is the message
    /// returned to the client if the store faults.
    pub async fn run<T, F>(&self, context: &'static str, op: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&LeadStore) -> Result<T, StoreError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        match tokio::task::spawn_blocking(move || op(&store)).await {
            Ok(result) => result.map_err(|err| ApiError::from_store(context, err)),
            Err(err) => Err(ApiError::internal(context, err)),
        }
    }
}
