use crate::error::ApiError;
use crate::store::{SharedStore, Store};
use actix_web::web;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: impl Store + 'static) -> Self {
        Self {
            store: Arc::new(Mutex::new(Box::new(store))),
        }
    }

    /// Runs `f` against the store on actix's blocking pool. Diesel calls are
    /// synchronous and must not hold up the worker's event loop.
    pub async fn with_store<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut dyn Store) -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        web::block(move || {
            let mut guard = store.blocking_lock();
            f(&mut **guard)
        })
        .await
        .map_err(|e| ApiError::Unexpected(eyre::Report::new(e)))?
    }
}
