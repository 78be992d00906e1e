use std::sync::Arc;

use axum::extract::FromRef;
use tokio::sync::RwLock;

use crate::{config::Config, store::Store};

/// Store handle shared by every handler.
/// Mutating handlers hold the write guard for their whole check-then-mutate sequence.
pub type SharedStore = Arc<RwLock<Store>>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Store, config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config,
        }
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
