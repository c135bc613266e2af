//! Application state

use crate::config::Config;
use crate::store::ComplaintStore;

/// Shared application state, one instance per process
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: ComplaintStore,
}

impl AppState {
    pub fn new(store: ComplaintStore) -> Self {
        Self { store }
    }

    /// Build the store described by `config`
    pub fn from_config(config: &Config) -> Self {
        let mut store = ComplaintStore::new(config.org_credentials.clone());
        if config.seed_mock_data {
            store = store.with_mock_data();
        }
        tracing::info!(
            complaints = store.len(),
            organizations = config.org_credentials.len(),
            "Complaint store ready"
        );
        Self::new(store)
    }
}
