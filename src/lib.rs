pub mod config;
pub mod records;
pub mod rest;

use std::sync::Arc;

use config::ServiceConfig;
use records::store::RecordStore;

/// Shared application state passed to every route handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServiceConfig>,
    /// The in-memory record registry. All reads and writes go through here.
    pub records: Arc<RecordStore>,
    pub started_at: std::time::Instant,
}

impl AppContext {
    /// Build a context with the seed records loaded, ready to serve.
    pub fn new(config: Arc<ServiceConfig>) -> Self {
        Self {
            config,
            records: Arc::new(RecordStore::with_seed_data()),
            started_at: std::time::Instant::now(),
        }
    }
}
