use std::sync::Arc;

use crate::{
    config::{Config, StorageBackend},
    errors::Result,
    storage::{InvitationStore, KeyValueStore, MemoryStore, SurrealStore},
};

#[derive(Clone)]
pub struct AppState {
    pub store: InvitationStore,
    /// Base of shareable invitation links.
    pub public_url: String,
}

impl AppState {
    pub async fn init(config: &Config) -> Result<Self> {
        let backend: Arc<dyn KeyValueStore> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(MemoryStore::default()),
            StorageBackend::SurrealKv => Arc::new(SurrealStore::open(&config.storage.path).await?),
        };

        Ok(Self::new(InvitationStore::new(backend), config.public_url()))
    }

    pub fn new(store: InvitationStore, public_url: String) -> Self {
        Self { store, public_url }
    }
}
