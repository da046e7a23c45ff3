//! Device-local persistence for invitations.
//!
//! [`KeyValueStore`] is the raw string-keyed storage shim; [`InvitationStore`]
//! namespaces keys and (de)serializes [`InvitationRecord`]s on top of it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
    consts::storage_const::INVITATION_KEY_PREFIX, errors::Result,
    models::invitation::InvitationRecord,
};

pub mod memory;
pub mod surreal;

pub use memory::MemoryStore;
pub use surreal::SurrealStore;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value`, replacing whatever was stored under `key`.
    async fn set(&self, key: &str, value: String) -> Result<()>;
}

#[derive(Clone)]
pub struct InvitationStore {
    backend: Arc<dyn KeyValueStore>,
}

impl InvitationStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    pub fn storage_key(id: &str) -> String {
        format!("{INVITATION_KEY_PREFIX}{id}")
    }

    pub async fn save(&self, record: &InvitationRecord) -> Result<()> {
        let value = serde_json::to_string(record)?;
        self.backend.set(&Self::storage_key(&record.id), value).await?;
        debug!("Saved invitation {}", record.id);
        Ok(())
    }

    /// Missing keys and values that no longer parse both come back as `None`.
    pub async fn load(&self, id: &str) -> Result<Option<InvitationRecord>> {
        let key = Self::storage_key(id);
        let Some(raw) = self.backend.get(&key).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<InvitationRecord>(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(error) => {
                warn!("Ignoring unreadable value under {key}: {error}");
                Ok(None)
            }
        }
    }
}
