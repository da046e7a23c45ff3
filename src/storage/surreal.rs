use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use surrealdb::{
    Surreal,
    engine::local::{Db, SurrealKv},
};
use tracing::info;

use super::KeyValueStore;
use crate::{
    consts::storage_const::{LOCAL_STORAGE_TABLE, SURREAL_DATABASE, SURREAL_NAMESPACE},
    errors::Result,
};

#[derive(Deserialize, Serialize, Debug, Clone)]
struct StoredValue {
    value: String,
}

/// Embedded SurrealDB, one record per key in the `local_storage` table.
#[derive(Debug, Clone)]
pub struct SurrealStore {
    sdb: Surreal<Db>,
}

impl SurrealStore {
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self> {
        let sdb = Surreal::new::<surrealdb::engine::local::Mem>(()).await?;
        Self::select_scope(sdb).await
    }

    /// Opens (or creates) a SurrealKV database file on this device.
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let sdb = Surreal::new::<SurrealKv>(path.to_string_lossy().into_owned()).await?;
        info!("Opened local storage at {}", path.display());
        Self::select_scope(sdb).await
    }

    async fn select_scope(sdb: Surreal<Db>) -> Result<Self> {
        sdb.use_ns(SURREAL_NAMESPACE)
            .use_db(SURREAL_DATABASE)
            .await?;
        Ok(Self { sdb })
    }
}

#[async_trait]
impl KeyValueStore for SurrealStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let stored: Option<StoredValue> = self
            .sdb
            .select((LOCAL_STORAGE_TABLE, key.to_string()))
            .await?;
        Ok(stored.map(|s| s.value))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let _: Option<StoredValue> = self
            .sdb
            .upsert((LOCAL_STORAGE_TABLE, key.to_string()))
            .content(StoredValue { value })
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        models::invitation::EventType,
        storage::{
            InvitationStore,
            test_support::{record_for, wedding_record},
        },
    };

    #[tokio::test]
    async fn stores_and_overwrites_values() {
        let store = SurrealStore::in_memory().await.unwrap();

        assert_eq!(store.get("invitation_a").await.unwrap(), None);
        store.set("invitation_a", "one".into()).await.unwrap();
        store.set("invitation_a", "two".into()).await.unwrap();

        assert_eq!(store.get("invitation_a").await.unwrap().as_deref(), Some("two"));
    }

    #[tokio::test]
    async fn file_backed_store_round_trips_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("eventcraft.db");
        let record = wedding_record("persisted1");

        let store = InvitationStore::new(Arc::new(SurrealStore::open(&path).await.unwrap()));
        store.save(&record).await.unwrap();

        assert!(path.exists());
        assert_eq!(store.load("persisted1").await.unwrap(), Some(record));
        assert_eq!(store.load("persisted2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn every_event_type_round_trips_through_surreal() {
        let store = InvitationStore::new(Arc::new(SurrealStore::in_memory().await.unwrap()));

        for event_type in EventType::ALL {
            let record = record_for(event_type, event_type.as_str());
            store.save(&record).await.unwrap();
            assert_eq!(store.load(event_type.as_str()).await.unwrap(), Some(record));
        }
    }
}
