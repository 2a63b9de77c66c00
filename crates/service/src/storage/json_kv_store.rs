use std::{collections::HashMap, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use models::Tree;
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;
use crate::storage::kv::KvStore;

/// JSON file-backed key-value store for tree records.
///
/// Keeps the whole map in memory behind an `RwLock` and rewrites the file
/// after each mutation, so a `set` either lands wholesale or not at all.
/// Intended for lightweight state where a hosted store is overkill; the
/// handle is opened once at startup and shared by every request.
#[derive(Clone)]
pub struct JsonKvStore {
    inner: Arc<RwLock<HashMap<String, Tree>>>,
    file_path: PathBuf,
}

/// Flatten the composite `(namespace, id)` key into the string form used
/// for the on-disk JSON object, where keys must be strings.
fn flat_key(namespace: &str, id: &str) -> String {
    format!("{}/{}", namespace, id)
}

impl JsonKvStore {
    /// Open the store at a path. Creates the file with an empty map if missing.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let map: HashMap<String, Tree> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => {
                let empty: HashMap<String, Tree> = HashMap::new();
                fs::write(&file_path, serde_json::to_vec(&empty).map_err(ServiceError::storage)?)
                    .await
                    .map_err(ServiceError::storage)?;
                empty
            }
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(map)), file_path }))
    }

    async fn save(&self) -> Result<(), ServiceError> {
        let map = self.inner.read().await;
        let data = serde_json::to_vec(&*map).map_err(ServiceError::storage)?;
        fs::write(&self.file_path, data).await.map_err(ServiceError::storage)?;
        Ok(())
    }

    /// Number of records currently held, across all namespaces.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl KvStore for JsonKvStore {
    async fn get(&self, namespace: &str, id: &str) -> Result<Option<Tree>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.get(&flat_key(namespace, id)).cloned())
    }

    async fn set(&self, namespace: &str, id: &str, value: Tree) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        map.insert(flat_key(namespace, id), value);
        drop(map);
        self.save().await
    }

    async fn delete(&self, namespace: &str, id: &str) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        let existed = map.remove(&flat_key(namespace, id)).is_some();
        drop(map);
        if existed {
            self.save().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, species: &str) -> Tree {
        Tree {
            id: Some(id.to_string()),
            species: Some(species.to_string()),
            age: Some(3.0),
            location: Some("The Park".to_string()),
        }
    }

    #[tokio::test]
    async fn set_get_delete_round_trip() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_kv_store_{}.json", uuid::Uuid::new_v4()));
        let store = JsonKvStore::open(&tmp).await?;

        // initially empty
        assert!(store.is_empty().await);
        assert_eq!(store.get("trees", "3").await?, None);

        // set then get returns a deep-equal value
        let oak = sample("3", "oak");
        store.set("trees", "3", oak.clone()).await?;
        assert_eq!(store.get("trees", "3").await?, Some(oak.clone()));

        // set replaces wholesale
        let elm = sample("3", "elm");
        store.set("trees", "3", elm.clone()).await?;
        assert_eq!(store.get("trees", "3").await?, Some(elm));
        assert_eq!(store.len().await, 1);

        // delete removes, and deleting an absent key is not an error
        store.delete("trees", "3").await?;
        assert_eq!(store.get("trees", "3").await?, None);
        store.delete("trees", "3").await?;
        store.delete("trees", "never-existed").await?;

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn persists_across_reopen() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_kv_store_{}.json", uuid::Uuid::new_v4()));
        let store = JsonKvStore::open(&tmp).await?;
        store.set("trees", "a", sample("a", "birch")).await?;
        store.set("trees", "b", sample("b", "pine")).await?;
        store.delete("trees", "b").await?;

        let reopened = JsonKvStore::open(&tmp).await?;
        assert_eq!(reopened.len().await, 1);
        let got = reopened.get("trees", "a").await?.expect("record survives reopen");
        assert_eq!(got.species.as_deref(), Some("birch"));
        assert_eq!(reopened.get("trees", "b").await?, None);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn namespaces_do_not_collide() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_kv_store_{}.json", uuid::Uuid::new_v4()));
        let store = JsonKvStore::open(&tmp).await?;
        store.set("trees", "1", sample("1", "oak")).await?;
        assert_eq!(store.get("shrubs", "1").await?, None);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
