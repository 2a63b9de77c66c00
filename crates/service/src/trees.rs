use std::sync::Arc;

use models::Tree;
use tracing::debug;

use crate::errors::ServiceError;
use crate::storage::{JsonKvStore, KvStore};

/// Namespace segment under which all tree records are keyed.
pub const TREES_NAMESPACE: &str = "trees";

/// Store facade for tree records.
/// Pins the `"trees"` namespace so handlers only deal in ids.
#[derive(Clone)]
pub struct TreeStore {
    store: Arc<dyn KvStore>,
}

impl TreeStore {
    /// Open a file-backed store at the given path. Creates the file if missing.
    pub async fn open<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonKvStore::open(path).await?;
        Ok(Arc::new(Self { store }))
    }

    /// Fetch the record for an id, `None` if absent.
    pub async fn get(&self, id: &str) -> Result<Option<Tree>, ServiceError> {
        self.store.get(TREES_NAMESPACE, id).await
    }

    /// Upsert the record for an id, replacing any prior value.
    pub async fn set(&self, id: &str, tree: Tree) -> Result<(), ServiceError> {
        debug!(id, species = tree.species_label(), "storing tree record");
        self.store.set(TREES_NAMESPACE, id, tree).await
    }

    /// Remove the record for an id; absent ids are a silent no-op.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.store.delete(TREES_NAMESPACE, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tree_store_basic_crud() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("tree_store_{}.json", uuid::Uuid::new_v4()));
        let store = TreeStore::open(&tmp).await?;

        assert!(store.get("3").await?.is_none());

        let oak = Tree {
            id: Some("3".into()),
            species: Some("oak".into()),
            age: Some(3.0),
            location: Some("The Park".into()),
        };
        store.set("3", oak.clone()).await?;
        assert_eq!(store.get("3").await?, Some(oak));

        // delete is idempotent
        store.delete("3").await?;
        store.delete("3").await?;
        assert!(store.get("3").await?.is_none());

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn partial_records_are_stored_as_is() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("tree_store_{}.json", uuid::Uuid::new_v4()));
        let store = TreeStore::open(&tmp).await?;

        // lenient policy: a record with missing fields is persisted untouched
        let bare = Tree { id: Some("9".into()), ..Tree::default() };
        store.set("9", bare.clone()).await?;
        let got = store.get("9").await?.expect("stored");
        assert_eq!(got, bare);
        assert!(got.species.is_none());

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
