use async_trait::async_trait;
use models::Tree;

use crate::errors::ServiceError;

/// Trait abstraction for the tree key-value backend.
/// Implementations can be file-backed, database-backed, or remote KV.
///
/// Contract:
/// - `get` returns `Ok(None)` for an absent key; only I/O failures error.
/// - `set` replaces any prior value under the key wholesale.
/// - `delete` is a no-op for an absent key, never an error.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, namespace: &str, id: &str) -> Result<Option<Tree>, ServiceError>;
    async fn set(&self, namespace: &str, id: &str, value: Tree) -> Result<(), ServiceError>;
    async fn delete(&self, namespace: &str, id: &str) -> Result<(), ServiceError>;
}
