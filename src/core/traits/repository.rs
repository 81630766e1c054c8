use async_trait::async_trait;

use crate::core::error::StoreResult;

/// Base repository trait for CRUD operations over string-keyed records.
///
/// Every method maps onto exactly one store operation. Absent records are
/// reported as `None` / `false`, never as errors.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// Mutable portion of `T` replaced by `update`
    type Changes: Send + 'static;

    /// List all entities in insertion order
    async fn list(&self) -> StoreResult<Vec<T>>;

    /// Find entity by ID
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<T>>;

    /// Insert a new entity; the entity already carries its ID
    async fn insert(&self, entity: T) -> StoreResult<T>;

    /// Overwrite the mutable fields of an entity, returning the post-update state
    async fn update(&self, id: &str, changes: Self::Changes) -> StoreResult<Option<T>>;

    /// Delete an entity by ID, returning whether a record was removed
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}
