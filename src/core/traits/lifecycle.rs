use async_trait::async_trait;

use crate::core::error::StoreResult;

/// Acquisition/shutdown hooks for a shared store handle
#[async_trait]
pub trait StoreLifecycle: Send + Sync {
    /// Short name used in logs and readiness output
    fn backend(&self) -> &'static str;

    /// Check the store can serve requests
    async fn ping(&self) -> StoreResult<()>;

    /// Release pooled connections. Called once, after the server stops.
    async fn close(&self);
}
