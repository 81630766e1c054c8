pub mod expense_repository;
pub mod in_memory;

pub use expense_repository::{ExpenseRepository, MySqlExpenseRepository};
pub use in_memory::InMemoryExpenseRepository;

use std::sync::Arc;

use crate::config::{DatabaseConfig, StoreBackend};
use crate::core::error::StoreResult;

/// Acquire the store selected by `config.backend`
pub async fn connect_store(config: &DatabaseConfig) -> StoreResult<Arc<dyn ExpenseRepository>> {
    match config.backend {
        StoreBackend::MySql => {
            let repository = MySqlExpenseRepository::connect(config).await?;
            Ok(Arc::new(repository))
        }
        StoreBackend::Memory => Ok(Arc::new(InMemoryExpenseRepository::new())),
    }
}
