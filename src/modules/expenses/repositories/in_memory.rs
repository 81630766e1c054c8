use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::{StoreError, StoreResult};
use crate::core::traits::{Repository, StoreLifecycle};
use crate::modules::expenses::models::{Expense, ExpenseFields};

/// Process-local expense store, kept in insertion order.
///
/// Used for local development (`STORE_BACKEND=memory`) and tests. Nothing
/// survives a restart.
#[derive(Default)]
pub struct InMemoryExpenseRepository {
    expenses: RwLock<Vec<Expense>>,
}

impl InMemoryExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.expenses.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.expenses.read().await.is_empty()
    }
}

#[async_trait]
impl Repository<Expense> for InMemoryExpenseRepository {
    type Changes = ExpenseFields;

    async fn list(&self) -> StoreResult<Vec<Expense>> {
        Ok(self.expenses.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Expense>> {
        let expenses = self.expenses.read().await;
        Ok(expenses.iter().find(|e| e.id == id).cloned())
    }

    async fn insert(&self, expense: Expense) -> StoreResult<Expense> {
        let mut expenses = self.expenses.write().await;
        if expenses.iter().any(|e| e.id == expense.id) {
            return Err(StoreError::DuplicateId(expense.id));
        }
        expenses.push(expense.clone());
        Ok(expense)
    }

    async fn update(&self, id: &str, changes: ExpenseFields) -> StoreResult<Option<Expense>> {
        let mut expenses = self.expenses.write().await;
        Ok(expenses.iter_mut().find(|e| e.id == id).map(|expense| {
            expense.apply(changes);
            expense.clone()
        }))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut expenses = self.expenses.write().await;
        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        Ok(expenses.len() < before)
    }
}

#[async_trait]
impl StoreLifecycle for InMemoryExpenseRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn close(&self) {
        let count = self.len().await;
        tracing::debug!(records = count, "Discarding in-memory expense store");
    }
}
