use std::sync::Arc;

use crate::core::error::{AppError, StoreResult};
use crate::core::traits::{Repository, StoreLifecycle};
use crate::modules::expenses::models::{Expense, ExpensePayload};
use crate::modules::expenses::repositories::ExpenseRepository;

pub const EXPENSE_NOT_FOUND: &str = "Expense not found";
pub const FETCH_ALL_FAILED: &str = "Failed to fetch expenses";
pub const FETCH_FAILED: &str = "Failed to fetch expense";
pub const CREATE_FAILED: &str = "Failed to create expense";
pub const UPDATE_FAILED: &str = "Failed to update expense";
pub const DELETE_FAILED: &str = "Failed to delete expense";

/// Service for expense record operations
///
/// Each method performs exactly one store call. Store errors collapse into
/// `AppError::Store` with a fixed per-operation message; absent records
/// become `AppError::NotFound`.
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepository>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_expenses(&self) -> Result<Vec<Expense>, AppError> {
        self.repository
            .list()
            .await
            .map_err(|e| AppError::store(FETCH_ALL_FAILED, e))
    }

    pub async fn get_expense(&self, id: &str) -> Result<Expense, AppError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| AppError::store(FETCH_FAILED, e))?
            .ok_or_else(|| AppError::not_found(EXPENSE_NOT_FOUND))
    }

    pub async fn create_expense(&self, payload: ExpensePayload) -> Result<Expense, AppError> {
        let expense = Expense::new(payload.validate()?);

        let saved = self
            .repository
            .insert(expense)
            .await
            .map_err(|e| AppError::store(CREATE_FAILED, e))?;

        tracing::info!(expense_id = %saved.id, "Expense created");
        Ok(saved)
    }

    /// Full replacement of title and amount
    pub async fn update_expense(
        &self,
        id: &str,
        payload: ExpensePayload,
    ) -> Result<Expense, AppError> {
        let fields = payload.validate()?;

        let updated = self
            .repository
            .update(id, fields)
            .await
            .map_err(|e| AppError::store(UPDATE_FAILED, e))?
            .ok_or_else(|| AppError::not_found(EXPENSE_NOT_FOUND))?;

        tracing::info!(expense_id = %updated.id, "Expense updated");
        Ok(updated)
    }

    pub async fn delete_expense(&self, id: &str) -> Result<(), AppError> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(|e| AppError::store(DELETE_FAILED, e))?;

        if !removed {
            return Err(AppError::not_found(EXPENSE_NOT_FOUND));
        }

        tracing::info!(expense_id = %id, "Expense deleted");
        Ok(())
    }

    pub fn backend(&self) -> &'static str {
        self.repository.backend()
    }

    pub async fn ping(&self) -> StoreResult<()> {
        self.repository.ping().await
    }

    /// Release the underlying store. The service must not be used afterwards.
    pub async fn shutdown(&self) {
        tracing::info!(backend = self.backend(), "Closing expense store");
        self.repository.close().await;
    }
}
