use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::AppError;

/// Expense record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount: f64,
}

impl Expense {
    /// Build a new record with a freshly generated id
    pub fn new(fields: ExpenseFields) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: fields.title,
            amount: fields.amount,
        }
    }

    /// Replace title and amount; the id is left untouched
    pub fn apply(&mut self, fields: ExpenseFields) {
        self.title = fields.title;
        self.amount = fields.amount;
    }
}

/// Mutable fields of an expense after validation
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFields {
    pub title: String,
    pub amount: f64,
}

/// Request body for create and update.
///
/// Both fields are optional at the deserialization layer so that a missing
/// field is reported by [`ExpensePayload::validate`] with a readable message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpensePayload {
    pub title: Option<String>,
    pub amount: Option<f64>,
}

impl ExpensePayload {
    pub fn validate(self) -> Result<ExpenseFields, AppError> {
        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title,
            Some(_) => return Err(AppError::validation("title must not be empty")),
            None => return Err(AppError::validation("title is required")),
        };

        let amount = match self.amount {
            Some(amount) if amount.is_finite() => amount,
            Some(_) => return Err(AppError::validation("amount must be a finite number")),
            None => return Err(AppError::validation("amount is required")),
        };

        Ok(ExpenseFields { title, amount })
    }
}

/// Response body for GET /api/expenses/{id}
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpenseEnvelope {
    pub expense: Expense,
}

/// Response body for POST /api/expenses
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedExpenseResponse {
    pub message: String,
    pub saved_expense: Expense,
}

/// Plain `{message}` response body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
