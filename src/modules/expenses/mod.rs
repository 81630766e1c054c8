// Expenses module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Expense, ExpenseFields, ExpensePayload};
pub use repositories::{ExpenseRepository, InMemoryExpenseRepository, MySqlExpenseRepository};
pub use services::ExpenseService;
