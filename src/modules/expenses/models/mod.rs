mod expense;

pub use expense::{
    CreatedExpenseResponse, Expense, ExpenseEnvelope, ExpenseFields, ExpensePayload,
    MessageResponse,
};
