// Test Data Factory
//
// Generates request payloads for expense tests.

use serde_json::{json, Value};
use uuid::Uuid;

/// Test data factory for generating expense payloads
pub struct TestDataFactory;

impl TestDataFactory {
    /// Unique title with a TEST prefix
    pub fn random_title() -> String {
        format!("TEST-{}", Uuid::new_v4())
    }

    /// Payload with the given title and amount
    pub fn expense_payload(title: &str, amount: f64) -> Value {
        json!({ "title": title, "amount": amount })
    }

    /// Payload with a unique title
    pub fn random_expense_payload() -> Value {
        Self::expense_payload(&Self::random_title(), 19.99)
    }

    /// An id that was never inserted
    pub fn unknown_id() -> String {
        Uuid::new_v4().to_string()
    }
}
