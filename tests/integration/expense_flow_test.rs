// End-to-end expense flow over a real HTTP connection
//
// Starts the full application with actix-test on a random port and talks to
// it with awc, the way an external client would.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use actix_web::{middleware::NormalizePath, web, App};
use expense_service::expenses::{ExpenseService, InMemoryExpenseRepository};
use expense_service::middleware::RequestId;
use expense_service::modules;
use helpers::*;
use serde_json::{json, Value};

fn spawn_server() -> actix_test::TestServer {
    let service = Arc::new(ExpenseService::new(Arc::new(
        InMemoryExpenseRepository::new(),
    )));

    actix_test::start(move || {
        App::new()
            .wrap(RequestId)
            .wrap(NormalizePath::trim())
            .app_data(web::Data::new(service.clone()))
            .configure(modules::configure)
    })
}

#[actix_web::test]
async fn test_full_crud_lifecycle() {
    let srv = spawn_server();

    // Create
    let mut resp = srv
        .post("/api/expenses")
        .send_json(&json!({ "title": "Coffee", "amount": 4.5 }))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);
    let created: Value = resp.json().await.unwrap();
    let id = assert_expense(&created["savedExpense"], "Coffee", 4.5);

    // Read
    let mut resp = srv
        .get(format!("/api/expenses/{}", id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let fetched: Value = resp.json().await.unwrap();
    assert_expense(&fetched["expense"], "Coffee", 4.5);

    // Update
    let mut resp = srv
        .put(format!("/api/expenses/{}", id))
        .send_json(&json!({ "title": "Lunch", "amount": 12 }))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(assert_expense(&updated, "Lunch", 12.0), id);

    // List
    let mut resp = srv.get("/api/expenses").send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let listed: Value = resp.json().await.unwrap();
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    // Delete
    let mut resp = srv
        .delete(format!("/api/expenses/{}", id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let deleted: Value = resp.json().await.unwrap();
    assert_message(&deleted, "Expense deleted successfully");

    // Gone
    let mut resp = srv
        .get(format!("/api/expenses/{}", id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
    let missing: Value = resp.json().await.unwrap();
    assert_message(&missing, "Expense not found");
}

#[actix_web::test]
async fn test_malformed_body_rejected_before_handler() {
    let srv = spawn_server();

    let mut resp = srv
        .post("/api/expenses")
        .insert_header(("Content-Type", "application/json"))
        .send_body("{\"title\": \"Coffee\", ")
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));
}

#[actix_web::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let srv = spawn_server();

    let requests = (0..10).map(|i| {
        srv.post("/api/expenses")
            .send_json(&TestDataFactory::expense_payload(&format!("item-{}", i), i as f64))
    });
    let responses = futures_util::future::join_all(requests).await;

    let mut ids = Vec::new();
    for resp in responses {
        let mut resp = resp.unwrap();
        assert_eq!(resp.status().as_u16(), 201);
        let body: Value = resp.json().await.unwrap();
        ids.push(body["savedExpense"]["id"].as_str().unwrap().to_string());
    }

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10);

    let mut resp = srv.get("/api/expenses").send().await.unwrap();
    let listed: Value = resp.json().await.unwrap();
    assert_eq!(listed.as_array().map(Vec::len), Some(10));
}
