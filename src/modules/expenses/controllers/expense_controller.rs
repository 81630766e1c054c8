use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::expenses::models::{
    CreatedExpenseResponse, ExpenseEnvelope, ExpensePayload, MessageResponse,
};
use crate::modules::expenses::services::ExpenseService;

/// List all expenses
/// GET /api/expenses
pub async fn list_expenses(
    service: web::Data<Arc<ExpenseService>>,
) -> Result<HttpResponse, AppError> {
    let expenses = service.list_expenses().await?;

    Ok(HttpResponse::Ok().json(expenses))
}

/// Get expense by ID
/// GET /api/expenses/{id}
pub async fn get_expense(
    service: web::Data<Arc<ExpenseService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let expense = service.get_expense(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ExpenseEnvelope { expense }))
}

/// Create a new expense
/// POST /api/expenses
pub async fn create_expense(
    service: web::Data<Arc<ExpenseService>>,
    request: web::Json<ExpensePayload>,
) -> Result<HttpResponse, AppError> {
    let saved_expense = service.create_expense(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(CreatedExpenseResponse {
        message: "Expense Created Successfully".to_string(),
        saved_expense,
    }))
}

/// Replace title and amount of an expense
/// PUT /api/expenses/{id}
pub async fn update_expense(
    service: web::Data<Arc<ExpenseService>>,
    path: web::Path<String>,
    request: web::Json<ExpensePayload>,
) -> Result<HttpResponse, AppError> {
    let expense = service
        .update_expense(&path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(expense))
}

/// Delete an expense
/// DELETE /api/expenses/{id}
pub async fn delete_expense(
    service: web::Data<Arc<ExpenseService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_expense(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Expense deleted successfully")))
}

/// Configure expense routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/expenses")
            .route("", web::get().to(list_expenses))
            .route("", web::post().to(create_expense))
            .route("/{id}", web::get().to(get_expense))
            .route("/{id}", web::put().to(update_expense))
            .route("/{id}", web::delete().to(delete_expense)),
    );
}
