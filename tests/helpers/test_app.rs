// Test App Helpers
//
// Builds the production route table over an injected store.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::NormalizePath,
    web, App, Error,
};
use expense_service::expenses::{ExpenseRepository, ExpenseService, InMemoryExpenseRepository};
use expense_service::middleware::RequestId;
use expense_service::modules;

use super::failing_repository::UnavailableRepository;

/// App with every route, backed by `repository`
pub fn build_app(
    repository: Arc<dyn ExpenseRepository>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let service = Arc::new(ExpenseService::new(repository));

    App::new()
        .wrap(RequestId)
        .wrap(NormalizePath::trim())
        .app_data(web::Data::new(service))
        .configure(modules::configure)
}

/// Fresh in-memory store
pub fn memory_store() -> Arc<InMemoryExpenseRepository> {
    Arc::new(InMemoryExpenseRepository::new())
}

/// Store that fails every operation
pub fn unavailable_store() -> Arc<dyn ExpenseRepository> {
    Arc::new(UnavailableRepository)
}
