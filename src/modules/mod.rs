pub mod expenses;
pub mod health;

use actix_web::web;

use crate::middleware::json_config;

/// Register every route plus the shared JSON extractor config.
///
/// Expects `web::Data<Arc<ExpenseService>>` to be registered on the `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .configure(health::configure)
        .configure(expenses::controllers::configure);
}
