use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type returned by store implementations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised by the persistence layer
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration errors
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Unique id constraint rejected an insert
    #[error("Duplicate expense id: {0}")]
    DuplicateId(String),

    /// Store could not serve the request
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Request payload rejected before reaching the store
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Store failure, surfaced to callers only as `context`
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        let message = match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            // The cause is logged with the request id by the `RequestId` middleware
            AppError::Store { context, .. } => (*context).to_string(),
            AppError::Configuration(_) => "Internal server error".to_string(),
        };

        HttpResponse::build(status_code).json(serde_json::json!({ "message": message }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn store(context: &'static str, source: StoreError) -> Self {
        AppError::Store { context, source }
    }
}
