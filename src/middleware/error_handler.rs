use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    web, Error, HttpRequest, HttpResponse,
};

use super::request_id::current_request_id;

/// Maximum accepted JSON body size
const JSON_LIMIT_BYTES: usize = 64 * 1024;

/// JSON extractor configuration shared by every route
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(json_error_handler)
}

/// Turn body-parsing failures into `400 {"message": ...}`
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    let status_code = match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::BAD_REQUEST,
    };

    let request_id = current_request_id(req).unwrap_or_else(|| "-".to_string());
    tracing::warn!(
        request_id = %request_id,
        method = %req.method(),
        path = %req.path(),
        error = %err,
        "Rejected request body"
    );

    let message = format!("Invalid request body: {}", err);
    let response = error_response(status_code, message);
    InternalError::from_response(err, response).into()
}

/// Helper function to create standardized error responses
pub fn error_response(status_code: StatusCode, message: String) -> HttpResponse {
    HttpResponse::build(status_code).json(serde_json::json!({ "message": message }))
}
