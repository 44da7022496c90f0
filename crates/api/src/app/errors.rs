use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_core::DomainError;
use catalog_products::ProductServiceError;

pub fn service_error_to_response(err: ProductServiceError) -> axum::response::Response {
    match err {
        ProductServiceError::Domain(DomainError::Validation(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        ProductServiceError::Domain(DomainError::InvalidInput(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_input", msg)
        }
        ProductServiceError::Domain(DomainError::NotFound) => {
            json_error(StatusCode::NOT_FOUND, "not_found", "product not found")
        }
        ProductServiceError::Repository(e) => {
            tracing::error!(error = %e, "repository failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "internal server error",
            )
        }
    }
}

pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
