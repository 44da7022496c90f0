use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::dto::{CreateProductRequest, ProductResponse};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product))
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "rejected create product body");
            return errors::json_rejection_to_response(rejection);
        }
    };

    if let Err(msg) = body.validate() {
        tracing::warn!(reason = %msg, "create product request failed validation");
        return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", msg);
    }

    match services.products.create_product(body.into_command()) {
        Ok(product) => (StatusCode::OK, Json(ProductResponse::from(&product))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "create product failed");
            errors::service_error_to_response(e)
        }
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.products.get_product_by_id(&id) {
        Ok(product) => (StatusCode::OK, Json(ProductResponse::from(&product))).into_response(),
        Err(e) => {
            tracing::warn!(product_id = %id, error = %e, "get product failed");
            errors::service_error_to_response(e)
        }
    }
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products.get_all_products() {
        Ok(products) => {
            let items = products
                .iter()
                .map(ProductResponse::from)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}
