use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::domain::{Product, ProductDraft};
use crate::transport::http::handlers::common::{error_response, rejection_response};
use crate::transport::http::types::{AppState, Message};

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products in insertion order", body = [Product]),
        (status = 503, description = "Store unavailable", body = Message)
    )
)]
pub async fn list_products_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.repo.list().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Store-assigned product id")
    ),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 400, description = "Invalid id", body = Message),
        (status = 404, description = "Product not found", body = Message),
        (status = 503, description = "Store unavailable", body = Message)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.repo.get(&id).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductDraft,
    responses(
        (status = 201, description = "Product created with an assigned id", body = Product),
        (status = 400, description = "Invalid body", body = Message),
        (status = 503, description = "Store unavailable", body = Message)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    body: Result<Json<ProductDraft>, JsonRejection>,
) -> impl IntoResponse {
    let Json(draft) = match body {
        Ok(v) => v,
        Err(e) => return rejection_response(e).into_response(),
    };

    match state.repo.create(draft).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Store-assigned product id")
    ),
    request_body = ProductDraft,
    responses(
        (status = 200, description = "Product replaced", body = Product),
        (status = 400, description = "Invalid id or body", body = Message),
        (status = 404, description = "Product not found", body = Message),
        (status = 503, description = "Store unavailable", body = Message)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ProductDraft>, JsonRejection>,
) -> impl IntoResponse {
    let Json(draft) = match body {
        Ok(v) => v,
        Err(e) => return rejection_response(e).into_response(),
    };

    match state.repo.replace(&id, draft).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Store-assigned product id")
    ),
    responses(
        (status = 200, description = "Product deleted", body = Message),
        (status = 400, description = "Invalid id", body = Message),
        (status = 404, description = "Product not found", body = Message),
        (status = 503, description = "Store unavailable", body = Message)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.repo.delete(&id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(Message {
                message: "Product deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}
