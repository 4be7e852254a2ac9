use crate::domain::{Product, ProductDraft};
use crate::transport::http::handlers::{health, products};
use crate::transport::http::types::{AppState, Message};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::index_handler,
        health::healthcheck_handler,
        products::list_products_handler,
        products::get_product_handler,
        products::create_product_handler,
        products::update_product_handler,
        products::delete_product_handler
    ),
    components(schemas(Product, ProductDraft, Message))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/products",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route(
            "/api/products/:id",
            get(products::get_product_handler)
                .put(products::update_product_handler)
                .delete(products::delete_product_handler),
        )
        .with_state(app_state)
}
