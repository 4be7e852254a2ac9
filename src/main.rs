use std::sync::Arc;

use product_api::infra::config;
use product_api::transport;
use product_api::PgProductRepository;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // The process must not begin listening if the store is unreachable.
    println!("> Connecting to product store...");
    let repo = match PgProductRepository::connect(&config::database_url()).await {
        Ok(repo) => repo,
        Err(e) => {
            eprintln!("> Failed to reach the product store: {}", e);
            return Err(e.into());
        }
    };
    println!("> Product store ready.");

    let app_state = transport::http::AppState {
        repo: Arc::new(repo),
    };

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors);

    let port = config::listen_port();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    println!("> API server listening on http://0.0.0.0:{}", port);
    println!("> Swagger UI available at http://localhost:{}/swagger-ui", port);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n> Shutdown signal received (Ctrl+C), stopping server.");
        }
    }

    Ok(())
}
