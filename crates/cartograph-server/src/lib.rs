//! cartograph-server library root.
//!
//! Exposes the router and its building blocks so integration tests can
//! drive the HTTP surface with a substitute model client.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router with all routes and layers.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/generate-dbml-documentation",
            post(routes::documentation::generate_documentation),
        )
        .route(
            "/convert-sql-to-dbml",
            post(routes::convert::convert_sql_to_dbml),
        )
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::request_log::request_log))
                .layer(cors),
        )
        .with_state(state)
}
