//! Route definitions for the law journal HTTP surface.
//!
//! Content pages live at the top level, actions under `/api`, and the
//! review surface under `/admin`. Unknown paths redirect to the home route.

use axum::extract::DefaultBodyLimit;
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{middleware as axum_middleware, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // Room for both artifacts plus the text fields.
    let intake = &state.config.intake;
    let max_body =
        (intake.max_document_bytes + intake.max_thumbnail_bytes + 1024 * 1024) as usize;

    let cors = build_cors_layer(&state);

    Router::new()
        .merge(page_routes())
        .merge(intake_routes())
        .merge(admin_routes())
        .merge(health_routes())
        .fallback(redirect_home)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Public content pages and catalog reads.
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/about", get(handlers::pages::about))
        .route("/about-us", get(handlers::pages::about_us))
        .route("/submit", get(handlers::pages::submit_info))
        .route("/publications", get(handlers::articles::publications))
        .route("/article/{key}", get(handlers::articles::article_detail))
        .route("/article/{key}/text", get(handlers::articles::article_text))
        .route("/api/search", get(handlers::articles::live_search))
}

/// Submission intake.
fn intake_routes() -> Router<AppState> {
    Router::new().route("/api/submissions", post(handlers::submissions::submit_article))
}

/// Admin review surface. Auth failures on any of these redirect home.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/submissions", get(handlers::admin::list_submissions))
        .route("/admin/users", get(handlers::admin::list_users))
        .route(
            "/api/admin/submissions/{id}/approve",
            post(handlers::admin::approve_submission),
        )
        .route(
            "/api/admin/submissions/{id}/reject",
            post(handlers::admin::reject_submission),
        )
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Unknown paths land on the home route.
async fn redirect_home() -> Redirect {
    Redirect::to("/")
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors
}
