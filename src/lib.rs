//! Municipal Complaint Portal
//!
//! Citizen-facing web portal for reporting municipal service issues.
//!
//! ## Features
//!
//! - **Submit**: complaint form that issues a tracking identifier
//! - **Track**: look up a complaint and follow its progress timeline
//! - **Departments**: contact directory for municipal departments

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod validation;
pub mod views;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use config::Config;
use handlers::AppState;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::TraceLayer,
};

/// Build the full application router
pub fn app(state: AppState, config: &Config) -> Router {
    // Build CORS layer
    let cors = if config.is_production() {
        CorsLayer::new()
            .allow_origin(
                config
                    .cors_origins
                    .iter()
                    .filter_map(|o| o.parse::<HeaderValue>().ok())
                    .collect::<Vec<_>>(),
            )
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::permissive()
    };

    // Build API routes
    let api_routes = Router::new()
        .route("/complaints", post(handlers::create_complaint))
        .route("/complaints/:id", get(handlers::get_complaint))
        .route("/departments", get(handlers::list_departments))
        .layer(cors);

    // Build page routes
    let page_routes = Router::new()
        .route("/", get(handlers::home))
        .route(
            "/submit",
            get(handlers::submit_form).post(handlers::submit_complaint),
        )
        .route(
            "/track",
            get(handlers::track_page).post(handlers::track_complaint),
        )
        .route("/departments", get(handlers::departments_page))
        .route("/language", post(handlers::toggle_language))
        .route("/health", get(handlers::health));

    Router::new()
        .merge(page_routes)
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            handlers::middleware::security_headers,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_form_size))
        .with_state(state)
}
