//! Router assembly for the contact backend

use std::time::Duration;

use axum::{
    http::{header, header::InvalidHeaderValue, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use portal_shared::config::ServerSettings;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::handlers::{contacts, health};
use crate::state::AppState;

/// Builds the router with CORS for the configured front-end origin, a
/// per-request timeout and HTTP tracing.
pub fn build_router(state: AppState, settings: &ServerSettings) -> Result<Router, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(&settings.allowed_origin)?;

    let router = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Contact records
        .route(
            "/contacts",
            post(contacts::create_contact).get(contacts::list_contacts),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(settings.request_timeout_secs),
        ))
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
