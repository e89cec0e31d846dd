//! Route definitions for the API.
//!
//! Ticket operations are matched on the path suffix, so the service can sit
//! behind any prefix (`/entry`, `/prod/entry`, `/v1/lots/entry`).

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::AppState;

/// Ticket operation selected by a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Vehicle entering: issue a ticket.
    Entry,
    /// Vehicle leaving: price the ticket.
    Exit,
}

impl Endpoint {
    /// Match a request path by suffix.
    pub fn from_path(path: &str) -> Option<Self> {
        if path.ends_with("entry") {
            Some(Endpoint::Entry)
        } else if path.ends_with("exit") {
            Some(Endpoint::Exit)
        } else {
            None
        }
    }
}

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::dispatch, handlers::health_check),
    components(schemas(crate::api::types::HealthResponse, crate::domain::Ticket)),
    tags(
        (name = "tickets", description = "Vehicle entry and exit"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "Parking Core API",
        version = "0.1.0",
        description = "Parking-lot ticketing - issues tickets on entry and prices them on exit",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(handlers::health_check))
        // Everything else goes through the suffix dispatcher, GET only
        .fallback(get(handlers::dispatch))
        .with_state(state)
        // OpenAPI docs
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
