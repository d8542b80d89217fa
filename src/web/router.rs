//! Router configuration for the Web API.

use axum::{
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::dto::{EffectiveSenderResponse, SenderSettingsResponse, UpdateSenderSettingsRequest};
use super::handlers::{self, AppState};
use super::middleware::{create_cors_layer, jwt_auth, JwtState};

/// OpenAPI documentation for the settings API.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::get_sender_settings,
        handlers::update_sender_settings,
        handlers::effective_sender,
    ),
    components(schemas(
        SenderSettingsResponse,
        UpdateSenderSettingsRequest,
        EffectiveSenderResponse,
    )),
    tags(
        (name = "Settings", description = "Outgoing mail sender settings")
    )
)]
struct ApiDoc;

/// Create the main API router.
pub fn create_router(
    app_state: Arc<AppState>,
    jwt_state: Arc<JwtState>,
    cors_origins: &[String],
) -> Router {
    // Sender settings routes (administrator only, enforced per handler)
    let settings_routes = Router::new()
        .route(
            "/sender",
            get(handlers::get_sender_settings).put(handlers::update_sender_settings),
        )
        .route("/sender/effective", get(handlers::effective_sender));

    // API routes
    let api_routes = Router::new().nest("/settings", settings_routes);

    // Clone jwt_state for the middleware closure
    let jwt_state_for_middleware = jwt_state.clone();

    // Build the main router with middleware
    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    let state = jwt_state_for_middleware.clone();
                    jwt_auth(state, req, next)
                })),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Create the Swagger UI router serving the OpenAPI document.
pub fn create_swagger_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
