//! API handlers for the Web UI.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::sender::{MailPipeline, SenderIdentity, StoredSenderFilter};
use crate::settings::{SenderSettingsUpdate, SettingsService};
use crate::web::dto::{
    ApiResponse, EffectiveSenderResponse, SenderSettingsResponse, UpdateSenderSettingsRequest,
    ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::AuthAdmin;
use crate::Database;

/// Application state shared across handlers.
pub struct AppState {
    /// Database handle.
    pub db: Database,
    /// Host default sender identity.
    pub default_sender: SenderIdentity,
    /// Mail pipeline with the stored-override filter registered.
    pub pipeline: MailPipeline,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Registers the stored-override filter on the pipeline, the same
    /// registration the host mail composition uses.
    pub fn new(db: Database, default_sender: SenderIdentity) -> Self {
        let mut pipeline = MailPipeline::new(default_sender.clone());
        pipeline.register(Arc::new(StoredSenderFilter::new(Arc::new(db.clone()))));

        Self {
            db,
            default_sender,
            pipeline,
        }
    }
}

/// Get the current sender settings.
///
/// Returns the stored override values (null when never saved) together with
/// the host defaults the settings form shows as placeholders.
#[utoipa::path(
    get,
    path = "/api/settings/sender",
    tag = "Settings",
    responses(
        (status = 200, description = "Current sender settings", body = SenderSettingsResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Administrator access required")
    )
)]
pub async fn get_sender_settings(
    _admin: AuthAdmin,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SenderSettingsResponse>>, ApiError> {
    let service = SettingsService::new(&state.db);
    let settings = service.sender_settings().await?;

    let response = SenderSettingsResponse {
        name: settings.name,
        email: settings.email,
        default_name: state.default_sender.name.clone(),
        default_email: state.default_sender.email.clone(),
    };
    Ok(Json(ApiResponse::new(response)))
}

/// Update the sender settings.
///
/// Submitted values are persisted verbatim. An empty string clears the
/// override; omitted fields are left untouched.
#[utoipa::path(
    put,
    path = "/api/settings/sender",
    tag = "Settings",
    request_body = UpdateSenderSettingsRequest,
    responses(
        (status = 200, description = "Updated sender settings", body = SenderSettingsResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Administrator access required"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_sender_settings(
    _admin: AuthAdmin,
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<UpdateSenderSettingsRequest>,
) -> Result<Json<ApiResponse<SenderSettingsResponse>>, ApiError> {
    let update = SenderSettingsUpdate {
        name: req.name,
        email: req.email,
    };

    let service = SettingsService::new(&state.db);
    let settings = service.update_sender(&update).await?;

    tracing::info!(
        name = settings.name.as_deref().unwrap_or(""),
        email = settings.email.as_deref().unwrap_or(""),
        "Sender settings updated"
    );

    let response = SenderSettingsResponse {
        name: settings.name,
        email: settings.email,
        default_name: state.default_sender.name.clone(),
        default_email: state.default_sender.email.clone(),
    };
    Ok(Json(ApiResponse::new(response)))
}

/// Get the effective sender identity.
///
/// Resolves the sender the mail pipeline would use for the next outgoing
/// message: stored overrides where present, host defaults otherwise.
#[utoipa::path(
    get,
    path = "/api/settings/sender/effective",
    tag = "Settings",
    responses(
        (status = 200, description = "Effective sender identity", body = EffectiveSenderResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Administrator access required")
    )
)]
pub async fn effective_sender(
    _admin: AuthAdmin,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<EffectiveSenderResponse>>, ApiError> {
    let sender = state.pipeline.resolve_sender().await;

    let response = EffectiveSenderResponse {
        name: sender.name,
        email: sender.email,
    };
    Ok(Json(ApiResponse::new(response)))
}
