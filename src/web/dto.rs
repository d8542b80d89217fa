//! Data Transfer Objects for the Web API.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::web::error::ApiError;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Current sender settings response.
///
/// Stored values are null when never saved; the defaults are the host
/// identity the form shows as placeholders.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SenderSettingsResponse {
    /// Stored sender display name (null if never saved).
    pub name: Option<String>,
    /// Stored sender email address (null if never saved).
    pub email: Option<String>,
    /// Host default sender display name.
    pub default_name: String,
    /// Host default sender email address.
    pub default_email: String,
}

/// Sender settings update request.
///
/// Fields that are omitted are left untouched. An empty string clears the
/// override so outgoing mail falls back to the host default.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSenderSettingsRequest {
    /// Sender display name.
    #[serde(default)]
    #[validate(length(max = 128), custom(function = no_control_chars))]
    pub name: Option<String>,
    /// Sender email address.
    #[serde(default)]
    #[validate(length(max = 254), custom(function = email_or_empty))]
    pub email: Option<String>,
}

/// Effective sender identity response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EffectiveSenderResponse {
    /// Effective sender display name.
    pub name: String,
    /// Effective sender email address.
    pub email: String,
}

/// A JSON extractor that validates the request body.
///
/// This extractor deserializes the request body as JSON and then validates it
/// using the `validator` crate. If validation fails, it returns a detailed
/// error response with field-level error information.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // First, extract the JSON body
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e)))?;

        // Then, validate the deserialized value
        value.validate().map_err(ApiError::from_validation_errors)?;

        Ok(ValidatedJson(value))
    }
}

// ============================================================================
// Custom Validators
// ============================================================================

/// Validate that a string does not contain control characters or NULL bytes.
pub fn no_control_chars(value: &str) -> Result<(), validator::ValidationError> {
    if value.chars().any(|c| c.is_control()) {
        return Err(validator::ValidationError::new("no_control_chars")
            .with_message("Must not contain control characters".into()));
    }
    Ok(())
}

/// Validate that a string is either empty or shaped like an email address.
///
/// The empty string is allowed because saving it clears the override.
pub fn email_or_empty(value: &str) -> Result<(), validator::ValidationError> {
    use validator::ValidateEmail;

    if value.is_empty() || value.validate_email() {
        return Ok(());
    }
    Err(validator::ValidationError::new("email")
        .with_message("Must be a valid email address or empty".into()))
}
