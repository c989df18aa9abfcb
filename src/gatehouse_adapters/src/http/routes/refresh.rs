use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;

use super::AuthApiError;
use crate::auth::{JwtConfig, refresh_access_token};

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// POST /refresh
///
/// Stateless: the new access token is minted from the refresh token's own
/// claims, nothing is looked up or stored.
#[tracing::instrument(name = "Refresh", skip(jwt_config, request))]
pub async fn refresh(
    State(jwt_config): State<JwtConfig>,
    Json(request): Json<RefreshRequest>,
) -> Result<impl IntoResponse, AuthApiError> {
    let access = refresh_access_token(&request.refresh, &jwt_config)?;

    Ok(Json(serde_json::json!({ "access": access })))
}
