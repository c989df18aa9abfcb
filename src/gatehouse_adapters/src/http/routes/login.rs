use axum::{Json, extract::State, response::IntoResponse};
use gatehouse_application::LoginUseCase;
use gatehouse_core::{Email, Password, Role, UserStore};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use super::AuthApiError;
use crate::auth::{JwtConfig, generate_token_pair};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
    /// Portal the caller is logging in to, if it cares
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub email: String,
    pub role: Role,
}

/// POST /login
///
/// Input that fails domain validation is folded into the credential errors
/// rather than reported as such: a malformed email can never match an
/// account, and saying more would leak which inputs reach the store.
#[tracing::instrument(name = "Login", skip(user_store, jwt_config, request))]
pub async fn login<U>(
    State((user_store, jwt_config)): State<(U, JwtConfig)>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + Send + Sync + 'static,
{
    let email =
        Email::try_from(request.email).map_err(|_| AuthApiError::InvalidCredentials)?;
    let password =
        Password::try_from(request.password).map_err(|_| AuthApiError::InvalidCredentials)?;
    // An unknown role string cannot match any stored role
    let requested_role = match request.role {
        Some(role) => Some(role.parse().map_err(|_| AuthApiError::RoleMismatch)?),
        None => None,
    };

    let use_case = LoginUseCase::new(user_store);
    let authenticated = use_case.execute(email, password, requested_role).await?;

    let tokens = generate_token_pair(&authenticated, &jwt_config)
        .map_err(|e| AuthApiError::UnexpectedError(e.to_string()))?;

    Ok(Json(LoginResponse {
        access: tokens.access,
        refresh: tokens.refresh,
        email: authenticated.email.as_ref().expose_secret().clone(),
        role: authenticated.role,
    }))
}
