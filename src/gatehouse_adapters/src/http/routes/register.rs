use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use gatehouse_application::RegisterUseCase;
use gatehouse_core::{Email, Password, Role, UserStore};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::AuthApiError;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Defaults to the email when omitted
    pub username: Option<String>,
    pub email: Secret<String>,
    pub password: Secret<String>,
    pub role: String,
    pub name: String,
}

/// POST /register
#[tracing::instrument(name = "Register", skip(user_store, request))]
pub async fn register<U>(
    State(user_store): State<U>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + Send + Sync + 'static,
{
    // Parse domain entities; failures come back as per-field errors
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;
    let role: Role = request.role.parse()?;

    let username = request
        .username
        .unwrap_or_else(|| email.as_ref().expose_secret().clone());

    let use_case = RegisterUseCase::new(user_store);
    use_case
        .execute(username, email, password, role, request.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "User registered successfully" })),
    ))
}
