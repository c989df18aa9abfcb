use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use gatehouse_application::ResetPasswordUseCase;
use gatehouse_core::{Password, ResetTokenStore, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::AuthApiError;

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: Secret<String>,
}

/// POST /reset-password/{token}
#[tracing::instrument(name = "Reset password", skip_all)]
pub async fn reset_password<U, R>(
    State((user_store, reset_token_store)): State<(U, R)>,
    Path(token): Path<String>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + Send + Sync + 'static,
    R: ResetTokenStore + Clone + Send + Sync + 'static,
{
    let password = Password::try_from(request.password)?;

    let use_case = ResetPasswordUseCase::new(user_store, reset_token_store);
    use_case.execute(&token, password).await?;

    Ok(Json(serde_json::json!({ "message": "Password reset successful" })))
}
