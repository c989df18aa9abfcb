use axum::{Json, extract::State, response::IntoResponse};
use gatehouse_application::ForgotPasswordUseCase;
use gatehouse_core::{Email, EmailClient, ResetTokenStore, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::AuthApiError;

/// One body for every outcome, so the endpoint cannot be used to probe
/// which emails have accounts.
const RESET_REQUESTED_MESSAGE: &str = "If this email exists, a reset link has been sent";

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: Secret<String>,
}

/// POST /forgot-password
#[tracing::instrument(name = "Forgot password", skip_all)]
pub async fn forgot_password<U, R, E>(
    State((user_store, reset_token_store, email_client, reset_link_base)): State<(
        U,
        R,
        E,
        String,
    )>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + Send + Sync + 'static,
    R: ResetTokenStore + Clone + Send + Sync + 'static,
    E: EmailClient + Clone + Send + Sync + 'static,
{
    // A malformed address matches no account; same generic response
    let Ok(email) = Email::try_from(request.email) else {
        return Ok(reset_requested());
    };

    let use_case = ForgotPasswordUseCase::new(
        user_store,
        reset_token_store,
        email_client,
        reset_link_base,
    );

    // Both outcomes collapse to the same body; only transport failure differs
    use_case.execute(email).await?;

    Ok(reset_requested())
}

fn reset_requested() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": RESET_REQUESTED_MESSAGE }))
}
