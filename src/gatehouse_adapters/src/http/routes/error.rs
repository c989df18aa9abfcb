use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gatehouse_application::{
    ForgotPasswordError, LoginError, RegisterError, ResetPasswordError,
};
use gatehouse_core::{ResetTokenStoreError, UserError, UserStoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::TokenAuthError;

/// `{"detail": ...}` error body, as clients of this API expect.
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    /// Malformed or missing input; rendered as a per-field error map
    #[error("{message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    #[error("User with this email already exists")]
    UserAlreadyExists,

    /// Same message whether the email was unknown or the password wrong
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid role for this account")]
    RoleMismatch,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// Refresh-token rejection; 401 rather than the reset flow's 400
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Failed to send reset email")]
    EmailDeliveryFailure(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        match self {
            // Field-error map, the shape the register form consumes
            AuthApiError::InvalidInput { field, message } => {
                let mut body = serde_json::Map::new();
                body.insert(field.to_string(), serde_json::json!([message]));
                (StatusCode::BAD_REQUEST, Json(serde_json::Value::Object(body))).into_response()
            }
            AuthApiError::UserAlreadyExists => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "email": [self.to_string()] })),
            )
                .into_response(),

            AuthApiError::InvalidCredentials | AuthApiError::RoleMismatch => {
                (StatusCode::UNAUTHORIZED, self.into_detail_body()).into_response()
            }
            AuthApiError::AuthenticationError(_) => {
                (StatusCode::UNAUTHORIZED, self.into_detail_body()).into_response()
            }

            AuthApiError::InvalidToken | AuthApiError::TokenExpired => {
                (StatusCode::BAD_REQUEST, self.into_detail_body()).into_response()
            }

            AuthApiError::EmailDeliveryFailure(_) | AuthApiError::UnexpectedError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.into_detail_body()).into_response()
            }
        }
    }
}

impl AuthApiError {
    fn into_detail_body(self) -> Json<ErrorResponse> {
        Json(ErrorResponse {
            detail: self.to_string(),
        })
    }
}

impl From<UserError> for AuthApiError {
    fn from(error: UserError) -> Self {
        let field = match &error {
            UserError::InvalidEmail(_) => "email",
            UserError::InvalidPassword(_) => "password",
            UserError::InvalidRole(_) => "role",
        };
        AuthApiError::InvalidInput {
            field,
            message: error.to_string(),
        }
    }
}

impl From<UserStoreError> for AuthApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => AuthApiError::UserAlreadyExists,
            UserStoreError::UserNotFound | UserStoreError::IncorrectPassword => {
                AuthApiError::InvalidCredentials
            }
            UserStoreError::UnexpectedError(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<ResetTokenStoreError> for AuthApiError {
    fn from(error: ResetTokenStoreError) -> Self {
        match error {
            ResetTokenStoreError::TokenNotFound => AuthApiError::InvalidToken,
            ResetTokenStoreError::UnexpectedError(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<TokenAuthError> for AuthApiError {
    fn from(error: TokenAuthError) -> Self {
        match error {
            TokenAuthError::InvalidToken | TokenAuthError::TokenError(_) => {
                AuthApiError::AuthenticationError(error.to_string())
            }
            TokenAuthError::UnexpectedError(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<RegisterError> for AuthApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<LoginError> for AuthApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => AuthApiError::InvalidCredentials,
            LoginError::RoleMismatch => AuthApiError::RoleMismatch,
            LoginError::UnexpectedError(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<ForgotPasswordError> for AuthApiError {
    fn from(error: ForgotPasswordError) -> Self {
        match error {
            ForgotPasswordError::EmailError(e) => AuthApiError::EmailDeliveryFailure(e),
            ForgotPasswordError::ResetTokenStoreError(e) => {
                AuthApiError::UnexpectedError(e.to_string())
            }
            ForgotPasswordError::UnexpectedError(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<ResetPasswordError> for AuthApiError {
    fn from(error: ResetPasswordError) -> Self {
        match error {
            ResetPasswordError::InvalidToken => AuthApiError::InvalidToken,
            ResetPasswordError::TokenExpired => AuthApiError::TokenExpired,
            ResetPasswordError::UserStoreError(e) => AuthApiError::UnexpectedError(e.to_string()),
            ResetPasswordError::ResetTokenStoreError(e) => {
                AuthApiError::UnexpectedError(e.to_string())
            }
        }
    }
}
