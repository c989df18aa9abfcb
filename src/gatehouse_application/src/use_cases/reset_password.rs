use chrono::Utc;
use gatehouse_core::{
    Password, ResetTokenStore, ResetTokenStoreError, UserStore, UserStoreError,
};

/// Error types specific to the reset-password use case
#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    /// No token with that value exists (never issued, already consumed, or
    /// replaced by a newer one)
    #[error("Invalid token")]
    InvalidToken,
    /// The token existed but had passed its expiry; it has been deleted
    #[error("Token expired")]
    TokenExpired,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Reset token store error: {0}")]
    ResetTokenStoreError(#[from] ResetTokenStoreError),
}

/// Reset-password use case - consumes a reset token and replaces the owning
/// user's password
pub struct ResetPasswordUseCase<U, R>
where
    U: UserStore,
    R: ResetTokenStore,
{
    user_store: U,
    reset_token_store: R,
}

impl<U, R> ResetPasswordUseCase<U, R>
where
    U: UserStore,
    R: ResetTokenStore,
{
    pub fn new(user_store: U, reset_token_store: R) -> Self {
        Self {
            user_store,
            reset_token_store,
        }
    }

    /// Execute the reset-password use case
    ///
    /// Expired tokens are deleted on detection, so a retry with the same
    /// value reports InvalidToken rather than TokenExpired.
    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        token: &str,
        new_password: Password,
    ) -> Result<(), ResetPasswordError> {
        let reset_token = match self.reset_token_store.get_token(token).await {
            Ok(reset_token) => reset_token,
            Err(ResetTokenStoreError::TokenNotFound) => {
                return Err(ResetPasswordError::InvalidToken);
            }
            Err(e) => return Err(e.into()),
        };

        if reset_token.is_expired(Utc::now()) {
            self.reset_token_store.delete_token(token).await?;
            return Err(ResetPasswordError::TokenExpired);
        }

        self.user_store
            .set_new_password(reset_token.email(), new_password)
            .await?;

        self.reset_token_store.delete_token(token).await?;

        Ok(())
    }
}
