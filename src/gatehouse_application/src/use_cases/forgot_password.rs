use gatehouse_core::{
    Email, EmailClient, PasswordResetToken, ResetTokenStore, ResetTokenStoreError, UserStore,
    UserStoreError,
};

/// Response from the forgot-password use case.
///
/// Both outcomes map to the same HTTP response; the distinction exists so
/// tests can observe which path ran without the wire leaking it.
#[derive(Debug, PartialEq)]
pub enum ForgotPasswordOutcome {
    /// A token was issued and the reset email dispatched
    LinkSent,
    /// No matching account; nothing was issued or sent
    UnknownEmail,
}

/// Error types specific to the forgot-password use case
#[derive(Debug, thiserror::Error)]
pub enum ForgotPasswordError {
    #[error("Reset token store error: {0}")]
    ResetTokenStoreError(#[from] ResetTokenStoreError),
    #[error("Failed to send email: {0}")]
    EmailError(String),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Forgot-password use case - issues a single-use reset token and mails a
/// reset link to the account owner
pub struct ForgotPasswordUseCase<U, R, E>
where
    U: UserStore,
    R: ResetTokenStore,
    E: EmailClient,
{
    user_store: U,
    reset_token_store: R,
    email_client: E,
    reset_link_base: String,
}

impl<U, R, E> ForgotPasswordUseCase<U, R, E>
where
    U: UserStore,
    R: ResetTokenStore,
    E: EmailClient,
{
    pub fn new(
        user_store: U,
        reset_token_store: R,
        email_client: E,
        reset_link_base: String,
    ) -> Self {
        Self {
            user_store,
            reset_token_store,
            email_client,
            reset_link_base,
        }
    }

    /// Execute the forgot-password use case
    ///
    /// Issuing a new token unconditionally invalidates any previous one for
    /// the same user, even if unexpired and unused. The email is sent once;
    /// transport failure surfaces as an error rather than being retried.
    #[tracing::instrument(name = "ForgotPasswordUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email) -> Result<ForgotPasswordOutcome, ForgotPasswordError> {
        let user = match self.user_store.get_user(&email).await {
            Ok(user) => user,
            // Unknown email: report success-shaped silence to the caller
            Err(UserStoreError::UserNotFound) => return Ok(ForgotPasswordOutcome::UnknownEmail),
            Err(e) => return Err(ForgotPasswordError::UnexpectedError(e.to_string())),
        };

        let token = PasswordResetToken::generate(user.id(), email.clone());
        let reset_link = format!("{}/reset-password/{}", self.reset_link_base, token.token());

        self.reset_token_store.replace_token(token).await?;

        self.email_client
            .send_email(
                &email,
                "Password reset",
                &format!("Use this link to reset your password: {}", reset_link),
            )
            .await
            .map_err(ForgotPasswordError::EmailError)?;

        Ok(ForgotPasswordOutcome::LinkSent)
    }
}
