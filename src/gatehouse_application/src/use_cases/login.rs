use gatehouse_core::{AuthenticatedUser, Email, Password, Role, UserStore, UserStoreError};

/// Error types specific to the login use case
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LoginError {
    /// Same variant whether the email is unknown or the password is wrong,
    /// so a caller cannot probe for account existence through this arm.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// The account exists but belongs to the other portal. Distinct from
    /// InvalidCredentials so clients can redirect to the right portal.
    #[error("Invalid role for this account")]
    RoleMismatch,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Login use case - verifies an email/password/role triple
pub struct LoginUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> LoginUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    /// Execute the login use case
    ///
    /// The role gate runs before password verification: a caller that names
    /// the wrong portal gets RoleMismatch even with a wrong password.
    ///
    /// # Arguments
    /// * `email` - User's email address
    /// * `password` - User's password
    /// * `requested_role` - Portal the caller is logging in to, if any
    ///
    /// # Returns
    /// The authenticated user's identity, ready for token minting
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
        requested_role: Option<Role>,
    ) -> Result<AuthenticatedUser, LoginError> {
        let user = self.user_store.get_user(&email).await.map_err(|e| match e {
            UserStoreError::UserNotFound => LoginError::InvalidCredentials,
            other => LoginError::UnexpectedError(other.to_string()),
        })?;

        if let Some(requested_role) = requested_role {
            if requested_role != user.role() {
                return Err(LoginError::RoleMismatch);
            }
        }

        self.user_store
            .authenticate_user(&email, &password)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound | UserStoreError::IncorrectPassword => {
                    LoginError::InvalidCredentials
                }
                other => LoginError::UnexpectedError(other.to_string()),
            })
    }
}
