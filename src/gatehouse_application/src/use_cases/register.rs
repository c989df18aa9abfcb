use gatehouse_core::{Email, Password, Role, User, UserStore, UserStoreError};

/// Error types for the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Register use case - handles account creation
pub struct RegisterUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> RegisterUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `username` - Account username (callers default this to the email)
    /// * `email` - Validated email address
    /// * `password` - Validated password, hashed by the store before write
    /// * `role` - Which portal the account belongs to
    /// * `first_name` - Display name
    ///
    /// # Returns
    /// Ok(()) on success, or RegisterError if the email is already taken
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: String,
        email: Email,
        password: Password,
        role: Role,
        first_name: String,
    ) -> Result<(), RegisterError> {
        let user = User::new(username, email, password, role, first_name);

        self.user_store.add_user(user).await?;

        Ok(())
    }
}
