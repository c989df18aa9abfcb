use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use gatehouse_core::{
    AuthenticatedUser, Email, Password, User, UserStore, UserStoreError,
};

#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Email, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.email().clone(), user);
        Ok(())
    }

    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .get(email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn authenticate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<AuthenticatedUser, UserStoreError> {
        let users = self.users.read().await;
        let user = users.get(email).ok_or(UserStoreError::UserNotFound)?;

        if !user.password_matches(password) {
            return Err(UserStoreError::IncorrectPassword);
        }

        Ok(AuthenticatedUser::new(user.id(), email.clone(), user.role()))
    }

    async fn set_new_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(email).ok_or(UserStoreError::UserNotFound)?;

        *user = user.clone().with_password(new_password);
        Ok(())
    }
}
