use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use gatehouse_core::{PasswordResetToken, ResetTokenStore, ResetTokenStoreError};

/// In-memory token store, keyed by token value for O(1) lookup.
#[derive(Default, Clone)]
pub struct HashMapResetTokenStore {
    tokens: Arc<RwLock<HashMap<String, PasswordResetToken>>>,
}

impl HashMapResetTokenStore {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl ResetTokenStore for HashMapResetTokenStore {
    async fn replace_token(&self, token: PasswordResetToken) -> Result<(), ResetTokenStoreError> {
        let mut tokens = self.tokens.write().await;
        // One live token per user
        tokens.retain(|_, existing| existing.user_id() != token.user_id());
        tokens.insert(token.token().to_string(), token);
        Ok(())
    }

    async fn get_token(&self, token: &str) -> Result<PasswordResetToken, ResetTokenStoreError> {
        let tokens = self.tokens.read().await;
        tokens
            .get(token)
            .cloned()
            .ok_or(ResetTokenStoreError::TokenNotFound)
    }

    async fn delete_token(&self, token: &str) -> Result<(), ResetTokenStoreError> {
        let mut tokens = self.tokens.write().await;
        tokens
            .remove(token)
            .map(|_| ())
            .ok_or(ResetTokenStoreError::TokenNotFound)
    }
}
