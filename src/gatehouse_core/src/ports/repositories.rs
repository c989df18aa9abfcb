use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    password::Password,
    reset_token::PasswordResetToken,
    user::{AuthenticatedUser, User},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::IncorrectPassword, Self::IncorrectPassword) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new account. Email uniqueness is the storage layer's
    /// responsibility (unique index), so racing duplicates are rejected
    /// atomically.
    async fn add_user(&self, user: User) -> Result<(), UserStoreError>;
    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn authenticate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<AuthenticatedUser, UserStoreError>;
    async fn set_new_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), UserStoreError>;
}

// ResetTokenStore port trait and errors
#[derive(Debug, Error)]
pub enum ResetTokenStoreError {
    #[error("Token not found")]
    TokenNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for ResetTokenStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::TokenNotFound, Self::TokenNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait ResetTokenStore: Send + Sync {
    /// Persist a token, removing any prior tokens for the same user so at
    /// most one is live at a time.
    async fn replace_token(&self, token: PasswordResetToken) -> Result<(), ResetTokenStoreError>;
    async fn get_token(&self, token: &str) -> Result<PasswordResetToken, ResetTokenStoreError>;
    async fn delete_token(&self, token: &str) -> Result<(), ResetTokenStoreError>;
}
