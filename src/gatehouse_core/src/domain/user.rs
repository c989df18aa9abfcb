use secrecy::{ExposeSecret, Secret};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{email::Email, password::Password, role::Role};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
    #[error("Invalid password: {0}")]
    InvalidPassword(String),
    #[error("Invalid role: {0}")]
    InvalidRole(String),
}

/// A user account.
///
/// The `password` field holds the plaintext secret on the way into a store
/// and the stored hash on the way out of one (see [`User::parse`]); only the
/// store adapters ever look inside it.
#[derive(Debug, Clone)]
pub struct User {
    id: Uuid,
    username: String,
    email: Email,
    password: Password,
    role: Role,
    first_name: String,
}

impl User {
    /// Create a new account with a fresh id.
    pub fn new(
        username: String,
        email: Email,
        password: Password,
        role: Role,
        first_name: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password,
            role,
            first_name,
        }
    }

    /// Reconstruct an account from storage. The password column holds the
    /// hash, which bypasses the plaintext policy checks.
    pub fn parse(
        id: Uuid,
        username: String,
        email: Secret<String>,
        password_hash: Secret<String>,
        role: &str,
        first_name: String,
    ) -> Result<Self, UserError> {
        Ok(Self {
            id,
            username,
            email: Email::try_from(email)?,
            password: Password::parse(password_hash),
            role: role.parse()?,
            first_name,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Same account with a replaced credential. Used by stores when a reset
    /// swaps the password; id, role and names are preserved.
    pub fn with_password(mut self, password: Password) -> Self {
        self.password = password;
        self
    }

    /// Plaintext comparison for in-memory stores. The Postgres store verifies
    /// against the Argon2 hash instead.
    pub fn password_matches(&self, candidate: &Password) -> bool {
        self.password.as_ref().expose_secret() == candidate.as_ref().expose_secret()
    }
}

/// Result of a successful credential check: just enough to mint tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: Email,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn new(id: Uuid, email: Email, role: Role) -> Self {
        Self { id, email, role }
    }
}
