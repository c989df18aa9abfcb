use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use uuid::Uuid;

use crate::domain::email::Email;

/// Reset tokens live for one hour from issuance.
pub const RESET_TOKEN_TTL_SECONDS: i64 = 3600;

/// Bytes of entropy behind each token value.
const TOKEN_ENTROPY_BYTES: usize = 32;

/// A single-use, time-limited password-reset token.
///
/// The value is URL-safe so it can be embedded directly in a reset link.
/// At most one token is live per user; the store enforces that by deleting
/// prior tokens when a new one is persisted.
#[derive(Debug, Clone)]
pub struct PasswordResetToken {
    id: Uuid,
    user_id: Uuid,
    email: Email,
    token: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl PasswordResetToken {
    /// Mint a fresh token for the given account.
    pub fn generate(user_id: Uuid, email: Email) -> Self {
        let mut bytes = [0u8; TOKEN_ENTROPY_BYTES];
        rand::rng().fill_bytes(&mut bytes);

        let created_at = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            email,
            token: URL_SAFE_NO_PAD.encode(bytes),
            created_at,
            expires_at: created_at + Duration::seconds(RESET_TOKEN_TTL_SECONDS),
        }
    }

    /// Reconstruct a token from storage.
    pub fn parse(
        id: Uuid,
        user_id: Uuid,
        email: Email,
        token: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            email,
            token,
            created_at,
            expires_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// A token presented at the exact expiry instant counts as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
