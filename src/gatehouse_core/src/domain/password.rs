use secrecy::{ExposeSecret, Secret};

use crate::domain::user::UserError;

const MIN_PASSWORD_LENGTH: usize = 8;

/// A password, either plaintext (at registration/login time) or an already
/// stored credential reconstructed via [`Password::parse`].
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Wrap a credential loaded from storage (e.g. an Argon2 hash) without
    /// applying the plaintext policy checks.
    pub fn parse(stored: Secret<String>) -> Self {
        Self(stored)
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(UserError::InvalidPassword(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
