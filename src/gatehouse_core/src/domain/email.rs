use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};

use crate::domain::user::UserError;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile")
});

/// Validated email address. The inner value is kept behind `Secret` so it
/// never shows up in logs or Debug output.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl TryFrom<Secret<String>> for Email {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if EMAIL_REGEX.is_match(value.expose_secret()) {
            Ok(Self(value))
        } else {
            Err(UserError::InvalidEmail(
                "Enter a valid email address".to_string(),
            ))
        }
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
