pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    password::Password,
    reset_token::{PasswordResetToken, RESET_TOKEN_TTL_SECONDS},
    role::Role,
    user::{AuthenticatedUser, User, UserError},
};

pub use ports::{
    repositories::{ResetTokenStore, ResetTokenStoreError, UserStore, UserStoreError},
    services::EmailClient,
};
