//! # Gatehouse - Authentication Service Library
//!
//! This is a facade crate that re-exports all public APIs from the auth service components.
//! Use this crate to get access to all authentication functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! gatehouse = { path = "../gatehouse" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Role`, `User`, `PasswordResetToken`, etc.
//! - **Repository traits**: `UserStore`, `ResetTokenStore`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `ForgotPasswordUseCase`, `ResetPasswordUseCase`
//! - **Adapters**: `PostgresUserStore`, `PostgresResetTokenStore`, `PostmarkEmailClient`, etc.
//! - **Service**: `AuthService` - The main entry point for the auth service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use gatehouse_core::*;
}

// Re-export most commonly used core types at the root level
pub use gatehouse_core::{
    AuthenticatedUser, Email, Password, PasswordResetToken, Role, User, UserError,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use gatehouse_core::{
        ResetTokenStore, ResetTokenStoreError, UserStore, UserStoreError,
    };
}

// Re-export repository traits at root level
pub use gatehouse_core::{
    EmailClient, ResetTokenStore, ResetTokenStoreError, UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use gatehouse_application::*;
}

// Re-export use cases at root level
pub use gatehouse_application::{
    ForgotPasswordUseCase, LoginUseCase, RegisterUseCase, ResetPasswordUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use gatehouse_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use gatehouse_adapters::persistence::*;
    }

    /// Email client implementations
    pub mod email {
        pub use gatehouse_adapters::email::*;
    }

    /// JWT token utilities
    pub mod auth {
        pub use gatehouse_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use gatehouse_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use gatehouse_adapters::{
    auth::{JwtConfig, TokenPair},
    email::{MockEmailClient, PostmarkEmailClient},
    persistence::{
        HashMapResetTokenStore, HashMapUserStore, PostgresResetTokenStore, PostgresUserStore,
    },
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use gatehouse_auth_service::{AuthService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
