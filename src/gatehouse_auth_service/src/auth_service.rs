use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::post,
};
use gatehouse_adapters::{
    auth::JwtConfig,
    config::AllowedOrigins,
    http::routes::{forgot_password, login, refresh, register, reset_password},
};
use gatehouse_core::{EmailClient, ResetTokenStore, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Main authentication service that provides all auth-related routes
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService with the provided stores and email client
    ///
    /// # Arguments
    /// * `user_store` - Store for user accounts (must be Clone)
    /// * `reset_token_store` - Store for password-reset tokens (must be Clone)
    /// * `email_client` - Client for sending reset emails (must be Clone)
    /// * `jwt_config` - Signing secret and token lifetimes
    /// * `reset_link_base` - Frontend base URL for emailed reset links
    ///
    /// # Note on Architecture
    /// Stores implement Clone via an internal pool or Arc for thread-safe
    /// sharing. Each route is given its specific state requirements,
    /// avoiding unnecessary cloning.
    pub fn new<U, R, E>(
        user_store: U,
        reset_token_store: R,
        email_client: E,
        jwt_config: JwtConfig,
        reset_link_base: String,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
        R: ResetTokenStore + Clone + 'static,
        E: EmailClient + Clone + 'static,
    {
        let router = Router::new()
            // Register only needs the user store
            .route("/register", post(register::<U>))
            .with_state(user_store.clone())
            // Login verifies credentials and mints the token pair
            .route("/login", post(login::<U>))
            .with_state((user_store.clone(), jwt_config.clone()))
            // Refresh is stateless beyond the signing config
            .route("/refresh", post(refresh))
            .with_state(jwt_config)
            // Forgot password needs both stores, the mailer and the link base
            .route("/forgot-password", post(forgot_password::<U, R, E>))
            .with_state((
                user_store.clone(),
                reset_token_store.clone(),
                email_client,
                reset_link_base,
            ))
            // Reset password consumes the token and rewrites the credential
            .route("/reset-password/{token}", post(reset_password::<U, R>))
            .with_state((user_store, reset_token_store));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be served directly or
    /// nested into another application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
