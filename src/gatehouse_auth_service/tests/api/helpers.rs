use std::sync::Arc;

use gatehouse_adapters::{
    auth::JwtConfig,
    config::constants,
    persistence::{HashMapResetTokenStore, HashMapUserStore},
};
use gatehouse_auth_service::AuthService;
use gatehouse_core::{Email, EmailClient};
use secrecy::Secret;
use tokio::sync::RwLock;

pub const RESET_LINK_BASE: &str = "http://localhost:3000";

/// Email client that records outgoing mail so tests can fish the reset
/// token back out of the message body.
#[derive(Clone, Default)]
pub struct CapturingEmailClient {
    pub sent: Arc<RwLock<Vec<SentEmail>>>,
}

#[derive(Clone)]
pub struct SentEmail {
    pub recipient: String,
    pub subject: String,
    pub content: String,
}

#[async_trait::async_trait]
impl EmailClient for CapturingEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String> {
        use secrecy::ExposeSecret;
        self.sent.write().await.push(SentEmail {
            recipient: recipient.as_ref().expose_secret().clone(),
            subject: subject.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }
}

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub email_client: CapturingEmailClient,
    pub reset_token_store: HashMapResetTokenStore,
}

pub async fn spawn_app() -> TestApp {
    let user_store = HashMapUserStore::new();
    let reset_token_store = HashMapResetTokenStore::new();
    let email_client = CapturingEmailClient::default();

    let jwt_config = JwtConfig {
        jwt_secret: Secret::from("test-secret".to_string()),
        access_ttl_in_seconds: 300,
        refresh_ttl_in_seconds: 86_400,
    };

    let service = AuthService::new(
        user_store,
        reset_token_store.clone(),
        email_client.clone(),
        jwt_config,
        RESET_LINK_BASE.to_string(),
    );
    let router = service.as_router(None);

    let listener = tokio::net::TcpListener::bind(constants::test::APP_ADDRESS)
        .await
        .expect("Failed to bind ephemeral port");
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server failed");
    });

    TestApp {
        address,
        http_client: reqwest::Client::new(),
        email_client,
        reset_token_store,
    }
}

impl TestApp {
    pub async fn post_register(&self, body: &serde_json::Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/register", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login(&self, body: &serde_json::Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/login", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_refresh(&self, body: &serde_json::Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/refresh", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_forgot_password(&self, body: &serde_json::Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/forgot-password", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_reset_password(
        &self,
        token: &str,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        self.http_client
            .post(format!("{}/reset-password/{}", self.address, token))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a user and assert it succeeded.
    pub async fn register_user(&self, email: &str, password: &str, role: &str) {
        let response = self
            .post_register(&serde_json::json!({
                "email": email,
                "password": password,
                "role": role,
                "name": "Test",
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);
    }

    /// Pull the reset token out of the most recent captured email.
    pub async fn last_reset_token(&self) -> String {
        let sent = self.email_client.sent.read().await;
        let last = sent.last().expect("No email was sent");
        let marker = format!("{}/reset-password/", RESET_LINK_BASE);
        let start = last
            .content
            .find(&marker)
            .expect("Email does not contain a reset link")
            + marker.len();
        last.content[start..]
            .split_whitespace()
            .next()
            .expect("Reset link carries no token")
            .to_string()
    }
}
