use color_eyre::eyre::Result;
use gatehouse_adapters::{
    auth::JwtConfig,
    config::Settings,
    email::PostmarkEmailClient,
    persistence::{PostgresResetTokenStore, PostgresUserStore},
};
use gatehouse_auth_service::{AuthService, configure_postgresql};
use gatehouse_core::Email;
use reqwest::Client as HttpClient;
use secrecy::Secret;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration
    let config = Settings::load()?;

    // Setup database connection pool and run migrations
    let pg_pool = configure_postgresql(&config).await;

    // Create stores
    let user_store = PostgresUserStore::new(pg_pool.clone());
    let reset_token_store = PostgresResetTokenStore::new(pg_pool);

    // Create email client
    let http_client = HttpClient::builder()
        .timeout(config.email_client.timeout())
        .build()?;

    let email_client = PostmarkEmailClient::new(
        config.email_client.base_url.clone(),
        Email::try_from(Secret::from(config.email_client.sender.clone()))?,
        config.email_client.auth_token.clone(),
        http_client,
    );

    let jwt_config = JwtConfig {
        jwt_secret: config.jwt.secret.clone(),
        access_ttl_in_seconds: config.jwt.access_ttl_in_seconds,
        refresh_ttl_in_seconds: config.jwt.refresh_ttl_in_seconds,
    };

    // Create the auth service
    let auth_service = AuthService::new(
        user_store,
        reset_token_store,
        email_client,
        jwt_config,
        config.reset.link_base_url.clone(),
    );

    let allowed_origins =
        (!config.app.allowed_origins.is_empty()).then(|| config.app.allowed_origins.clone());

    // Run as standalone server
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.app.host, config.app.port)).await?;
    tracing::info!("Starting auth service...");

    auth_service
        .run_standalone(listener, allowed_origins)
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
