use gatehouse_adapters::config::Settings;
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Configure and return a PostgreSQL connection pool
///
/// Creates a connection pool from the configured database URL and runs all
/// pending migrations.
///
/// # Panics
/// Panics if unable to create the pool or run migrations
pub async fn configure_postgresql(config: &Settings) -> PgPool {
    let db_url = config.postgres.url.expose_secret();

    let pg_pool = get_postgres_pool(db_url)
        .await
        .expect("Failed to create Postgres connection pool");

    // Run database migrations
    sqlx::migrate!()
        .run(&pg_pool)
        .await
        .expect("Failed to run migrations");

    pg_pool
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}
