use chrono::{DateTime, Utc};
use gatehouse_core::{Email, PasswordResetToken, ResetTokenStore, ResetTokenStoreError};
use secrecy::{ExposeSecret, Secret};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresResetTokenStore {
    pool: sqlx::PgPool,
}

impl PostgresResetTokenStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresResetTokenStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ResetTokenRow {
    id: Uuid,
    user_id: Uuid,
    email: String,
    token: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

#[async_trait::async_trait]
impl ResetTokenStore for PostgresResetTokenStore {
    #[tracing::instrument(name = "Storing reset token in PostgreSQL", skip_all)]
    async fn replace_token(&self, token: PasswordResetToken) -> Result<(), ResetTokenStoreError> {
        // Delete-then-insert in one transaction so at most one token is ever
        // live per user, even under concurrent requests
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ResetTokenStoreError::UnexpectedError(e.to_string()))?;

        sqlx::query("DELETE FROM password_reset_tokens WHERE user_id = $1")
            .bind(token.user_id())
            .execute(&mut *tx)
            .await
            .map_err(|e| ResetTokenStoreError::UnexpectedError(e.to_string()))?;

        sqlx::query(
            r#"
                INSERT INTO password_reset_tokens (id, user_id, token, created_at, expires_at)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(token.id())
        .bind(token.user_id())
        .bind(token.token())
        .bind(token.created_at())
        .bind(token.expires_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| ResetTokenStoreError::UnexpectedError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| ResetTokenStoreError::UnexpectedError(e.to_string()))?;

        Ok(())
    }

    #[tracing::instrument(name = "Fetching reset token from PostgreSQL", skip_all)]
    async fn get_token(&self, token: &str) -> Result<PasswordResetToken, ResetTokenStoreError> {
        let row = sqlx::query_as::<_, ResetTokenRow>(
            r#"
                SELECT t.id, t.user_id, u.email, t.token, t.created_at, t.expires_at
                FROM password_reset_tokens t
                JOIN users u ON u.id = t.user_id
                WHERE t.token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ResetTokenStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(ResetTokenStoreError::TokenNotFound);
        };

        let email = Email::try_from(Secret::from(row.email))
            .map_err(|e| ResetTokenStoreError::UnexpectedError(e.to_string()))?;

        Ok(PasswordResetToken::parse(
            row.id,
            row.user_id,
            email,
            row.token,
            row.created_at,
            row.expires_at,
        ))
    }

    #[tracing::instrument(name = "Deleting reset token from PostgreSQL", skip_all)]
    async fn delete_token(&self, token: &str) -> Result<(), ResetTokenStoreError> {
        let result = sqlx::query("DELETE FROM password_reset_tokens WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| ResetTokenStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ResetTokenStoreError::TokenNotFound);
        }

        Ok(())
    }
}
