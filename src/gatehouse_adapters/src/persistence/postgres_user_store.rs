use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use gatehouse_core::{
    AuthenticatedUser, Email, Password, User, UserStore, UserStoreError,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    role: String,
    first_name: String,
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let password = user.password().clone();
        let password_hash = compute_password_hash(password)
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let query = sqlx::query(
            r#"
                INSERT INTO users (id, username, email, password_hash, role, first_name)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id())
        .bind(user.username())
        .bind(user.email().as_ref().expose_secret())
        .bind(password_hash.expose_secret())
        .bind(user.role().as_str())
        .bind(user.first_name());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, email, password_hash, role, first_name
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        User::parse(
            row.id,
            row.username,
            Secret::from(row.email),
            Secret::from(row.password_hash),
            &row.role,
            row.first_name,
        )
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
    }

    #[tracing::instrument(name = "Validating user credentials in PostgreSQL", skip_all)]
    async fn authenticate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<AuthenticatedUser, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, email, password_hash, role, first_name
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        verify_password_hash(Secret::from(row.password_hash), password.clone())
            .await
            .map_err(|_| UserStoreError::IncorrectPassword)?;

        let email = Email::try_from(Secret::from(row.email))
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let role = row
            .role
            .parse()
            .map_err(|e: gatehouse_core::UserError| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(AuthenticatedUser::new(row.id, email, role))
    }

    #[tracing::instrument(name = "Set new password", skip_all)]
    async fn set_new_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), UserStoreError> {
        let password_hash = compute_password_hash(new_password)
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let result = sqlx::query(
            r#"
                UPDATE users
                SET password_hash = $1
                WHERE email = $2
            "#,
        )
        .bind(password_hash.expose_secret())
        .bind(email.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }
}

#[tracing::instrument(name = "Verify password hash", skip_all)]
async fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Password,
) -> Result<(), String> {
    let current_span: tracing::Span = tracing::Span::current();
    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(expected_password_hash.expose_secret())
                    .map_err(|e| e.to_string())?;

            Argon2::new(
                Algorithm::Argon2id,
                Version::V0x13,
                Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
            )
            .verify_password(
                password_candidate.as_ref().expose_secret().as_bytes(),
                &expected_password_hash,
            )
            .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
async fn compute_password_hash(password: Password) -> Result<Secret<String>, String> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            let hasher = Argon2::new(
                Algorithm::Argon2id,
                Version::V0x13,
                Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
            );
            hasher
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| Secret::from(h.to_string()))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}
