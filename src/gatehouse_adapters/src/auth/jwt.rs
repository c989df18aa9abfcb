use chrono::Utc;
use gatehouse_core::{AuthenticatedUser, Email, Role};
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, ser::SerializeStruct};
use thiserror::Error;
use uuid::Uuid;

pub const ACCESS_TOKEN_TYPE: &str = "access";
pub const REFRESH_TOKEN_TYPE: &str = "refresh";

#[derive(Clone)]
pub struct JwtConfig {
    pub jwt_secret: Secret<String>,
    pub access_ttl_in_seconds: i64,
    pub refresh_ttl_in_seconds: i64,
}

impl JwtConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Error)]
pub enum TokenAuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token error: {0}")]
    TokenError(jsonwebtoken::errors::Error),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Both tokens are self-contained: identity travels in the claims and
/// nothing is stored server-side. The refresh token carries the same
/// identity so a new access token can be minted from it alone.
#[derive(Debug, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub email: Secret<String>,
    pub role: Role,
    pub token_type: String,
    pub exp: usize,
}

impl Serialize for Claims {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Claims", 5)?;
        state.serialize_field("sub", &self.sub)?;
        state.serialize_field("email", &self.email.expose_secret())?;
        state.serialize_field("role", &self.role)?;
        state.serialize_field("token_type", &self.token_type)?;
        state.serialize_field("exp", &self.exp)?;
        state.end()
    }
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Mint the access/refresh pair returned by a successful login.
pub fn generate_token_pair(
    user: &AuthenticatedUser,
    config: &JwtConfig,
) -> Result<TokenPair, TokenAuthError> {
    let access = generate_token(user, ACCESS_TOKEN_TYPE, config.access_ttl_in_seconds, config)?;
    let refresh = generate_token(
        user,
        REFRESH_TOKEN_TYPE,
        config.refresh_ttl_in_seconds,
        config,
    )?;
    Ok(TokenPair { access, refresh })
}

/// Decode a token and require it to be an access token.
pub fn validate_access_token(token: &str, config: &JwtConfig) -> Result<Claims, TokenAuthError> {
    let claims = decode_claims(token, config)?;
    if claims.token_type != ACCESS_TOKEN_TYPE {
        return Err(TokenAuthError::InvalidToken);
    }
    Ok(claims)
}

/// Exchange a valid refresh token for a fresh access token.
pub fn refresh_access_token(
    refresh_token: &str,
    config: &JwtConfig,
) -> Result<String, TokenAuthError> {
    let claims = decode_claims(refresh_token, config)?;
    if claims.token_type != REFRESH_TOKEN_TYPE {
        return Err(TokenAuthError::InvalidToken);
    }

    let id = Uuid::parse_str(&claims.sub).map_err(|_| TokenAuthError::InvalidToken)?;
    let email = Email::try_from(claims.email).map_err(|_| TokenAuthError::InvalidToken)?;
    let user = AuthenticatedUser::new(id, email, claims.role);

    generate_token(
        &user,
        ACCESS_TOKEN_TYPE,
        config.access_ttl_in_seconds,
        config,
    )
}

fn generate_token(
    user: &AuthenticatedUser,
    token_type: &str,
    ttl_seconds: i64,
    config: &JwtConfig,
) -> Result<String, TokenAuthError> {
    let delta = chrono::Duration::try_seconds(ttl_seconds).ok_or(
        TokenAuthError::UnexpectedError("Failed to create token duration".to_string()),
    )?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(TokenAuthError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    let exp: usize = exp
        .try_into()
        .map_err(|_| TokenAuthError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;

    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.as_ref().clone(),
        role: user.role,
        token_type: token_type.to_string(),
        exp,
    };

    create_token(&claims, config.as_bytes())
}

fn decode_claims(token: &str, config: &JwtConfig) -> Result<Claims, TokenAuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(TokenAuthError::TokenError)
}

fn create_token(claims: &Claims, secret: &[u8]) -> Result<String, TokenAuthError> {
    encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(TokenAuthError::TokenError)
}
