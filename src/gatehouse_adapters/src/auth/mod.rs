pub mod jwt;

pub use jwt::{
    Claims, JwtConfig, TokenAuthError, TokenPair, generate_token_pair, refresh_access_token,
    validate_access_token,
};
