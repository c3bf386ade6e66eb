use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;

pub mod kakao;
pub mod password;

/// Claims carried by every access token. `sub` is the user id, `role`
/// mirrors the user's `authorizations.role` at issue time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, role: impl Into<String>) -> Self {
        let expire_minutes = config::config().security.access_token_expire_minutes;
        Self::with_expiry(user_id, role, expire_minutes)
    }

    pub fn with_expiry(user_id: Uuid, role: impl Into<String>, expire_minutes: u64) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            role: role.into(),
            exp: (now + Duration::minutes(expire_minutes as i64)).timestamp(),
            iat: now.timestamp(),
        }
    }

    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

#[derive(Debug)]
pub enum TokenError {
    MissingSecret,
    Generation(String),
    Invalid(String),
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::MissingSecret => write!(f, "JWT secret not configured"),
            TokenError::Generation(msg) => write!(f, "JWT generation error: {}", msg),
            TokenError::Invalid(msg) => write!(f, "Invalid JWT token: {}", msg),
        }
    }
}

impl std::error::Error for TokenError {}

/// Sign claims with an explicit secret (HS256)
pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| TokenError::Generation(e.to_string()))
}

/// Validate a token signature and expiry with an explicit secret
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| TokenError::Invalid(e.to_string()))
}

/// Sign claims with the configured secret
pub fn generate_token(claims: &Claims) -> Result<String, TokenError> {
    encode_token(claims, &config::config().security.secret_key)
}

/// Validate a token against the configured secret
pub fn verify_token(token: &str) -> Result<Claims, TokenError> {
    decode_token(token, &config::config().security.secret_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn token_round_trip() {
        let user_id = Uuid::new_v4();
        let claims = Claims::with_expiry(user_id, "admin", 30);
        let token = encode_token(&claims, SECRET).unwrap();

        let decoded = decode_token(&token, SECRET).unwrap();
        assert_eq!(decoded.sub, user_id.to_string());
        assert_eq!(decoded.role, "admin");
        assert_eq!(decoded.user_id(), Some(user_id));
    }

    #[test]
    fn rejects_wrong_secret() {
        let claims = Claims::with_expiry(Uuid::new_v4(), "user", 30);
        let token = encode_token(&claims, SECRET).unwrap();

        assert!(matches!(
            decode_token(&token, "other-secret"),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_expired_token() {
        let mut claims = Claims::with_expiry(Uuid::new_v4(), "user", 30);
        claims.exp = (Utc::now() - Duration::hours(2)).timestamp();
        claims.iat = claims.exp - 60;
        let token = encode_token(&claims, SECRET).unwrap();

        assert!(matches!(
            decode_token(&token, SECRET),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_garbage_token() {
        assert!(matches!(
            decode_token("not-a-jwt", SECRET),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn empty_secret_is_refused() {
        let claims = Claims::with_expiry(Uuid::new_v4(), "user", 30);
        assert!(matches!(
            encode_token(&claims, ""),
            Err(TokenError::MissingSecret)
        ));
    }
}
