//! HS256 bearer tokens.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scribe_core::ports::{AuthError, TokenClaims, TokenService};

const DEFAULT_SECRET: &str = "change-me-in-production";

/// Signing secret, token lifetime and issuer.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            expiration_hours: 24,
            issuer: "scribe-api".to_string(),
        }
    }
}

impl JwtConfig {
    /// Load from `JWT_SECRET`, `JWT_EXPIRATION_HOURS` and `JWT_ISSUER`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let secret = std::env::var("JWT_SECRET").unwrap_or(defaults.secret);

        if secret == DEFAULT_SECRET {
            let production = std::env::var("RUST_ENV")
                .is_ok_and(|v| matches!(v.as_str(), "production" | "prod"));
            if production {
                tracing::error!("JWT_SECRET is unset in production; tokens use the built-in secret");
            } else {
                tracing::warn!("JWT_SECRET is unset, using the built-in development secret");
            }
        }

        Self {
            secret,
            expiration_hours: std::env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.expiration_hours),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    iat: i64,
    exp: i64,
    iss: String,
}

/// [`TokenService`] backed by a shared HMAC secret.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let mut validation = Validation::default();
        validation.set_issuer(&[&config.issuer]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            config,
        }
    }
}

impl TokenService for JwtTokenService {
    fn generate_token(&self, user_id: Uuid) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + TimeDelta::hours(self.config.expiration_hours)).timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(TokenClaims {
            user_id: data.claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str, expiration_hours: i64, issuer: &str) -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret: secret.to_string(),
            expiration_hours,
            issuer: issuer.to_string(),
        })
    }

    #[test]
    fn test_round_trips_subject() {
        let tokens = service("s3cret", 1, "scribe-test");
        let user_id = Uuid::new_v4();

        let token = tokens.generate_token(user_id).unwrap();

        assert_eq!(tokens.validate_token(&token).unwrap().user_id, user_id);
    }

    #[test]
    fn test_rejects_garbage() {
        let tokens = service("s3cret", 1, "scribe-test");
        assert!(matches!(
            tokens.validate_token("not.a.jwt"),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_expired_token() {
        let token = service("s3cret", -2, "scribe-test")
            .generate_token(Uuid::new_v4())
            .unwrap();

        assert!(matches!(
            service("s3cret", 1, "scribe-test").validate_token(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_foreign_issuer_or_secret() {
        let verifier = service("s3cret", 1, "scribe-test");

        let other_issuer = service("s3cret", 1, "someone-else")
            .generate_token(Uuid::new_v4())
            .unwrap();
        let other_secret = service("other", 1, "scribe-test")
            .generate_token(Uuid::new_v4())
            .unwrap();

        for token in [other_issuer, other_secret] {
            assert!(matches!(
                verifier.validate_token(&token),
                Err(AuthError::InvalidToken(_))
            ));
        }
    }
}
