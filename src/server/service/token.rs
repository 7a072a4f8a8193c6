//! Signing and verification of bearer tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

/// JWT claims carried by every issued token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id as a decimal string.
    sub: String,
    iat: i64,
    exp: i64,
}

/// Issues and verifies HS256 tokens with a shared secret.
///
/// Built once at startup from configuration and stored in `AppState`.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    /// - `secret` - Shared HMAC secret
    /// - `ttl_hours` - Lifetime of issued tokens
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Issues a token for the given user.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(jsonwebtoken::errors::Error)` - Signing failed
    pub fn issue(&self, user_id: i32) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verifies a token and extracts the user id it was issued for.
    ///
    /// Checks signature and expiry. Whether the user still exists is up to the caller.
    ///
    /// # Returns
    /// - `Ok(i32)` - User id from the subject claim
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired or malformed token
    /// - `Err(AuthError::MalformedSubject)` - Subject is not a user id
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map_err(AuthError::InvalidToken)?;

        data.claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::MalformedSubject(data.claims.sub.clone()))
    }
}
