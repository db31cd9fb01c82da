//! Session tokens.
//!
//! A token is a signed, stateless assertion of `{user_id, role, iat, exp}`;
//! `issue_token`/`verify_token` are a pure function pair around the HMAC
//! keys built once at startup. Expiry is embedded and validated on every
//! verification.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::auth::users::Role;

/// Token lifetime: 24 hours.
const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID.
    pub sub: String,
    /// Role at issue time.
    pub role: Role,
    /// Expiration time (Unix timestamp).
    pub exp: u64,
    /// Issued at time (Unix timestamp).
    pub iat: u64,
}

/// Signing and verification keys derived from the shared secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Issue a signed token embedding identity and role.
pub fn issue_token(
    keys: &TokenKeys,
    user_id: Uuid,
    role: Role,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();
    let claims = Claims {
        sub: user_id.to_string(),
        role,
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };
    encode(&Header::default(), &claims, &keys.encoding)
}

/// Verify signature, shape, and expiry; return the decoded claims.
pub fn verify_token(keys: &TokenKeys, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(token, &keys.decoding, &Validation::default())?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenKeys {
        TokenKeys::from_secret("unit-test-secret")
    }

    #[test]
    fn issue_and_verify_round_trip() {
        let keys = keys();
        let user_id = Uuid::new_v4();
        let token = issue_token(&keys, user_id, Role::Editor).unwrap();

        let claims = verify_token(&keys, &token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, Role::Editor);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_garbage_token() {
        assert!(verify_token(&keys(), "invalid.token.here").is_err());
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = issue_token(&keys(), Uuid::new_v4(), Role::Viewer).unwrap();
        let other = TokenKeys::from_secret("a-different-secret");
        assert!(verify_token(&other, &token).is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let keys = keys();
        let now = unix_now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            role: Role::Admin,
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).unwrap();
        assert!(verify_token(&keys, &token).is_err());
    }
}
