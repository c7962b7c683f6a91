use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::account::{Account, Role};

/// Claims carried in the bearer token. `sub` is the account email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

/// HS256 signing and verification keys derived from `JWT_SECRET`.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry: Duration,
}

impl TokenKeys {
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry: Duration::hours(expiry_hours),
        }
    }

    pub fn issue(&self, account: &Account) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: account.email.clone(),
            role: account.role,
            exp: (now + self.expiry).timestamp(),
            iat: now.timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT generation error: {e}")))
    }

    /// Rejects bad signatures and expired tokens with `Unauthorized`.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!("Rejected bearer token: {e}");
                AppError::Unauthorized
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account {
            id: 3,
            email: "officer@uni.edu".to_string(),
            password_hash: String::new(),
            role: Role::PlacementOfficer,
            first_name: None,
            last_name: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_issued_token_verifies() {
        let keys = TokenKeys::new("test-secret", 1);
        let token = keys.issue(&account()).unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, "officer@uni.edu");
        assert_eq!(claims.role, Role::PlacementOfficer);
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let token = TokenKeys::new("secret-a", 1).issue(&account()).unwrap();
        let err = TokenKeys::new("secret-b", 1).verify(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Default validation allows 60s of leeway, so go well past it.
        let keys = TokenKeys::new("test-secret", -2);
        let token = keys.issue(&account()).unwrap();
        assert!(matches!(keys.verify(&token), Err(AppError::Unauthorized)));
    }
}
