use std::time::Duration;

use anyhow::{anyhow, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use userdel_core::entities::AccountId;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The account id of the caller
    sub: String,
    /// Expiry time as Unix timestamp
    exp: usize,
}

struct Key {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Key {
    fn new(secret: &str) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_ref());
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        Self {
            encoding_key,
            decoding_key,
        }
    }

    /// A 256-bit base64 encoded secret that only lives as long as the process.
    fn random() -> Self {
        let secret = STANDARD.encode(rand::random::<[u8; 32]>());
        Self::new(&secret)
    }
}

/// Verifies the bearer credentials of incoming invocations.
pub struct JwtState {
    key: Key,
    time_valid: Duration,
}

impl JwtState {
    pub fn new(secret: Option<&str>, time_valid: Duration) -> Self {
        let key = match secret {
            Some(secret) if !secret.is_empty() => Key::new(secret),
            _ => {
                warn!("No JWT secret configured: tokens are only valid until the server restarts");
                Key::random()
            }
        };
        Self { key, time_valid }
    }

    pub fn generate_token(&self, caller: &AccountId) -> Result<String> {
        if !caller.is_valid() {
            return Err(anyhow!("Refusing to issue a token for an empty account id"));
        }
        let exp = usize::try_from((OffsetDateTime::now_utc() + self.time_valid).unix_timestamp())?;
        let claims = Claims {
            sub: caller.to_string(),
            exp,
        };
        let token = encode(&Header::default(), &claims, &self.key.encoding_key)?;
        Ok(token)
    }

    pub fn validate_token_and_get_caller(&self, token: &str) -> Result<AccountId> {
        let token_data = decode::<Claims>(token, &self.key.decoding_key, &Validation::default())?;
        Ok(token_data.claims.sub.into())
    }
}
