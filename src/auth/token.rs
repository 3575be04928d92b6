use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Role;

/// Token lifetime. Role changes to an account do not reach tokens already
/// issued for it; the accepted staleness window is bounded by this value.
const TOKEN_TTL_SECS: i64 = 3600;

/// Claims embedded in every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject claim, the account username.
    pub sub: String,
    /// Role at the time of issuance.
    pub role: Role,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Issues and verifies signed, time-limited bearer tokens. Verification is
/// pure: no store lookup, no revocation list. A compromised token stays
/// valid until it expires.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No leeway: the one-hour lifetime is an exact bound.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Signs a token for the given account, expiring one hour from now.
    pub fn issue(&self, username: &str, role: Role) -> Result<String> {
        self.issue_at(username, role, Utc::now())
    }

    fn issue_at(&self, username: &str, role: Role, issued_at: DateTime<Utc>) -> Result<String> {
        let claims = Claims {
            sub: username.to_string(),
            role,
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| Error::Config(format!("failed to sign token: {e}")))
    }

    /// Decodes a token and checks its signature and expiry. Malformed tokens,
    /// bad signatures, expired timestamps, and missing claim fields all come
    /// back as `Error::InvalidToken`.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("token rejected: {}", kind_description(&e));
                Error::InvalidToken
            })
    }
}

fn kind_description(err: &jsonwebtoken::errors::Error) -> &'static str {
    use jsonwebtoken::errors::ErrorKind;
    match err.kind() {
        ErrorKind::ExpiredSignature => "expired",
        ErrorKind::InvalidSignature => "bad signature",
        ErrorKind::InvalidToken => "malformed",
        ErrorKind::Json(_) => "missing or malformed claims",
        _ => "invalid",
    }
}
