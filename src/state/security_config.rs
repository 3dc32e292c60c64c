use std::env;
use std::time::Duration;

use jsonwebtoken::Algorithm;

use crate::error::AuthError;

/// Default/maximum token lifetime: 14 days.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(14 * 24 * 60 * 60);

/// Minimum accepted secret length in bytes.
const MIN_SECRET_LEN: usize = 32;

/// Configuration for JWT security settings.
///
/// Built once at startup and shared by reference; every field is immutable
/// afterwards, so concurrent reads need no synchronization.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Issuer string stamped into and required of every token (`iss` claim)
    pub issuer: String,
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
    /// Lifetime used by callers that do not pick their own duration
    pub token_ttl: Duration,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given issuer and JWT secret.
    pub fn new(issuer: impl Into<String>, jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            issuer: issuer.into(),
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Load and validate security configuration from environment variables.
    ///
    /// Required: `QUILL_JWT_SECRET` (at least 32 bytes), `QUILL_JWT_ISSUER`
    /// (non-empty). Optional: `QUILL_TOKEN_TTL_SECS` (defaults to 14 days).
    /// Any violation is a fatal `AuthError::Config` and should prevent
    /// process start.
    pub fn from_env() -> Result<Self, AuthError> {
        let jwt_secret = env::var("QUILL_JWT_SECRET")
            .map_err(|_| AuthError::config("QUILL_JWT_SECRET must be set"))?;
        if jwt_secret.len() < MIN_SECRET_LEN {
            return Err(AuthError::config(format!(
                "QUILL_JWT_SECRET is too short. It should be at least {MIN_SECRET_LEN} bytes for security."
            )));
        }

        let issuer = env::var("QUILL_JWT_ISSUER")
            .map_err(|_| AuthError::config("QUILL_JWT_ISSUER must be set"))?;
        if issuer.trim().is_empty() {
            return Err(AuthError::config("QUILL_JWT_ISSUER must not be empty"));
        }

        let token_ttl = match env::var("QUILL_TOKEN_TTL_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| {
                    AuthError::config(format!(
                        "QUILL_TOKEN_TTL_SECS must be a positive number of seconds, got '{raw}'"
                    ))
                })?;
                if secs == 0 {
                    return Err(AuthError::config(
                        "QUILL_TOKEN_TTL_SECS must be greater than zero",
                    ));
                }
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TOKEN_TTL,
        };

        Ok(Self {
            issuer,
            jwt_secret: jwt_secret.into_bytes(),
            algorithm: Algorithm::HS256,
            token_ttl,
        })
    }
}
