use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::Claims;
use crate::auth::principal::Identity;
use crate::error::AuthError;
use crate::state::security_config::SecurityConfig;

/// Mint a HS256 JWT access token for `identity`, valid for `valid_for` from
/// `now`.
///
/// `now` is a parameter rather than read internally so tests can pin the
/// issuance instant. Pure computation: nothing is persisted, and two calls at
/// different instants yield textually different tokens.
pub fn mint_token(
    identity: &Identity,
    valid_for: Duration,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AuthError> {
    // Claims carry whole seconds, so anything under one second would mint a
    // token that is expired at birth.
    if valid_for.as_secs() == 0 {
        return Err(AuthError::validation(
            "token lifetime must be a positive duration of at least one second",
        ));
    }

    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AuthError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let exp = iat + valid_for.as_secs() as i64;

    let claims = Claims {
        iss: security.issuer.clone(),
        sub: identity.subject.clone(),
        id: identity.id,
        iat,
        exp,
    };

    let token = encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AuthError::config(format!("Failed to encode JWT: {e}")))?;

    tracing::debug!(
        user_id = identity.id,
        ttl_secs = valid_for.as_secs(),
        "minted access token"
    );

    Ok(token)
}

/// Check whether `token` is structurally well-formed, signature-valid against
/// the shared secret, unexpired, and carries the configured issuer.
///
/// Always returns a boolean and never an error: every failure mode collapses
/// into `false` so callers cannot leak which check failed. Claims beyond the
/// registered set are not inspected here; shape errors (e.g. a missing `id`
/// claim) belong to the resolution path.
pub fn valid_token(token: &str, security: &SecurityConfig) -> bool {
    decode::<serde_json::Value>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation_for(security),
    )
    .is_ok()
}

/// Validation settings shared by `valid_token` and the resolution path:
/// pinned algorithm, required matching issuer, exp checked with zero leeway
/// so `exp > now` holds exactly.
pub(crate) fn validation_for(security: &SecurityConfig) -> Validation {
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;
    validation.set_issuer(&[&security.issuer]);
    validation
}
