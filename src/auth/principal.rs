//! Claim extraction and principal resolution.
//!
//! The original issuance path never re-checked a token before extracting
//! claims; here extraction re-validates internally and fails loudly, so a
//! caller that skips `valid_token` still cannot read claims out of a bad
//! token.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, DecodingKey};

use crate::auth::claims::Claims;
use crate::auth::jwt::validation_for;
use crate::error::AuthError;
use crate::repos::users::UserStore;
use crate::state::security_config::SecurityConfig;

/// Role granted to every authenticated user.
pub const DEFAULT_ROLE: &str = "ROLE_USER";

/// Identity encoded into a token: user identifier plus subject (email).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub subject: String,
}

/// Authenticated caller attached to a request by the (external) middleware.
/// Built per request from a valid token, discarded at request end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i64,
    pub subject: String,
    pub roles: Vec<String>,
}

/// Verify `token` and decode its claims, mapping failures onto the error
/// taxonomy. Signature/structure/expiry problems surface first; only a token
/// that passes those checks can be `MalformedToken` (claims absent or of the
/// wrong shape).
pub(crate) fn resolve_claims(
    token: &str,
    security: &SecurityConfig,
) -> Result<Claims, AuthError> {
    let data = decode::<serde_json::Value>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation_for(security),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
        _ => AuthError::InvalidToken,
    })?;

    serde_json::from_value(data.claims).map_err(|e| AuthError::malformed_token(e.to_string()))
}

/// Extract the identity encoded in `token`.
pub fn resolve_identity(token: &str, security: &SecurityConfig) -> Result<Identity, AuthError> {
    let claims = resolve_claims(token, security)?;
    Ok(Identity {
        id: claims.id,
        subject: claims.sub,
    })
}

/// Resolve `token` to an authenticated principal.
///
/// Extracts the identity, then loads the user record through the external
/// store keyed by the `id` claim. A valid token whose user has been deleted
/// since issuance is `UnknownUser`, which callers must treat differently from
/// `MalformedToken`. Subject comes from the already-verified claims; only the
/// identifier is cross-checked against the store.
pub async fn resolve_principal(
    token: &str,
    security: &SecurityConfig,
    store: &(impl UserStore + ?Sized),
) -> Result<Principal, AuthError> {
    let identity = resolve_identity(token, security)?;

    let user = store
        .find_user_by_id(identity.id)
        .await?
        .ok_or_else(|| {
            tracing::warn!(user_id = identity.id, "valid token references a user with no record");
            AuthError::unknown_user(identity.id)
        })?;

    Ok(Principal {
        user_id: user.id,
        subject: identity.subject,
        roles: vec![DEFAULT_ROLE.to_string()],
    })
}
