//! Claims carried by Quill-issued access tokens.

use serde::{Deserialize, Serialize};

/// Claims included in our backend-issued access tokens.
///
/// Wire format is the standard compact JWS: three dot-separated base64url
/// segments signed with HMAC-SHA256. Claim keys are fixed; `id` is the custom
/// claim holding the user's database identifier.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Issuer (matches `SecurityConfig::issuer`)
    pub iss: String,
    /// Subject: the user's email
    pub sub: String,
    /// User identifier (custom claim)
    pub id: i64,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
