#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod error;
pub mod repos;
pub mod state;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use auth::claims::Claims;
pub use auth::jwt::{mint_token, valid_token};
pub use auth::principal::{resolve_identity, resolve_principal, Identity, Principal};
pub use error::AuthError;
pub use repos::users::{User, UserStore};
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
