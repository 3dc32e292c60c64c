#![allow(dead_code)]

// Shared fixtures for the integration suites.

use std::collections::HashMap;

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use quill_auth::{AuthError, Identity, SecurityConfig, User, UserStore};
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

// Logging is auto-installed for every test binary that pulls in this module.
#[ctor::ctor]
fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(
        "quill-test",
        "test_secret_key_for_testing_purposes_only".as_bytes(),
    )
}

pub fn test_identity() -> Identity {
    Identity {
        id: 42,
        subject: "user@example.com".to_string(),
    }
}

/// In-memory user store standing in for the backend's database.
pub struct InMemoryUsers {
    users: HashMap<i64, User>,
}

impl InMemoryUsers {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id, u)).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            users: HashMap::new(),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUsers {
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, AuthError> {
        Ok(self.users.get(&id).cloned())
    }
}

/// Store whose lookups always fail, for error-propagation tests.
pub struct BrokenUsers;

#[async_trait]
impl UserStore for BrokenUsers {
    async fn find_user_by_id(&self, _id: i64) -> Result<Option<User>, AuthError> {
        Err(AuthError::internal("user store unavailable"))
    }
}
