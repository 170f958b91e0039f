//! Auth store.
//!
//! Two states: anonymous (no session) and authenticated (session
//! present). `login` and `register` cross an async backend boundary with
//! explicit failure kinds and a timeout; `logout` clears the session
//! unconditionally. At most one session is active at a time.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;
use tracing::instrument;

use linden_core::{Email, EmailError, UserId};

use crate::models::{Session, TokenPair, User};

/// Length of generated access/refresh tokens.
const TOKEN_LENGTH: usize = 32;

/// Errors that can occur during authentication.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unknown email or wrong password. The two cases are deliberately
    /// not distinguished.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account with this email already exists.
    #[error("an account with this email already exists")]
    EmailTaken,

    /// The email did not parse.
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),

    /// The backend did not answer within the configured timeout.
    #[error("authentication timed out after {0:?}")]
    Timeout(Duration),

    /// The backend failed for a reason of its own.
    #[error("auth backend error: {0}")]
    Backend(String),
}

/// Registration details.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Account email.
    pub email: Email,
    /// Chosen password.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Optional phone number.
    pub phone: Option<String>,
}

/// The async boundary the auth store talks to.
///
/// Implementations validate and fail with explicit kinds - an
/// always-succeeding backend is not a valid implementation of this
/// contract.
pub trait AuthBackend {
    /// Authenticate an existing account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown email or a
    /// wrong password.
    fn login(
        &self,
        email: &Email,
        password: &str,
    ) -> impl Future<Output = Result<User, AuthError>>;

    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailTaken` if the email is already
    /// registered.
    fn register(&self, details: &Registration) -> impl Future<Output = Result<User, AuthError>>;
}

// =============================================================================
// Auth store
// =============================================================================

/// Session lifecycle over an injected [`AuthBackend`].
#[derive(Debug)]
pub struct AuthStore<B: AuthBackend> {
    backend: B,
    timeout: Duration,
    session: Option<Session>,
}

impl<B: AuthBackend> AuthStore<B> {
    /// Create an auth store in the anonymous state.
    ///
    /// Backend calls that take longer than `timeout` fail with
    /// [`AuthError::Timeout`] instead of leaving the caller hanging.
    #[must_use]
    pub const fn new(backend: B, timeout: Duration) -> Self {
        Self {
            backend,
            timeout,
            session: None,
        }
    }

    /// Log in with email and password.
    ///
    /// On success the store transitions to authenticated, replacing any
    /// existing session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email does not parse,
    /// `AuthError::InvalidCredentials` from the backend, or
    /// `AuthError::Timeout` if the backend does not answer in time.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&Session, AuthError> {
        let email = Email::parse(email)?;

        let user = tokio::time::timeout(self.timeout, self.backend.login(&email, password))
            .await
            .map_err(|_| AuthError::Timeout(self.timeout))??;

        Ok(self.start_session(user))
    }

    /// Register a new account and log it in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailTaken` from the backend, or
    /// `AuthError::Timeout` if the backend does not answer in time.
    #[instrument(skip(self, details), fields(email = %details.email))]
    pub async fn register(&mut self, details: &Registration) -> Result<&Session, AuthError> {
        let user = tokio::time::timeout(self.timeout, self.backend.register(details))
            .await
            .map_err(|_| AuthError::Timeout(self.timeout))??;

        Ok(self.start_session(user))
    }

    /// Log out. Unconditional; a no-op when already anonymous.
    pub fn logout(&mut self) {
        self.session = None;
    }

    /// The active session, if authenticated.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The logged-in user, if authenticated.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// Whether a session is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    fn start_session(&mut self, user: User) -> &Session {
        self.session.insert(Session {
            user,
            tokens: generate_token_pair(),
        })
    }
}

/// Generate an opaque access/refresh token pair.
fn generate_token_pair() -> TokenPair {
    TokenPair {
        access: random_token(),
        refresh: random_token(),
    }
}

fn random_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

// =============================================================================
// In-memory backend
// =============================================================================

struct StoredAccount {
    password: String,
    user: User,
}

/// Development backend holding registered accounts in memory.
///
/// Implements the full contract: unknown emails and wrong passwords fail
/// with `InvalidCredentials`, duplicate registrations with `EmailTaken`.
#[derive(Default)]
pub struct InMemoryAuthBackend {
    accounts: Mutex<HashMap<String, StoredAccount>>,
}

impl InMemoryAuthBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with one account, for tests and
    /// demo runs.
    #[must_use]
    pub fn with_account(email: Email, password: &str, first_name: &str, last_name: &str) -> Self {
        let backend = Self::new();
        {
            let mut accounts = backend.accounts.lock().expect("auth backend lock poisoned");
            let user = User {
                id: UserId::new(1),
                email: email.clone(),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                phone: None,
                avatar: None,
                created_at: Utc::now(),
            };
            accounts.insert(
                email.as_str().to_string(),
                StoredAccount {
                    password: password.to_string(),
                    user,
                },
            );
        }
        backend
    }
}

impl AuthBackend for InMemoryAuthBackend {
    async fn login(&self, email: &Email, password: &str) -> Result<User, AuthError> {
        let accounts = self.accounts.lock().expect("auth backend lock poisoned");
        let account = accounts
            .get(email.as_str())
            .ok_or(AuthError::InvalidCredentials)?;
        if account.password != password {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(account.user.clone())
    }

    async fn register(&self, details: &Registration) -> Result<User, AuthError> {
        let mut accounts = self.accounts.lock().expect("auth backend lock poisoned");
        if accounts.contains_key(details.email.as_str()) {
            return Err(AuthError::EmailTaken);
        }

        let id = i32::try_from(accounts.len() + 1).map_err(|e| AuthError::Backend(e.to_string()))?;
        let user = User {
            id: UserId::new(id),
            email: details.email.clone(),
            first_name: details.first_name.clone(),
            last_name: details.last_name.clone(),
            phone: details.phone.clone(),
            avatar: None,
            created_at: Utc::now(),
        };
        accounts.insert(
            details.email.as_str().to_string(),
            StoredAccount {
                password: details.password.clone(),
                user: user.clone(),
            },
        );
        Ok(user)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(1);

    fn registration(email: &str) -> Registration {
        Registration {
            email: Email::parse(email).unwrap(),
            password: "wool-socks-9".to_string(),
            first_name: "June".to_string(),
            last_name: "Calloway".to_string(),
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let mut auth = AuthStore::new(InMemoryAuthBackend::new(), TIMEOUT);
        assert!(!auth.is_authenticated());

        auth.register(&registration("june@example.com")).await.unwrap();
        assert!(auth.is_authenticated());

        auth.logout();
        assert!(auth.session().is_none());

        let session = auth
            .login("june@example.com", "wool-socks-9")
            .await
            .unwrap();
        assert_eq!(session.user.email.as_str(), "june@example.com");
        assert_eq!(session.tokens.access.len(), TOKEN_LENGTH);
        assert_ne!(session.tokens.access, session.tokens.refresh);
    }

    #[tokio::test]
    async fn test_login_unknown_email_fails() {
        let mut auth = AuthStore::new(InMemoryAuthBackend::new(), TIMEOUT);
        let err = auth.login("nobody@example.com", "anything").await;
        assert!(matches!(err, Err(AuthError::InvalidCredentials)));
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_wrong_password_fails() {
        let backend = InMemoryAuthBackend::with_account(
            Email::parse("june@example.com").unwrap(),
            "wool-socks-9",
            "June",
            "Calloway",
        );
        let mut auth = AuthStore::new(backend, TIMEOUT);
        let err = auth.login("june@example.com", "guess").await;
        assert!(matches!(err, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_fails() {
        let mut auth = AuthStore::new(InMemoryAuthBackend::new(), TIMEOUT);
        auth.register(&registration("june@example.com")).await.unwrap();

        let err = auth.register(&registration("june@example.com")).await;
        assert!(matches!(err, Err(AuthError::EmailTaken)));
        // The failed attempt does not disturb the active session
        assert!(auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_replaces_existing_session() {
        let mut auth = AuthStore::new(InMemoryAuthBackend::new(), TIMEOUT);
        auth.register(&registration("june@example.com")).await.unwrap();
        let first = auth.session().unwrap().tokens.clone();

        auth.login("june@example.com", "wool-socks-9").await.unwrap();
        let second = auth.session().unwrap().tokens.clone();

        // One session at a time; a new login issues fresh tokens
        assert_ne!(first.access, second.access);
    }

    struct StalledBackend;

    impl AuthBackend for StalledBackend {
        async fn login(&self, _email: &Email, _password: &str) -> Result<User, AuthError> {
            std::future::pending().await
        }

        async fn register(&self, _details: &Registration) -> Result<User, AuthError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_login_times_out() {
        let mut auth = AuthStore::new(StalledBackend, Duration::from_millis(10));
        let err = auth.login("june@example.com", "wool-socks-9").await;
        assert!(matches!(err, Err(AuthError::Timeout(_))));
        assert!(!auth.is_authenticated());
    }
}
