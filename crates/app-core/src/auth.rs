//! Authentication service for CRM Fusion
//!
//! Sign-in and sign-up are delegated to an external identity provider
//! behind the [`AuthProvider`] trait. The provider reports failures with
//! Firebase-style error codes (`auth/user-not-found`, ...); this module
//! validates input before the call and categorises the provider's codes
//! into the small error sets the screens turn into user-facing notices.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Provider error code: no account exists for the email
pub const CODE_USER_NOT_FOUND: &str = "auth/user-not-found";
/// Provider error code: password does not match
pub const CODE_WRONG_PASSWORD: &str = "auth/wrong-password";
/// Provider error code: generic bad credential
pub const CODE_INVALID_CREDENTIAL: &str = "auth/invalid-credential";
/// Provider error code: email already registered
pub const CODE_EMAIL_IN_USE: &str = "auth/email-already-in-use";
/// Provider error code: password rejected as too weak
pub const CODE_WEAK_PASSWORD: &str = "auth/weak-password";
/// Provider error code: malformed email address
pub const CODE_INVALID_EMAIL: &str = "auth/invalid-email";

/// Minimum password length accepted by the in-memory provider
pub const MIN_PASSWORD_LEN: usize = 6;

/// Credential returned by a successful sign-in or sign-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Provider-assigned user id
    pub uid: String,
    /// Email the user authenticated with
    pub email: String,
}

/// Raw failure reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({code})")]
pub struct ProviderError {
    /// Provider error code, e.g. `auth/user-not-found`
    pub code: String,
    /// Human readable message from the provider
    pub message: String,
}

impl ProviderError {
    /// Create a provider error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Categorised sign-in failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignInError {
    /// Email exists but the password is wrong
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No account for this email
    #[error("User not found")]
    UserNotFound,

    /// Anything else the provider reported
    #[error("{0}")]
    Other(String),
}

impl From<ProviderError> for SignInError {
    fn from(err: ProviderError) -> Self {
        match err.code.as_str() {
            CODE_USER_NOT_FOUND => SignInError::UserNotFound,
            CODE_WRONG_PASSWORD | CODE_INVALID_CREDENTIAL => SignInError::InvalidCredentials,
            _ => SignInError::Other(err.message),
        }
    }
}

/// Categorised sign-up failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignUpError {
    /// Email already registered
    #[error("The email address is already in use by another account.")]
    EmailInUse,

    /// Password rejected by the provider
    #[error("Password should be at least 6 characters.")]
    WeakPassword,

    /// Anything else the provider reported
    #[error("{0}")]
    Other(String),
}

impl From<ProviderError> for SignUpError {
    fn from(err: ProviderError) -> Self {
        match err.code.as_str() {
            CODE_EMAIL_IN_USE => SignUpError::EmailInUse,
            CODE_WEAK_PASSWORD => SignUpError::WeakPassword,
            _ => SignUpError::Other(err.message),
        }
    }
}

/// Authentication service error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Required form fields were left empty
    #[error("Missing required fields")]
    MissingFields,

    /// Sign-in failed at the provider
    #[error("Sign-in failed: {0}")]
    SignIn(#[from] SignInError),

    /// Sign-up failed at the provider
    #[error("Sign-up failed: {0}")]
    SignUp(#[from] SignUpError),
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// External identity provider
///
/// The service only relies on the resolve/reject contract: a credential on
/// success, a [`ProviderError`] carrying a categorisable code on failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Sign in with email and password
    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> std::result::Result<Credential, ProviderError>;

    /// Create a new account with email and password
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> std::result::Result<Credential, ProviderError>;
}

/// Authentication service
///
/// Validates form input, forwards to the provider and categorises failures.
/// There is no retry policy: every failure requires a new user-initiated
/// attempt.
pub struct AuthService<P: AuthProvider> {
    provider: Arc<P>,
    current: RwLock<Option<Credential>>,
}

impl<P: AuthProvider> AuthService<P> {
    /// Create a new authentication service over a provider
    pub fn new(provider: P) -> Self {
        Self::with_shared(Arc::new(provider))
    }

    /// Create a service sharing an existing provider handle
    pub fn with_shared(provider: Arc<P>) -> Self {
        Self {
            provider,
            current: RwLock::new(None),
        }
    }

    /// Sign in with email and password
    ///
    /// # Errors
    ///
    /// - `AuthError::MissingFields` - email or password empty
    /// - `AuthError::SignIn` - provider rejected the attempt
    pub async fn login(&self, email: &str, password: &str) -> Result<Credential> {
        validate_fields(email, password)?;

        let credential = self
            .provider
            .sign_in(email.trim(), password)
            .await
            .map_err(|e| {
                tracing::warn!(code = %e.code, "Sign-in rejected by provider");
                SignInError::from(e)
            })?;

        tracing::info!(uid = %credential.uid, "Signed in");
        *self.current.write().await = Some(credential.clone());
        Ok(credential)
    }

    /// Create a new account
    ///
    /// Sign-up does not sign the user in; the login screen is shown next.
    ///
    /// # Errors
    ///
    /// - `AuthError::MissingFields` - email or password empty
    /// - `AuthError::SignUp` - provider rejected the attempt
    pub async fn signup(&self, email: &str, password: &str) -> Result<Credential> {
        validate_fields(email, password)?;

        let credential = self
            .provider
            .sign_up(email.trim(), password)
            .await
            .map_err(|e| {
                tracing::warn!(code = %e.code, "Sign-up rejected by provider");
                SignUpError::from(e)
            })?;

        tracing::info!(uid = %credential.uid, "Account created");
        Ok(credential)
    }

    /// Forget the signed-in user
    pub async fn logout(&self) {
        if let Some(credential) = self.current.write().await.take() {
            tracing::info!(uid = %credential.uid, "Signed out");
        }
    }

    /// The currently signed-in user, if any
    pub async fn current_user(&self) -> Option<Credential> {
        self.current.read().await.clone()
    }

    /// Whether a user is signed in
    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }
}

fn validate_fields(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields);
    }
    Ok(())
}

// =============================================================================
// In-memory provider
// =============================================================================

/// Mock identity provider holding accounts in memory
///
/// Reproduces the provider's error codes so the categorisation paths can be
/// exercised without a network.
#[derive(Debug, Default)]
pub struct InMemoryAuthProvider {
    // email -> (uid, password)
    accounts: RwLock<HashMap<String, (String, String)>>,
}

impl InMemoryAuthProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with one pre-registered account
    pub fn with_account(email: &str, password: &str) -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(
            email.to_lowercase(),
            (uuid::Uuid::new_v4().to_string(), password.to_string()),
        );
        Self {
            accounts: RwLock::new(accounts),
        }
    }

    /// Number of registered accounts
    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> std::result::Result<Credential, ProviderError> {
        let key = email.to_lowercase();
        let accounts = self.accounts.read().await;
        match accounts.get(&key) {
            None => Err(ProviderError::new(
                CODE_USER_NOT_FOUND,
                "There is no user record corresponding to this identifier.",
            )),
            Some((_, stored)) if stored != password => Err(ProviderError::new(
                CODE_WRONG_PASSWORD,
                "The password is invalid.",
            )),
            Some((uid, _)) => Ok(Credential {
                uid: uid.clone(),
                email: key,
            }),
        }
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> std::result::Result<Credential, ProviderError> {
        if !email.contains('@') {
            return Err(ProviderError::new(
                CODE_INVALID_EMAIL,
                "The email address is badly formatted.",
            ));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(ProviderError::new(
                CODE_WEAK_PASSWORD,
                "Password should be at least 6 characters.",
            ));
        }

        let key = email.to_lowercase();
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&key) {
            return Err(ProviderError::new(
                CODE_EMAIL_IN_USE,
                "The email address is already in use by another account.",
            ));
        }

        let uid = uuid::Uuid::new_v4().to_string();
        accounts.insert(key.clone(), (uid.clone(), password.to_string()));
        Ok(Credential { uid, email: key })
    }
}
