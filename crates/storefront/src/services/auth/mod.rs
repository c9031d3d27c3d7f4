//! Account directory service.
//!
//! Registration, login, logout, and the bootstrap admin seed. Passwords are
//! stored as salted Argon2id hashes; plaintext never reaches the store.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::ExposeSecret;

use quickbite_core::{AccountId, Email, Role, Username};

use crate::clock::Clock;
use crate::models::{Account, Session};
use crate::repo::{RepositoryError, SessionRepository, UserRepository};
use crate::state::AppState;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Fixed identity of the bootstrap admin account.
const SEED_ADMIN_USERNAME: &str = "admin";
const SEED_ADMIN_EMAIL: &str = "admin@quickbite.example";

/// A registration form submission.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Requested login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Password typed a second time.
    pub confirm_password: String,
}

/// Account directory service.
///
/// Handles registration, login/logout, the persisted session, and the seed
/// admin bootstrap.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    sessions: SessionRepository<'a>,
    clock: &'a dyn Clock,
    state: &'a AppState,
}

impl<'a> AuthService<'a> {
    /// Create a new account directory service.
    #[must_use]
    pub fn new(state: &'a AppState) -> Self {
        Self {
            users: UserRepository::new(state.store()),
            sessions: SessionRepository::new(state.store()),
            clock: state.clock(),
            state,
        }
    }

    /// Register a new user-role account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername` / `InvalidEmail` /
    /// `WeakPassword` / `PasswordMismatch` for malformed input, and
    /// `AuthError::DuplicateAccount` if the username or email is taken.
    pub fn register(&self, registration: &Registration) -> Result<Account, AuthError> {
        let username = Username::parse(registration.username.trim())?;
        let email = Email::parse(registration.email.trim())?;
        validate_password(&registration.password)?;
        if registration.password != registration.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let password_hash = hash_password(&registration.password)?;

        let account = Account {
            id: AccountId::generate(),
            username,
            email,
            password_hash,
            role: Role::User,
            created_at: self.clock.now(),
            active: true,
        };

        self.users.insert(account.clone()).map_err(|e| match e {
            RepositoryError::Conflict(_) => AuthError::DuplicateAccount,
            other => AuthError::Repository(other),
        })?;

        tracing::info!(username = %account.username, "account registered");
        Ok(account)
    }

    /// Log in with a username-or-email identifier and password.
    ///
    /// On success the session is persisted. `remember` controls whether the
    /// identifier is saved for pre-filling the next login form.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when the identifier is
    /// unknown, the password is wrong, or the account is deactivated — the
    /// caller cannot distinguish these.
    pub fn login(
        &self,
        identifier: &str,
        password: &str,
        remember: bool,
    ) -> Result<Account, AuthError> {
        let identifier = identifier.trim();

        let account = self
            .users
            .find_by_identifier(identifier)?
            .filter(|a| a.active)
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &account.password_hash)?;

        let session = Session {
            account: account.clone(),
            logged_in_at: Some(self.clock.now()),
        };
        self.sessions.set(&session)?;
        self.sessions
            .set_remembered_identifier(remember.then_some(identifier))?;

        tracing::info!(username = %account.username, "login successful");
        Ok(account)
    }

    /// Clear the active session. A no-op when already logged out.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` on storage failure.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.sessions.clear()?;
        Ok(())
    }

    /// The logged-in account, if there is an unexpired session.
    ///
    /// An expired session is cleared from the store and reads as logged out.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` on storage failure.
    pub fn current_user(&self) -> Result<Option<Account>, AuthError> {
        let Some(session) = self.sessions.current()? else {
            return Ok(None);
        };

        if session.is_expired(self.clock.now()) {
            tracing::info!(username = %session.account.username, "session expired");
            self.sessions.clear()?;
            return Ok(None);
        }

        Ok(Some(session.account))
    }

    /// The logged-in account, or `NotAuthenticated`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` when logged out.
    pub fn require_user(&self) -> Result<Account, AuthError> {
        self.current_user()?.ok_or(AuthError::NotAuthenticated)
    }

    /// Whether an unexpired session exists.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` on storage failure.
    pub fn is_authenticated(&self) -> Result<bool, AuthError> {
        Ok(self.current_user()?.is_some())
    }

    /// Whether the active session belongs to an admin.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` on storage failure.
    pub fn is_admin(&self) -> Result<bool, AuthError> {
        Ok(self
            .current_user()?
            .is_some_and(|account| account.role.is_admin()))
    }

    /// The saved login identifier, for pre-filling the login form.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` on storage failure.
    pub fn remembered_identifier(&self) -> Result<Option<String>, AuthError> {
        Ok(self.sessions.remembered_identifier()?)
    }

    /// First-run bootstrap: create the fixed admin account if no admin
    /// exists yet. Returns whether an account was created.
    ///
    /// The password comes from configuration; the default is a documented
    /// placeholder, not a security control.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` on storage failure.
    pub fn ensure_seed_admin(&self) -> Result<bool, AuthError> {
        if self.users.any_admin()? {
            return Ok(false);
        }

        let password_hash =
            hash_password(self.state.config().admin_password.expose_secret())?;

        let admin = Account {
            id: AccountId::generate(),
            username: Username::parse(SEED_ADMIN_USERNAME)
                .map_err(AuthError::InvalidUsername)?,
            email: Email::parse(SEED_ADMIN_EMAIL).map_err(AuthError::InvalidEmail)?,
            password_hash,
            role: Role::Admin,
            created_at: self.clock.now(),
            active: true,
        };

        self.users.insert(admin).map_err(|e| match e {
            // Someone registered the name first; an admin still doesn't
            // exist, but we won't fight over the username.
            RepositoryError::Conflict(msg) => {
                tracing::warn!(%msg, "seed admin username taken, skipping bootstrap");
                AuthError::DuplicateAccount
            }
            other => AuthError::Repository(other),
        })?;

        tracing::info!("seed admin account created");
        Ok(true)
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
