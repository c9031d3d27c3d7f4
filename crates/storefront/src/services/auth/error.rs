//! Authentication error types.

use thiserror::Error;

use crate::repo::RepositoryError;

/// Errors that can occur during account-directory operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid username format.
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] quickbite_core::UsernameError),

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] quickbite_core::EmailError),

    /// Password too short or otherwise invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Password and confirmation do not match.
    #[error("password confirmation does not match")]
    PasswordMismatch,

    /// Username or email already registered. Which one is deliberately not
    /// disclosed beyond the message.
    #[error("an account with this username or email already exists")]
    DuplicateAccount,

    /// Wrong password or unknown identifier; the caller cannot tell which.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No active session.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Password hashing failed.
    #[error("password hashing error")]
    PasswordHash,

    /// Storage error.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}
