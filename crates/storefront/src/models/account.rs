//! Account and session records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quickbite_core::{AccountId, Email, Role, Username};

/// A registered account.
///
/// Usernames and emails are unique across the directory. Accounts are never
/// hard-deleted; deactivation clears `active` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account ID.
    pub id: AccountId,
    /// Unique login name.
    pub username: Username,
    /// Unique email address.
    pub email: Email,
    /// Salted Argon2id hash of the password. The field keeps the legacy
    /// `password` key in storage; the value is never a plaintext password.
    #[serde(rename = "password")]
    pub password_hash: String,
    /// Account role.
    #[serde(default)]
    pub role: Role,
    /// When the account was registered.
    pub created_at: DateTime<Utc>,
    /// Whether the account may log in.
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl Account {
    /// Whether `identifier` names this account (username or email,
    /// case-insensitive).
    #[must_use]
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.username.matches(identifier) || self.email.matches(identifier)
    }
}

/// The persisted session: the logged-in account plus when the login
/// happened.
///
/// Serialized with the account fields inline, so the stored document is an
/// `Account` with one extra `loggedInAt` key. Records written before the
/// timestamp existed deserialize with `logged_in_at: None` and are treated
/// as never expiring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated account.
    #[serde(flatten)]
    pub account: Account,
    /// When the session was established.
    #[serde(rename = "loggedInAt", default, skip_serializing_if = "Option::is_none")]
    pub logged_in_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Sessions die this long after login.
    pub const MAX_AGE_HOURS: i64 = 24;

    /// Whether the session is past its 24-hour lifetime at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.logged_in_at.is_some_and(|at| {
            now.signed_duration_since(at) > chrono::Duration::hours(Self::MAX_AGE_HOURS)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn account() -> Account {
        Account {
            id: AccountId::generate(),
            username: Username::parse("snackfan").unwrap(),
            email: Email::parse("snackfan@example.com").unwrap(),
            password_hash: "$argon2id$stub".to_owned(),
            role: Role::User,
            created_at: Utc::now(),
            active: true,
        }
    }

    #[test]
    fn test_matches_identifier() {
        let account = account();
        assert!(account.matches_identifier("snackfan"));
        assert!(account.matches_identifier("SNACKFAN@example.com"));
        assert!(!account.matches_identifier("someoneelse"));
    }

    #[test]
    fn test_session_expiry() {
        let now = Utc::now();
        let session = Session {
            account: account(),
            logged_in_at: Some(now - Duration::hours(25)),
        };
        assert!(session.is_expired(now));

        let fresh = Session {
            account: account(),
            logged_in_at: Some(now - Duration::hours(1)),
        };
        assert!(!fresh.is_expired(now));
    }

    #[test]
    fn test_legacy_session_without_timestamp_never_expires() {
        let session = Session {
            account: account(),
            logged_in_at: None,
        };
        assert!(!session.is_expired(Utc::now()));
    }

    #[test]
    fn test_account_storage_shape() {
        let account = account();
        let json = serde_json::to_value(&account).unwrap();
        // Legacy local-storage keys.
        assert!(json.get("password").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json.get("role").unwrap(), "user");
    }
}
