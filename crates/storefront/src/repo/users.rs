//! Account directory storage.

use quickbite_core::AccountId;

use super::{RepositoryError, read_collection, write_collection};
use crate::models::Account;
use crate::store::{Store, keys};

/// Repository for the registered-accounts collection.
pub struct UserRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// All registered accounts.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the store cannot be read.
    pub fn list(&self) -> Result<Vec<Account>, RepositoryError> {
        read_collection(self.store, keys::USERS)
    }

    /// Find an account whose username or email matches `identifier`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the store cannot be read.
    pub fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        let accounts = self.list()?;
        Ok(accounts
            .into_iter()
            .find(|a| a.matches_identifier(identifier)))
    }

    /// Find an account by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the store cannot be read.
    pub fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, RepositoryError> {
        let accounts = self.list()?;
        Ok(accounts.into_iter().find(|a| a.id == id))
    }

    /// Whether any admin-role account exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the store cannot be read.
    pub fn any_admin(&self) -> Result<bool, RepositoryError> {
        let accounts = self.list()?;
        Ok(accounts.iter().any(|a| a.role.is_admin()))
    }

    /// Append a new account, enforcing username and email uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username or email is
    /// already taken, `RepositoryError::Store` on storage failure.
    pub fn insert(&self, account: Account) -> Result<(), RepositoryError> {
        let mut accounts = self.list()?;

        if accounts
            .iter()
            .any(|a| a.username.matches(account.username.as_str()))
        {
            return Err(RepositoryError::Conflict(format!(
                "username {} already taken",
                account.username
            )));
        }
        if accounts
            .iter()
            .any(|a| a.email.matches(account.email.as_str()))
        {
            return Err(RepositoryError::Conflict(format!(
                "email {} already taken",
                account.email
            )));
        }

        accounts.push(account);
        write_collection(self.store, keys::USERS, &accounts)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::Utc;
    use quickbite_core::{Email, Role, Username};

    fn account(username: &str, email: &str, role: Role) -> Account {
        Account {
            id: AccountId::generate(),
            username: Username::parse(username).unwrap(),
            email: Email::parse(email).unwrap(),
            password_hash: "$argon2id$stub".to_owned(),
            role,
            created_at: Utc::now(),
            active: true,
        }
    }

    #[test]
    fn test_insert_and_find() {
        let store = MemoryStore::new();
        let repo = UserRepository::new(&store);
        repo.insert(account("bob", "bob@example.com", Role::User))
            .unwrap();

        assert!(repo.find_by_identifier("bob").unwrap().is_some());
        assert!(repo.find_by_identifier("BOB@example.com").unwrap().is_some());
        assert!(repo.find_by_identifier("alice").unwrap().is_none());
    }

    #[test]
    fn test_insert_duplicate_username_conflicts() {
        let store = MemoryStore::new();
        let repo = UserRepository::new(&store);
        repo.insert(account("bob", "bob@example.com", Role::User))
            .unwrap();

        let err = repo
            .insert(account("bob", "other@example.com", Role::User))
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_insert_duplicate_email_conflicts() {
        let store = MemoryStore::new();
        let repo = UserRepository::new(&store);
        repo.insert(account("bob", "bob@example.com", Role::User))
            .unwrap();

        let err = repo
            .insert(account("bobby", "bob@example.com", Role::User))
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[test]
    fn test_any_admin() {
        let store = MemoryStore::new();
        let repo = UserRepository::new(&store);
        assert!(!repo.any_admin().unwrap());

        repo.insert(account("admin", "admin@example.com", Role::Admin))
            .unwrap();
        assert!(repo.any_admin().unwrap());
    }
}
