//! Active session and remembered-identifier storage.

use super::RepositoryError;
use crate::models::Session;
use crate::store::{Store, keys};

/// Repository for the single active session (`currentUser`) and the
/// optional remembered login identifier (`rememberedEmail`).
pub struct SessionRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> SessionRepository<'a> {
    /// Create a new session repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// The persisted session, if any. A corrupted session document is
    /// treated as logged out.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the store cannot be read.
    pub fn current(&self) -> Result<Option<Session>, RepositoryError> {
        let Some(raw) = self.store.read(keys::CURRENT_USER)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!(error = %e, "corrupted session document, treating as logged out");
                Ok(None)
            }
        }
    }

    /// Persist `session` as the active one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` on storage failure.
    pub fn set(&self, session: &Session) -> Result<(), RepositoryError> {
        let json = serde_json::to_string(session)
            .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;
        self.store.write(keys::CURRENT_USER, &json)?;
        Ok(())
    }

    /// Clear the active session.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` on storage failure.
    pub fn clear(&self) -> Result<(), RepositoryError> {
        self.store.remove(keys::CURRENT_USER)?;
        Ok(())
    }

    /// The remembered login identifier, if one was saved.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the store cannot be read.
    pub fn remembered_identifier(&self) -> Result<Option<String>, RepositoryError> {
        Ok(self.store.read(keys::REMEMBERED_EMAIL)?)
    }

    /// Save or clear the remembered login identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` on storage failure.
    pub fn set_remembered_identifier(
        &self,
        identifier: Option<&str>,
    ) -> Result<(), RepositoryError> {
        match identifier {
            Some(value) => self.store.write(keys::REMEMBERED_EMAIL, value)?,
            None => self.store.remove(keys::REMEMBERED_EMAIL)?,
        }
        Ok(())
    }
}
