use std::sync::Arc;

use tracing::debug;

use crate::database::models::{Contact, Group, JotContact, JotDaily, JotGroup};
use crate::database::{DatabaseError, Store};
use crate::middleware::AuthUser;

/// Owner-scoped reads over contacts, groups and jots.
///
/// A narrowing id that is unknown or belongs to someone else produces an
/// empty result, never an error, so callers cannot test for existence.
pub struct JournalService {
    store: Arc<dyn Store>,
}

impl JournalService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn contacts(&self, caller: &AuthUser, contact_id: Option<i64>) -> Result<Vec<Contact>, DatabaseError> {
        debug!("contacts for user {} (contact_id={:?})", caller.user_id, contact_id);
        self.store.contacts_owned_by(caller.user_id, contact_id).await
    }

    pub async fn groups(&self, caller: &AuthUser, group_id: Option<i64>) -> Result<Vec<Group>, DatabaseError> {
        debug!("groups for user {} (group_id={:?})", caller.user_id, group_id);
        self.store.groups_owned_by(caller.user_id, group_id).await
    }

    pub async fn daily_jots(&self, caller: &AuthUser, jot_id: Option<i64>) -> Result<Vec<JotDaily>, DatabaseError> {
        debug!("daily jots for user {} (jot_id={:?})", caller.user_id, jot_id);
        self.store.daily_jots_owned_by(caller.user_id, jot_id).await
    }

    /// Jots attached to the caller's contacts, optionally for one contact.
    pub async fn contact_jots(&self, caller: &AuthUser, contact_id: Option<i64>) -> Result<Vec<JotContact>, DatabaseError> {
        let owned = self.store.contact_ids_owned_by(caller.user_id).await?;
        debug!(
            "contact jots for user {} across {} owned contacts (contact_id={:?})",
            caller.user_id,
            owned.len(),
            contact_id
        );
        self.store.contact_jots_for(&owned, contact_id).await
    }

    /// Jots attached to the caller's groups, optionally for one group.
    pub async fn group_jots(&self, caller: &AuthUser, group_id: Option<i64>) -> Result<Vec<JotGroup>, DatabaseError> {
        let owned = self.store.group_ids_owned_by(caller.user_id).await?;
        debug!(
            "group jots for user {} across {} owned groups (group_id={:?})",
            caller.user_id,
            owned.len(),
            group_id
        );
        self.store.group_jots_for(&owned, group_id).await
    }
}
