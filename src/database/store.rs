use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{Contact, Group, JotContact, JotDaily, JotGroup, NewUser, User};

/// Read primitives over the relational store, plus the single user insert.
///
/// Every owner-scoped primitive takes the owner id explicitly. Transitive
/// ownership (jots attached to contacts or groups) is resolved by the caller in
/// two steps: first `*_ids_owned_by`, then `*_jots_for` with the resulting set.
#[async_trait]
pub trait Store: Send + Sync {
    /// Contacts owned by `owner_id`, optionally narrowed to one id.
    async fn contacts_owned_by(&self, owner_id: i64, contact_id: Option<i64>) -> Result<Vec<Contact>, DatabaseError>;

    async fn groups_owned_by(&self, owner_id: i64, group_id: Option<i64>) -> Result<Vec<Group>, DatabaseError>;

    async fn daily_jots_owned_by(&self, owner_id: i64, jot_id: Option<i64>) -> Result<Vec<JotDaily>, DatabaseError>;

    async fn contact_ids_owned_by(&self, owner_id: i64) -> Result<Vec<i64>, DatabaseError>;

    async fn group_ids_owned_by(&self, owner_id: i64) -> Result<Vec<i64>, DatabaseError>;

    /// Jots whose contact is in `contact_ids`, optionally narrowed to one contact.
    async fn contact_jots_for(&self, contact_ids: &[i64], contact_id: Option<i64>) -> Result<Vec<JotContact>, DatabaseError>;

    /// Jots whose group is in `group_ids`, optionally narrowed to one group.
    async fn group_jots_for(&self, group_ids: &[i64], group_id: Option<i64>) -> Result<Vec<JotGroup>, DatabaseError>;

    /// Exact-match lookup by username.
    async fn find_user(&self, username: &str) -> Result<Option<User>, DatabaseError>;

    /// Insert a user. Fails with `DatabaseError::UniqueViolation` if the username is taken.
    async fn insert_user(&self, user: NewUser) -> Result<User, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;
}
