use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use crate::database::manager::DatabaseError;
use crate::database::models::{Contact, Group, JotContact, JotDaily, JotGroup, NewUser, User};
use crate::database::store::Store;

#[derive(Default)]
struct Tables {
    next_id: i64,
    users: Vec<User>,
    contacts: Vec<Contact>,
    groups: Vec<Group>,
    jot_daily: Vec<JotDaily>,
    jot_contacts: Vec<JotContact>,
    jot_groups: Vec<JotGroup>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-process `Store` used when no database is configured, and by tests.
///
/// Contacts, groups and jots have no HTTP create path, so the `add_*` methods
/// are the only way to populate them.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), DatabaseError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DatabaseError::QueryError("memory store is offline".to_string()));
        }
        Ok(())
    }

    pub async fn add_contact(&self, owner_id: i64, first_name: &str, last_name: &str) -> Contact {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let contact = Contact {
            id: tables.next_id(),
            owner_id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: None,
            phone: None,
            notes: String::new(),
            date_created: now,
            last_edit: now,
        };
        tables.contacts.push(contact.clone());
        contact
    }

    pub async fn add_group(&self, owner_id: i64, name: &str) -> Group {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let group = Group {
            id: tables.next_id(),
            owner_id,
            name: name.to_string(),
            description: String::new(),
            date_created: now,
            last_edit: now,
        };
        tables.groups.push(group.clone());
        group
    }

    pub async fn add_daily_jot(&self, owner_id: i64, date: NaiveDate, content: &str) -> JotDaily {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let jot = JotDaily {
            id: tables.next_id(),
            owner_id,
            date,
            content: content.to_string(),
            date_created: now,
            last_edit: now,
        };
        tables.jot_daily.push(jot.clone());
        jot
    }

    pub async fn add_contact_jot(&self, contact_id: i64, date: NaiveDate, content: &str) -> JotContact {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let jot = JotContact {
            id: tables.next_id(),
            contact_id,
            date,
            content: content.to_string(),
            date_created: now,
            last_edit: now,
        };
        tables.jot_contacts.push(jot.clone());
        jot
    }

    pub async fn add_group_jot(&self, group_id: i64, date: NaiveDate, content: &str) -> JotGroup {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let jot = JotGroup {
            id: tables.next_id(),
            group_id,
            date,
            content: content.to_string(),
            date_created: now,
            last_edit: now,
        };
        tables.jot_groups.push(jot.clone());
        jot
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn contacts_owned_by(&self, owner_id: i64, contact_id: Option<i64>) -> Result<Vec<Contact>, DatabaseError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables
            .contacts
            .iter()
            .filter(|c| c.owner_id == owner_id)
            .filter(|c| contact_id.map_or(true, |id| c.id == id))
            .cloned()
            .collect())
    }

    async fn groups_owned_by(&self, owner_id: i64, group_id: Option<i64>) -> Result<Vec<Group>, DatabaseError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables
            .groups
            .iter()
            .filter(|g| g.owner_id == owner_id)
            .filter(|g| group_id.map_or(true, |id| g.id == id))
            .cloned()
            .collect())
    }

    async fn daily_jots_owned_by(&self, owner_id: i64, jot_id: Option<i64>) -> Result<Vec<JotDaily>, DatabaseError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        let mut jots: Vec<JotDaily> = tables
            .jot_daily
            .iter()
            .filter(|j| j.owner_id == owner_id)
            .filter(|j| jot_id.map_or(true, |id| j.id == id))
            .cloned()
            .collect();
        jots.sort_by_key(|j| (j.date, j.id));
        Ok(jots)
    }

    async fn contact_ids_owned_by(&self, owner_id: i64) -> Result<Vec<i64>, DatabaseError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables.contacts.iter().filter(|c| c.owner_id == owner_id).map(|c| c.id).collect())
    }

    async fn group_ids_owned_by(&self, owner_id: i64) -> Result<Vec<i64>, DatabaseError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables.groups.iter().filter(|g| g.owner_id == owner_id).map(|g| g.id).collect())
    }

    async fn contact_jots_for(&self, contact_ids: &[i64], contact_id: Option<i64>) -> Result<Vec<JotContact>, DatabaseError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        let mut jots: Vec<JotContact> = tables
            .jot_contacts
            .iter()
            .filter(|j| contact_ids.contains(&j.contact_id))
            .filter(|j| contact_id.map_or(true, |id| j.contact_id == id))
            .cloned()
            .collect();
        jots.sort_by_key(|j| (j.date, j.id));
        Ok(jots)
    }

    async fn group_jots_for(&self, group_ids: &[i64], group_id: Option<i64>) -> Result<Vec<JotGroup>, DatabaseError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        let mut jots: Vec<JotGroup> = tables
            .jot_groups
            .iter()
            .filter(|j| group_ids.contains(&j.group_id))
            .filter(|j| group_id.map_or(true, |id| j.group_id == id))
            .cloned()
            .collect();
        jots.sort_by_key(|j| (j.date, j.id));
        Ok(jots)
    }

    async fn find_user(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, DatabaseError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        // Mirrors the UNIQUE constraint on users.username
        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(DatabaseError::UniqueViolation("users_username_key".to_string()));
        }
        let created = User {
            id: tables.next_id(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            is_active: true,
            date_joined: Utc::now(),
        };
        tables.users.push(created.clone());
        Ok(created)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        self.ensure_online()
    }
}
