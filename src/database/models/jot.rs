use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Standalone journal entry for one day, owned directly by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JotDaily {
    pub id: i64,
    pub owner_id: i64,
    pub date: NaiveDate,
    pub content: String,
    pub date_created: DateTime<Utc>,
    pub last_edit: DateTime<Utc>,
}

/// Jot attached to a contact. Ownership follows the contact.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JotContact {
    pub id: i64,
    pub contact_id: i64,
    pub date: NaiveDate,
    pub content: String,
    pub date_created: DateTime<Utc>,
    pub last_edit: DateTime<Utc>,
}

/// Jot attached to a group. Ownership follows the group.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JotGroup {
    pub id: i64,
    pub group_id: i64,
    pub date: NaiveDate,
    pub content: String,
    pub date_created: DateTime<Utc>,
    pub last_edit: DateTime<Utc>,
}
