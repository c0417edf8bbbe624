use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Group {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub description: String,
    pub date_created: DateTime<Utc>,
    pub last_edit: DateTime<Utc>,
}
