use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Contact, Group, JotContact, JotDaily, JotGroup, NewUser, User};
use crate::database::store::Store;

/// `Store` backed by a Postgres pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn contacts_owned_by(&self, owner_id: i64, contact_id: Option<i64>) -> Result<Vec<Contact>, DatabaseError> {
        let query = r#"
            SELECT id, owner_id, first_name, last_name, email, phone, notes, date_created, last_edit
            FROM contacts
            WHERE owner_id = $1
            AND ($2::BIGINT IS NULL OR id = $2)
            ORDER BY id
        "#;

        let rows = sqlx::query_as::<_, Contact>(query)
            .bind(owner_id)
            .bind(contact_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn groups_owned_by(&self, owner_id: i64, group_id: Option<i64>) -> Result<Vec<Group>, DatabaseError> {
        let query = r#"
            SELECT id, owner_id, name, description, date_created, last_edit
            FROM groups
            WHERE owner_id = $1
            AND ($2::BIGINT IS NULL OR id = $2)
            ORDER BY id
        "#;

        let rows = sqlx::query_as::<_, Group>(query)
            .bind(owner_id)
            .bind(group_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn daily_jots_owned_by(&self, owner_id: i64, jot_id: Option<i64>) -> Result<Vec<JotDaily>, DatabaseError> {
        let query = r#"
            SELECT id, owner_id, date, content, date_created, last_edit
            FROM jot_daily
            WHERE owner_id = $1
            AND ($2::BIGINT IS NULL OR id = $2)
            ORDER BY date, id
        "#;

        let rows = sqlx::query_as::<_, JotDaily>(query)
            .bind(owner_id)
            .bind(jot_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn contact_ids_owned_by(&self, owner_id: i64) -> Result<Vec<i64>, DatabaseError> {
        let ids = sqlx::query_scalar::<_, i64>("SELECT id FROM contacts WHERE owner_id = $1 ORDER BY id")
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(ids)
    }

    async fn group_ids_owned_by(&self, owner_id: i64) -> Result<Vec<i64>, DatabaseError> {
        let ids = sqlx::query_scalar::<_, i64>("SELECT id FROM groups WHERE owner_id = $1 ORDER BY id")
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(ids)
    }

    async fn contact_jots_for(&self, contact_ids: &[i64], contact_id: Option<i64>) -> Result<Vec<JotContact>, DatabaseError> {
        if contact_ids.is_empty() {
            return Ok(vec![]);
        }

        let query = r#"
            SELECT id, contact_id, date, content, date_created, last_edit
            FROM jot_contacts
            WHERE contact_id = ANY($1)
            AND ($2::BIGINT IS NULL OR contact_id = $2)
            ORDER BY date, id
        "#;

        let rows = sqlx::query_as::<_, JotContact>(query)
            .bind(contact_ids)
            .bind(contact_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn group_jots_for(&self, group_ids: &[i64], group_id: Option<i64>) -> Result<Vec<JotGroup>, DatabaseError> {
        if group_ids.is_empty() {
            return Ok(vec![]);
        }

        let query = r#"
            SELECT id, group_id, date, content, date_created, last_edit
            FROM jot_groups
            WHERE group_id = ANY($1)
            AND ($2::BIGINT IS NULL OR group_id = $2)
            ORDER BY date, id
        "#;

        let rows = sqlx::query_as::<_, JotGroup>(query)
            .bind(group_ids)
            .bind(group_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_user(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let query = r#"
            SELECT id, username, email, password_hash, is_active, date_joined
            FROM users
            WHERE username = $1
        "#;

        let user = sqlx::query_as::<_, User>(query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, DatabaseError> {
        let query = r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password_hash, is_active, date_joined
        "#;

        let created = sqlx::query_as::<_, User>(query)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
