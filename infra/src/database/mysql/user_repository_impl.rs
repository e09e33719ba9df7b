//! MySQL implementation of the UserRepository trait.
//!
//! Rows in `users` are created elsewhere; this repository only reads them and
//! persists changes to `verification_id` and `code`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlArguments;
use sqlx::query::Query;
use sqlx::{MySql, MySqlPool, Row};

use pa_core::domain::entities::user::User;
use pa_core::errors::DomainError;
use pa_core::repositories::UserRepository;

const FIND_BY_ID: &str = r#"
    SELECT id, phone, verification_id, code, created_at, updated_at
    FROM users
    WHERE id = ?
    LIMIT 1
"#;

const FIND_BY_PHONE: &str = r#"
    SELECT id, phone, verification_id, code, created_at, updated_at
    FROM users
    WHERE phone = ?
    LIMIT 1
"#;

const FIND_BY_VERIFICATION_ID: &str = r#"
    SELECT id, phone, verification_id, code, created_at, updated_at
    FROM users
    WHERE verification_id = ?
    LIMIT 1
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| column_error("id", e))?,
            phone: row
                .try_get("phone")
                .map_err(|e| column_error("phone", e))?,
            verification_id: row
                .try_get("verification_id")
                .map_err(|e| column_error("verification_id", e))?,
            code: row
                .try_get("code")
                .map_err(|e| column_error("code", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column_error("updated_at", e))?,
        })
    }

    async fn fetch_user(
        &self,
        query: Query<'_, MySql, MySqlArguments>,
    ) -> Result<Option<User>, DomainError> {
        let result = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to find user: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

fn column_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::Database(format!("Failed to get {}: {}", column, e))
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError> {
        self.fetch_user(sqlx::query(FIND_BY_ID).bind(id)).await
    }

    async fn find_by_phone(&self, phone: u64) -> Result<Option<User>, DomainError> {
        self.fetch_user(sqlx::query(FIND_BY_PHONE).bind(phone))
            .await
    }

    async fn find_by_verification_id(
        &self,
        verification_id: &str,
    ) -> Result<Option<User>, DomainError> {
        self.fetch_user(sqlx::query(FIND_BY_VERIFICATION_ID).bind(verification_id))
            .await
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET verification_id = ?, code = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&user.verification_id)
            .bind(&user.code)
            .bind(user.updated_at)
            .bind(user.id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to update user: {}", e)))?;

        // MySQL reports zero affected rows for no-op updates, so re-read instead
        self.find_by_id(user.id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }
}
