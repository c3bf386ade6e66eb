use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use super::Pagination;
use crate::database::manager::{is_unique_violation, DatabaseError};
use crate::database::models::user::{User, ROLE_ADMIN};

/// Insert payload; `authorizations` carries the role claim
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub auth_type: String,
    pub password: Option<String>,
    pub kakao_id: Option<String>,
    pub authorizations: Option<serde_json::Value>,
}

/// PUT /api/users/:id body; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize)]
pub struct UserChanges {
    pub username: Option<String>,
    pub authorizations: Option<serde_json::Value>,
    pub is_active: Option<bool>,
}

pub struct UserStore;

impl UserStore {
    pub async fn by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    pub async fn by_username(pool: &PgPool, username: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    pub async fn by_kakao_id(pool: &PgPool, kakao_id: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE kakao_id = $1")
            .bind(kakao_id)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    pub async fn list(pool: &PgPool, page: Pagination) -> Result<Vec<User>, DatabaseError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users ORDER BY created_at DESC OFFSET $1 LIMIT $2",
        )
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(pool)
        .await?;
        Ok(users)
    }

    pub async fn insert(pool: &PgPool, new_user: NewUser) -> Result<User, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, auth_type, password, kakao_id, authorizations) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&new_user.username)
        .bind(&new_user.auth_type)
        .bind(&new_user.password)
        .bind(&new_user.kakao_id)
        .bind(&new_user.authorizations)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DatabaseError::UniqueViolation("Username is already registered".to_string())
            } else {
                e.into()
            }
        })?;
        Ok(user)
    }

    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        changes: UserChanges,
    ) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET \
                 username = COALESCE($2, username), \
                 authorizations = COALESCE($3, authorizations), \
                 is_active = COALESCE($4, is_active), \
                 updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(&changes.username)
        .bind(&changes.authorizations)
        .bind(changes.is_active)
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }

    pub async fn touch_last_login(pool: &PgPool, user_id: Uuid) -> Result<(), DatabaseError> {
        sqlx::query("UPDATE users SET last_login = now(), updated_at = now() WHERE id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Soft delete: flips is_active off, keeps the row
    pub async fn deactivate(pool: &PgPool, user_id: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query("UPDATE users SET is_active = FALSE, updated_at = now() WHERE id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Grant the admin role and set local credentials; used by the CLI
    pub async fn promote_to_admin(
        pool: &PgPool,
        user_id: Uuid,
        password_hash: &str,
    ) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET \
                 auth_type = 'local', \
                 password = $2, \
                 authorizations = COALESCE(authorizations, '{}'::jsonb) || $3, \
                 updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(password_hash)
        .bind(json!({ "role": ROLE_ADMIN }))
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }
}
