use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::Pagination;
use crate::database::manager::{is_unique_violation, DatabaseError};
use crate::database::models::{Enroll, EnrollDetail};

const ALREADY_ENROLLED: &str = "User is already enrolled in this session";

#[derive(Debug, Clone, Deserialize)]
pub struct EnrollCreate {
    pub user_id: Uuid,
    pub session_id: Uuid,
    pub enroll_status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnrollChanges {
    pub enroll_status: Option<String>,
}

const DETAIL_COLUMNS: &str = "e.id, e.user_id, e.session_id, e.enroll_status, \
     u.username AS user_name, u.auth_type, s.title AS session_title, c.title AS course_name, \
     e.created_at, e.updated_at, e.created_by, e.updated_by";

const DETAIL_JOINS: &str = "FROM enrollments e \
     JOIN users u ON u.id = e.user_id \
     JOIN sessions s ON s.id = e.session_id \
     JOIN courses c ON c.id = s.course_id";

pub struct EnrollStore;

impl EnrollStore {
    /// A user's enrollment in a session, if any
    pub async fn find(
        pool: &PgPool,
        user_id: Uuid,
        session_id: Uuid,
    ) -> Result<Option<Enroll>, DatabaseError> {
        let enroll = sqlx::query_as::<_, Enroll>(
            "SELECT * FROM enrollments WHERE user_id = $1 AND session_id = $2",
        )
        .bind(user_id)
        .bind(session_id)
        .fetch_optional(pool)
        .await?;
        Ok(enroll)
    }

    pub async fn list_details(
        pool: &PgPool,
        page: Pagination,
    ) -> Result<Vec<EnrollDetail>, DatabaseError> {
        let sql = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} \
             ORDER BY e.created_at DESC OFFSET $1 LIMIT $2"
        );
        let rows = sqlx::query_as::<_, EnrollDetail>(&sql)
            .bind(page.offset())
            .bind(page.limit())
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn details_by_user(
        pool: &PgPool,
        user_id: Uuid,
        page: Pagination,
    ) -> Result<Vec<EnrollDetail>, DatabaseError> {
        let sql = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} WHERE e.user_id = $1 \
             ORDER BY e.created_at DESC OFFSET $2 LIMIT $3"
        );
        let rows = sqlx::query_as::<_, EnrollDetail>(&sql)
            .bind(user_id)
            .bind(page.offset())
            .bind(page.limit())
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn details_by_session(
        pool: &PgPool,
        session_id: Uuid,
        page: Pagination,
    ) -> Result<Vec<EnrollDetail>, DatabaseError> {
        let sql = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} WHERE e.session_id = $1 \
             ORDER BY e.created_at DESC OFFSET $2 LIMIT $3"
        );
        let rows = sqlx::query_as::<_, EnrollDetail>(&sql)
            .bind(session_id)
            .bind(page.offset())
            .bind(page.limit())
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Insert a new enrollment. One enrollment per (user, session); both
    /// the pre-check and the unique index surface the same error.
    pub async fn insert(
        pool: &PgPool,
        enroll: EnrollCreate,
        created_by: Uuid,
    ) -> Result<Enroll, DatabaseError> {
        if Self::find(pool, enroll.user_id, enroll.session_id)
            .await?
            .is_some()
        {
            return Err(DatabaseError::UniqueViolation(ALREADY_ENROLLED.to_string()));
        }

        let enroll = sqlx::query_as::<_, Enroll>(
            "INSERT INTO enrollments (user_id, session_id, enroll_status, created_by, updated_by) \
             VALUES ($1, $2, $3, $4, $4) RETURNING *",
        )
        .bind(enroll.user_id)
        .bind(enroll.session_id)
        .bind(&enroll.enroll_status)
        .bind(created_by)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DatabaseError::UniqueViolation(ALREADY_ENROLLED.to_string())
            } else {
                e.into()
            }
        })?;
        Ok(enroll)
    }

    pub async fn update(
        pool: &PgPool,
        enroll_id: Uuid,
        changes: EnrollChanges,
        updated_by: Uuid,
    ) -> Result<Option<Enroll>, DatabaseError> {
        let enroll = sqlx::query_as::<_, Enroll>(
            "UPDATE enrollments SET \
                 enroll_status = COALESCE($2, enroll_status), \
                 updated_by = $3, \
                 updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(enroll_id)
        .bind(&changes.enroll_status)
        .bind(updated_by)
        .fetch_optional(pool)
        .await?;
        Ok(enroll)
    }
}
