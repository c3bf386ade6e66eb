use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::Pagination;
use crate::database::manager::DatabaseError;
use crate::database::models::session::{Session, SessionDetail, SessionDetailRow};

#[derive(Debug, Clone, Deserialize)]
pub struct SessionCreate {
    pub course_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub lecturer_info: Option<String>,
    pub date_info: Option<String>,
    pub begin_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub lecturer_info: Option<String>,
    pub date_info: Option<String>,
    pub begin_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

const DETAIL_COLUMNS: &str = "s.id, s.course_id, s.title, s.description, s.lecturer_info, \
     s.date_info, s.begin_date, s.end_date, c.title AS course_name, \
     (SELECT COUNT(*) FROM lectures l WHERE l.session_id = s.id) AS lecture_count, \
     s.created_at, s.created_by, s.updated_at, s.updated_by";

pub struct SessionStore;

impl SessionStore {
    pub async fn by_id(pool: &PgPool, session_id: Uuid) -> Result<Option<Session>, DatabaseError> {
        let session = sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE id = $1")
            .bind(session_id)
            .fetch_optional(pool)
            .await?;
        Ok(session)
    }

    /// One session joined with its course title and lecture count; the
    /// derived status is stamped at `now`
    pub async fn detail_by_id(
        pool: &PgPool,
        session_id: Uuid,
    ) -> Result<Option<SessionDetail>, DatabaseError> {
        let sql = format!(
            "SELECT {DETAIL_COLUMNS} FROM sessions s \
             JOIN courses c ON c.id = s.course_id WHERE s.id = $1"
        );
        let row = sqlx::query_as::<_, SessionDetailRow>(&sql)
            .bind(session_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|r| r.into_detail(Utc::now())))
    }

    /// Active sessions newest-first, same joined shape as `detail_by_id`
    pub async fn list_details(
        pool: &PgPool,
        page: Pagination,
    ) -> Result<Vec<SessionDetail>, DatabaseError> {
        let sql = format!(
            "SELECT {DETAIL_COLUMNS} FROM sessions s \
             JOIN courses c ON c.id = s.course_id \
             WHERE s.is_active = TRUE \
             ORDER BY s.created_at DESC OFFSET $1 LIMIT $2"
        );
        let rows = sqlx::query_as::<_, SessionDetailRow>(&sql)
            .bind(page.offset())
            .bind(page.limit())
            .fetch_all(pool)
            .await?;

        let now = Utc::now();
        Ok(rows.into_iter().map(|r| r.into_detail(now)).collect())
    }

    pub async fn insert(
        pool: &PgPool,
        session: SessionCreate,
        created_by: Uuid,
    ) -> Result<Session, DatabaseError> {
        let session = sqlx::query_as::<_, Session>(
            "INSERT INTO sessions \
                 (course_id, title, description, lecturer_info, date_info, begin_date, end_date, \
                  created_by, updated_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8) RETURNING *",
        )
        .bind(session.course_id)
        .bind(&session.title)
        .bind(&session.description)
        .bind(&session.lecturer_info)
        .bind(&session.date_info)
        .bind(session.begin_date)
        .bind(session.end_date)
        .bind(created_by)
        .fetch_one(pool)
        .await?;
        Ok(session)
    }

    pub async fn update(
        pool: &PgPool,
        session_id: Uuid,
        changes: SessionChanges,
        updated_by: Uuid,
    ) -> Result<Option<Session>, DatabaseError> {
        let session = sqlx::query_as::<_, Session>(
            "UPDATE sessions SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 lecturer_info = COALESCE($4, lecturer_info), \
                 date_info = COALESCE($5, date_info), \
                 begin_date = COALESCE($6, begin_date), \
                 end_date = COALESCE($7, end_date), \
                 is_active = COALESCE($8, is_active), \
                 updated_by = $9, \
                 updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(session_id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.lecturer_info)
        .bind(&changes.date_info)
        .bind(changes.begin_date)
        .bind(changes.end_date)
        .bind(changes.is_active)
        .bind(updated_by)
        .fetch_optional(pool)
        .await?;
        Ok(session)
    }

    /// Soft delete: flips is_active off, keeps the row
    pub async fn deactivate(pool: &PgPool, session_id: Uuid) -> Result<bool, DatabaseError> {
        let result =
            sqlx::query("UPDATE sessions SET is_active = FALSE, updated_at = now() WHERE id = $1")
                .bind(session_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
