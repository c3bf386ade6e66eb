use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::Pagination;
use crate::database::manager::DatabaseError;
use crate::database::models::Lecture;

#[derive(Debug, Clone, Deserialize)]
pub struct LectureCreate {
    pub session_id: Uuid,
    pub title: String,
    pub sequence: i32,
    pub attendance_type: Option<String>,
    pub lecture_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LectureChanges {
    pub title: Option<String>,
    pub sequence: Option<i32>,
    pub attendance_type: Option<String>,
    pub lecture_date: Option<DateTime<Utc>>,
}

pub struct LectureStore;

impl LectureStore {
    pub async fn by_id(pool: &PgPool, lecture_id: Uuid) -> Result<Option<Lecture>, DatabaseError> {
        let lecture = sqlx::query_as::<_, Lecture>("SELECT * FROM lectures WHERE id = $1")
            .bind(lecture_id)
            .fetch_optional(pool)
            .await?;
        Ok(lecture)
    }

    pub async fn list(pool: &PgPool, page: Pagination) -> Result<Vec<Lecture>, DatabaseError> {
        let lectures = sqlx::query_as::<_, Lecture>(
            "SELECT * FROM lectures ORDER BY created_at DESC OFFSET $1 LIMIT $2",
        )
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(pool)
        .await?;
        Ok(lectures)
    }

    /// Lectures of one session in sequence order
    pub async fn list_by_session(
        pool: &PgPool,
        session_id: Uuid,
        page: Pagination,
    ) -> Result<Vec<Lecture>, DatabaseError> {
        let lectures = sqlx::query_as::<_, Lecture>(
            "SELECT * FROM lectures WHERE session_id = $1 \
             ORDER BY sequence OFFSET $2 LIMIT $3",
        )
        .bind(session_id)
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(pool)
        .await?;
        Ok(lectures)
    }

    pub async fn insert(
        pool: &PgPool,
        lecture: LectureCreate,
        created_by: Uuid,
    ) -> Result<Lecture, DatabaseError> {
        let lecture = sqlx::query_as::<_, Lecture>(
            "INSERT INTO lectures \
                 (session_id, title, sequence, attendance_type, lecture_date, created_by, updated_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $6) RETURNING *",
        )
        .bind(lecture.session_id)
        .bind(&lecture.title)
        .bind(lecture.sequence)
        .bind(&lecture.attendance_type)
        .bind(lecture.lecture_date)
        .bind(created_by)
        .fetch_one(pool)
        .await?;
        Ok(lecture)
    }

    pub async fn update(
        pool: &PgPool,
        lecture_id: Uuid,
        changes: LectureChanges,
        updated_by: Uuid,
    ) -> Result<Option<Lecture>, DatabaseError> {
        let lecture = sqlx::query_as::<_, Lecture>(
            "UPDATE lectures SET \
                 title = COALESCE($2, title), \
                 sequence = COALESCE($3, sequence), \
                 attendance_type = COALESCE($4, attendance_type), \
                 lecture_date = COALESCE($5, lecture_date), \
                 updated_by = $6, \
                 updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(lecture_id)
        .bind(&changes.title)
        .bind(changes.sequence)
        .bind(&changes.attendance_type)
        .bind(changes.lecture_date)
        .bind(updated_by)
        .fetch_optional(pool)
        .await?;
        Ok(lecture)
    }

    /// Hard delete, matching the original behavior for lectures
    pub async fn delete(pool: &PgPool, lecture_id: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM lectures WHERE id = $1")
            .bind(lecture_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
