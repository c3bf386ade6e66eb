use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::Pagination;
use crate::database::manager::DatabaseError;
use crate::database::models::Attendance;

#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceCreate {
    pub user_id: Uuid,
    pub status: String,
    pub detail_type: Option<String>,
    pub description: Option<String>,
    pub assignment_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceChanges {
    pub status: Option<String>,
    pub detail_type: Option<String>,
    pub description: Option<String>,
    pub assignment_id: Option<String>,
}

pub struct AttendanceStore;

impl AttendanceStore {
    pub async fn by_id(
        pool: &PgPool,
        attendance_id: Uuid,
    ) -> Result<Option<Attendance>, DatabaseError> {
        let attendance = sqlx::query_as::<_, Attendance>("SELECT * FROM attendances WHERE id = $1")
            .bind(attendance_id)
            .fetch_optional(pool)
            .await?;
        Ok(attendance)
    }

    pub async fn list_by_lecture(
        pool: &PgPool,
        lecture_id: Uuid,
        page: Pagination,
    ) -> Result<Vec<Attendance>, DatabaseError> {
        let attendances = sqlx::query_as::<_, Attendance>(
            "SELECT * FROM attendances WHERE lecture_id = $1 \
             ORDER BY created_at OFFSET $2 LIMIT $3",
        )
        .bind(lecture_id)
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(pool)
        .await?;
        Ok(attendances)
    }

    pub async fn insert(
        pool: &PgPool,
        lecture_id: Uuid,
        attendance: AttendanceCreate,
        created_by: Uuid,
    ) -> Result<Attendance, DatabaseError> {
        let attendance = sqlx::query_as::<_, Attendance>(
            "INSERT INTO attendances \
                 (lecture_id, user_id, status, detail_type, description, assignment_id, \
                  created_by, updated_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7) RETURNING *",
        )
        .bind(lecture_id)
        .bind(attendance.user_id)
        .bind(&attendance.status)
        .bind(&attendance.detail_type)
        .bind(&attendance.description)
        .bind(&attendance.assignment_id)
        .bind(created_by)
        .fetch_one(pool)
        .await?;
        Ok(attendance)
    }

    pub async fn update(
        pool: &PgPool,
        attendance_id: Uuid,
        changes: AttendanceChanges,
        updated_by: Uuid,
    ) -> Result<Option<Attendance>, DatabaseError> {
        let attendance = sqlx::query_as::<_, Attendance>(
            "UPDATE attendances SET \
                 status = COALESCE($2, status), \
                 detail_type = COALESCE($3, detail_type), \
                 description = COALESCE($4, description), \
                 assignment_id = COALESCE($5, assignment_id), \
                 updated_by = $6, \
                 updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(attendance_id)
        .bind(&changes.status)
        .bind(&changes.detail_type)
        .bind(&changes.description)
        .bind(&changes.assignment_id)
        .bind(updated_by)
        .fetch_optional(pool)
        .await?;
        Ok(attendance)
    }
}
