use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::Pagination;
use crate::database::manager::DatabaseError;
use crate::database::models::Course;

#[derive(Debug, Clone, Deserialize)]
pub struct CourseCreate {
    pub title: String,
    pub description: Option<String>,
    pub keyword: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keyword: Option<String>,
    pub is_active: Option<bool>,
}

fn default_active() -> bool {
    true
}

pub struct CourseStore;

impl CourseStore {
    pub async fn by_id(pool: &PgPool, course_id: Uuid) -> Result<Option<Course>, DatabaseError> {
        let course = sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(course_id)
            .fetch_optional(pool)
            .await?;
        Ok(course)
    }

    /// Active courses, newest first
    pub async fn list(pool: &PgPool, page: Pagination) -> Result<Vec<Course>, DatabaseError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT * FROM courses WHERE is_active = TRUE \
             ORDER BY created_at DESC OFFSET $1 LIMIT $2",
        )
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(pool)
        .await?;
        Ok(courses)
    }

    pub async fn insert(
        pool: &PgPool,
        course: CourseCreate,
        created_by: Uuid,
    ) -> Result<Course, DatabaseError> {
        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (title, description, keyword, is_active, created_by, updated_by) \
             VALUES ($1, $2, $3, $4, $5, $5) RETURNING *",
        )
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.keyword)
        .bind(course.is_active)
        .bind(created_by)
        .fetch_one(pool)
        .await?;
        Ok(course)
    }

    pub async fn update(
        pool: &PgPool,
        course_id: Uuid,
        changes: CourseChanges,
        updated_by: Uuid,
    ) -> Result<Option<Course>, DatabaseError> {
        let course = sqlx::query_as::<_, Course>(
            "UPDATE courses SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 keyword = COALESCE($4, keyword), \
                 is_active = COALESCE($5, is_active), \
                 updated_by = $6, \
                 updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(course_id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.keyword)
        .bind(changes.is_active)
        .bind(updated_by)
        .fetch_optional(pool)
        .await?;
        Ok(course)
    }
}
