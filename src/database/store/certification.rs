use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::Pagination;
use crate::database::manager::DatabaseError;
use crate::database::models::Certification;

#[derive(Debug, Clone, Deserialize)]
pub struct CertificationCreate {
    pub course_id: Uuid,
    pub user_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub session_ids: Option<Vec<String>>,
}

pub struct CertificationStore;

impl CertificationStore {
    pub async fn by_id(
        pool: &PgPool,
        certification_id: Uuid,
    ) -> Result<Option<Certification>, DatabaseError> {
        let certification =
            sqlx::query_as::<_, Certification>("SELECT * FROM certifications WHERE id = $1")
                .bind(certification_id)
                .fetch_optional(pool)
                .await?;
        Ok(certification)
    }

    pub async fn list(
        pool: &PgPool,
        page: Pagination,
    ) -> Result<Vec<Certification>, DatabaseError> {
        let certifications = sqlx::query_as::<_, Certification>(
            "SELECT * FROM certifications ORDER BY created_at DESC OFFSET $1 LIMIT $2",
        )
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(pool)
        .await?;
        Ok(certifications)
    }

    pub async fn list_by_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<Certification>, DatabaseError> {
        let certifications = sqlx::query_as::<_, Certification>(
            "SELECT * FROM certifications WHERE user_id = $1 ORDER BY issued_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(certifications)
    }

    pub async fn insert(
        pool: &PgPool,
        certification: CertificationCreate,
        created_by: Uuid,
    ) -> Result<Certification, DatabaseError> {
        let session_ids = certification
            .session_ids
            .as_ref()
            .map(|ids| serde_json::json!(ids));

        let certification = sqlx::query_as::<_, Certification>(
            "INSERT INTO certifications \
                 (course_id, user_id, session_ids, issued_at, created_by, updated_by) \
             VALUES ($1, $2, $3, $4, $5, $5) RETURNING *",
        )
        .bind(certification.course_id)
        .bind(certification.user_id)
        .bind(session_ids)
        .bind(certification.issued_at)
        .bind(created_by)
        .fetch_one(pool)
        .await?;
        Ok(certification)
    }
}
