use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Enroll {
    pub id: Uuid,
    pub user_id: Uuid,
    pub session_id: Uuid,
    pub enroll_status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub updated_by: Uuid,
    pub is_active: bool,
}

/// Enrollment list row joined with the user, session, and course
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EnrollDetail {
    pub id: Uuid,
    pub user_id: Uuid,
    pub session_id: Uuid,
    pub enroll_status: Option<String>,
    pub user_name: String,
    pub auth_type: String,
    pub session_title: String,
    pub course_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub updated_by: Uuid,
}
