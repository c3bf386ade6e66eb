use axum::extract::{Path, Query};
use axum::Json;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::{Enroll, EnrollDetail};
use crate::database::store::enroll::{EnrollChanges, EnrollCreate, EnrollStore};
use crate::database::store::Pagination;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// POST /api/enrolls - enroll a user into a session; a second enrollment
/// for the same (user, session) pair answers 400
pub async fn create(AuthUser(user): AuthUser, Json(enroll): Json<EnrollCreate>) -> ApiResult<Enroll> {
    let pool = DatabaseManager::pool().await?;
    let enroll = EnrollStore::insert(&pool, enroll, user.id).await?;
    Ok(ApiResponse::created(enroll))
}

/// GET /api/enrolls - enrollments joined with user, session and course
/// names; public
pub async fn list(Query(page): Query<Pagination>) -> ApiResult<Vec<EnrollDetail>> {
    let pool = DatabaseManager::pool().await?;
    let enrolls = EnrollStore::list_details(&pool, page).await?;
    Ok(ApiResponse::success(enrolls))
}

/// GET /api/enrolls/users/:user_id/enrolls - public
pub async fn list_by_user(
    Path(user_id): Path<Uuid>,
    Query(page): Query<Pagination>,
) -> ApiResult<Vec<EnrollDetail>> {
    let pool = DatabaseManager::pool().await?;
    let enrolls = EnrollStore::details_by_user(&pool, user_id, page).await?;
    Ok(ApiResponse::success(enrolls))
}

/// GET /api/enrolls/sessions/:session_id/enrolls - public
pub async fn list_by_session(
    Path(session_id): Path<Uuid>,
    Query(page): Query<Pagination>,
) -> ApiResult<Vec<EnrollDetail>> {
    let pool = DatabaseManager::pool().await?;
    let enrolls = EnrollStore::details_by_session(&pool, session_id, page).await?;
    Ok(ApiResponse::success(enrolls))
}

/// PUT /api/enrolls/:enroll_id - update the enrollment status
pub async fn update(
    AuthUser(user): AuthUser,
    Path(enroll_id): Path<Uuid>,
    Json(changes): Json<EnrollChanges>,
) -> ApiResult<Enroll> {
    let pool = DatabaseManager::pool().await?;
    let enroll = EnrollStore::update(&pool, enroll_id, changes, user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Enrollment not found"))?;
    Ok(ApiResponse::success(enroll))
}

/// GET /api/enrolls/users/:user_id/sessions/:session_id - is this user
/// enrolled in this session; public
pub async fn find(Path((user_id, session_id)): Path<(Uuid, Uuid)>) -> ApiResult<Enroll> {
    let pool = DatabaseManager::pool().await?;
    let enroll = EnrollStore::find(&pool, user_id, session_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Enrollment not found"))?;
    Ok(ApiResponse::success(enroll))
}
