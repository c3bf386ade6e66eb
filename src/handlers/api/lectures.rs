use axum::extract::{Path, Query};
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::Lecture;
use crate::database::store::lecture::{LectureChanges, LectureCreate, LectureStore};
use crate::database::store::Pagination;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// POST /api/lectures
pub async fn create(
    AuthUser(user): AuthUser,
    Json(lecture): Json<LectureCreate>,
) -> ApiResult<Lecture> {
    let pool = DatabaseManager::pool().await?;
    let lecture = LectureStore::insert(&pool, lecture, user.id).await?;
    Ok(ApiResponse::created(lecture))
}

/// GET /api/lectures - public
pub async fn list(Query(page): Query<Pagination>) -> ApiResult<Vec<Lecture>> {
    let pool = DatabaseManager::pool().await?;
    let lectures = LectureStore::list(&pool, page).await?;
    Ok(ApiResponse::success(lectures))
}

/// GET /api/lectures/session/:session_id - lectures of one session; public
pub async fn list_by_session(
    Path(session_id): Path<Uuid>,
    Query(page): Query<Pagination>,
) -> ApiResult<Vec<Lecture>> {
    let pool = DatabaseManager::pool().await?;
    let lectures = LectureStore::list_by_session(&pool, session_id, page).await?;
    Ok(ApiResponse::success(lectures))
}

/// GET /api/lectures/:lecture_id - public
pub async fn get(Path(lecture_id): Path<Uuid>) -> ApiResult<Lecture> {
    let pool = DatabaseManager::pool().await?;
    let lecture = LectureStore::by_id(&pool, lecture_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Lecture not found"))?;
    Ok(ApiResponse::success(lecture))
}

/// PUT /api/lectures/:lecture_id - partial update
pub async fn update(
    AuthUser(user): AuthUser,
    Path(lecture_id): Path<Uuid>,
    Json(changes): Json<LectureChanges>,
) -> ApiResult<Lecture> {
    let pool = DatabaseManager::pool().await?;
    let lecture = LectureStore::update(&pool, lecture_id, changes, user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Lecture not found"))?;
    Ok(ApiResponse::success(lecture))
}

/// DELETE /api/lectures/:lecture_id - lectures are removed outright, they
/// carry no is_active flag
pub async fn delete(AuthUser(_): AuthUser, Path(lecture_id): Path<Uuid>) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    if !LectureStore::delete(&pool, lecture_id).await? {
        return Err(ApiError::not_found("Lecture not found"));
    }
    Ok(ApiResponse::success(
        json!({ "message": "Lecture deactivated successfully" }),
    ))
}
