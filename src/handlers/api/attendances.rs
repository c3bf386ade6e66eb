use axum::extract::{Path, Query};
use axum::Json;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::Attendance;
use crate::database::store::attendance::{AttendanceChanges, AttendanceCreate, AttendanceStore};
use crate::database::store::Pagination;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// POST /api/attendances/lectures/:lecture_id/attendances
pub async fn create(
    AuthUser(user): AuthUser,
    Path(lecture_id): Path<Uuid>,
    Json(attendance): Json<AttendanceCreate>,
) -> ApiResult<Attendance> {
    let pool = DatabaseManager::pool().await?;
    let attendance = AttendanceStore::insert(&pool, lecture_id, attendance, user.id).await?;
    Ok(ApiResponse::created(attendance))
}

/// GET /api/attendances/lectures/:lecture_id/attendances - public
pub async fn list_by_lecture(
    Path(lecture_id): Path<Uuid>,
    Query(page): Query<Pagination>,
) -> ApiResult<Vec<Attendance>> {
    let pool = DatabaseManager::pool().await?;
    let attendances = AttendanceStore::list_by_lecture(&pool, lecture_id, page).await?;
    Ok(ApiResponse::success(attendances))
}

/// GET /api/attendances/:attendance_id - public
pub async fn get(Path(attendance_id): Path<Uuid>) -> ApiResult<Attendance> {
    let pool = DatabaseManager::pool().await?;
    let attendance = AttendanceStore::by_id(&pool, attendance_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Attendance not found"))?;
    Ok(ApiResponse::success(attendance))
}

/// PUT /api/attendances/:attendance_id - partial update
pub async fn update(
    AuthUser(user): AuthUser,
    Path(attendance_id): Path<Uuid>,
    Json(changes): Json<AttendanceChanges>,
) -> ApiResult<Attendance> {
    let pool = DatabaseManager::pool().await?;
    let attendance = AttendanceStore::update(&pool, attendance_id, changes, user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Attendance not found"))?;
    Ok(ApiResponse::success(attendance))
}
