use axum::extract::{Path, Query};
use axum::Json;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::Course;
use crate::database::store::course::{CourseChanges, CourseCreate, CourseStore};
use crate::database::store::Pagination;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// POST /api/courses
pub async fn create(
    AuthUser(user): AuthUser,
    Json(course): Json<CourseCreate>,
) -> ApiResult<Course> {
    let pool = DatabaseManager::pool().await?;
    let course = CourseStore::insert(&pool, course, user.id).await?;
    Ok(ApiResponse::created(course))
}

/// GET /api/courses - active courses, public
pub async fn list(Query(page): Query<Pagination>) -> ApiResult<Vec<Course>> {
    let pool = DatabaseManager::pool().await?;
    let courses = CourseStore::list(&pool, page).await?;
    Ok(ApiResponse::success(courses))
}

/// GET /api/courses/:course_id - public
pub async fn get(Path(course_id): Path<Uuid>) -> ApiResult<Course> {
    let pool = DatabaseManager::pool().await?;
    let course = CourseStore::by_id(&pool, course_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;
    Ok(ApiResponse::success(course))
}

/// PUT /api/courses/:course_id - partial update
pub async fn update(
    AuthUser(user): AuthUser,
    Path(course_id): Path<Uuid>,
    Json(changes): Json<CourseChanges>,
) -> ApiResult<Course> {
    let pool = DatabaseManager::pool().await?;
    let course = CourseStore::update(&pool, course_id, changes, user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;
    Ok(ApiResponse::success(course))
}
