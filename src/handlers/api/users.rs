use axum::extract::{Path, Query};
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::User;
use crate::database::store::user::{UserChanges, UserStore};
use crate::database::store::Pagination;
use crate::error::ApiError;
use crate::middleware::{AdminUser, ApiResponse, ApiResult, AuthUser};

/// GET /api/users - list users, admin only
pub async fn list(AdminUser(_): AdminUser, Query(page): Query<Pagination>) -> ApiResult<Vec<User>> {
    let pool = DatabaseManager::pool().await?;
    let users = UserStore::list(&pool, page).await?;
    Ok(ApiResponse::success(users))
}

/// GET /api/users/:user_id
pub async fn get(AuthUser(_): AuthUser, Path(user_id): Path<Uuid>) -> ApiResult<User> {
    let pool = DatabaseManager::pool().await?;
    let user = UserStore::by_id(&pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(ApiResponse::success(user))
}

/// PUT /api/users/:user_id - partial update
pub async fn update(
    AuthUser(_): AuthUser,
    Path(user_id): Path<Uuid>,
    Json(changes): Json<UserChanges>,
) -> ApiResult<User> {
    let pool = DatabaseManager::pool().await?;
    let user = UserStore::update(&pool, user_id, changes)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(ApiResponse::success(user))
}

/// DELETE /api/users/:user_id - soft deactivate
pub async fn delete(AuthUser(_): AuthUser, Path(user_id): Path<Uuid>) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    if !UserStore::deactivate(&pool, user_id).await? {
        return Err(ApiError::not_found("User not found"));
    }
    Ok(ApiResponse::success(
        json!({ "message": "User deactivated successfully" }),
    ))
}
