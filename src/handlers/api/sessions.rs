use axum::extract::{Path, Query};
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::{Session, SessionDetail};
use crate::database::store::session::{SessionChanges, SessionCreate, SessionStore};
use crate::database::store::Pagination;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// POST /api/sessions
pub async fn create(
    AuthUser(user): AuthUser,
    Json(session): Json<SessionCreate>,
) -> ApiResult<Session> {
    let pool = DatabaseManager::pool().await?;
    let session = SessionStore::insert(&pool, session, user.id).await?;
    Ok(ApiResponse::created(session))
}

/// GET /api/sessions - active sessions with course name, derived status
/// and lecture count; public
pub async fn list(Query(page): Query<Pagination>) -> ApiResult<Vec<SessionDetail>> {
    let pool = DatabaseManager::pool().await?;
    let sessions = SessionStore::list_details(&pool, page).await?;
    Ok(ApiResponse::success(sessions))
}

/// GET /api/sessions/:session_id - same joined shape as the list; public
pub async fn get(Path(session_id): Path<Uuid>) -> ApiResult<SessionDetail> {
    let pool = DatabaseManager::pool().await?;
    let session = SessionStore::detail_by_id(&pool, session_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Session not found"))?;
    Ok(ApiResponse::success(session))
}

/// PUT /api/sessions/:session_id - partial update
pub async fn update(
    AuthUser(user): AuthUser,
    Path(session_id): Path<Uuid>,
    Json(changes): Json<SessionChanges>,
) -> ApiResult<Session> {
    let pool = DatabaseManager::pool().await?;
    let session = SessionStore::update(&pool, session_id, changes, user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Session not found"))?;
    Ok(ApiResponse::success(session))
}

/// DELETE /api/sessions/:session_id - soft deactivate
pub async fn delete(AuthUser(_): AuthUser, Path(session_id): Path<Uuid>) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    if !SessionStore::deactivate(&pool, session_id).await? {
        return Err(ApiError::not_found("Session not found"));
    }
    Ok(ApiResponse::success(
        json!({ "message": "Session deactivated successfully" }),
    ))
}
