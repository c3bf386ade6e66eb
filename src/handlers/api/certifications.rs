use axum::extract::{Path, Query};
use axum::Json;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::Certification;
use crate::database::store::certification::{CertificationCreate, CertificationStore};
use crate::database::store::Pagination;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// POST /api/certifications
pub async fn create(
    AuthUser(user): AuthUser,
    Json(certification): Json<CertificationCreate>,
) -> ApiResult<Certification> {
    let pool = DatabaseManager::pool().await?;
    let certification = CertificationStore::insert(&pool, certification, user.id).await?;
    Ok(ApiResponse::created(certification))
}

/// GET /api/certifications - public
pub async fn list(Query(page): Query<Pagination>) -> ApiResult<Vec<Certification>> {
    let pool = DatabaseManager::pool().await?;
    let certifications = CertificationStore::list(&pool, page).await?;
    Ok(ApiResponse::success(certifications))
}

/// GET /api/certifications/user/:user_id - a user's certifications
pub async fn list_by_user(
    AuthUser(_): AuthUser,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Vec<Certification>> {
    let pool = DatabaseManager::pool().await?;
    let certifications = CertificationStore::list_by_user(&pool, user_id).await?;
    Ok(ApiResponse::success(certifications))
}

/// GET /api/certifications/:certification_id - public
pub async fn get(Path(certification_id): Path<Uuid>) -> ApiResult<Certification> {
    let pool = DatabaseManager::pool().await?;
    let certification = CertificationStore::by_id(&pool, certification_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Certification not found"))?;
    Ok(ApiResponse::success(certification))
}
