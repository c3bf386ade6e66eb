use axum::Json;
use serde::Deserialize;
use serde_json::json;

use super::LoginResponse;
use crate::auth::password;
use crate::database::manager::DatabaseManager;
use crate::database::models::User;
use crate::database::store::user::{NewUser, UserStore};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /auth/register - create a local (password) account
///
/// Expected Input:
/// ```json
/// { "username": "string", "password": "string" }
/// ```
pub async fn register(Json(payload): Json<RegisterRequest>) -> ApiResult<User> {
    if payload.username.trim().is_empty() {
        return Err(ApiError::bad_request("Username cannot be empty"));
    }
    if payload.password.len() < 8 {
        return Err(ApiError::bad_request(
            "Password must be at least 8 characters",
        ));
    }

    let pool = DatabaseManager::pool().await?;

    if UserStore::by_username(&pool, &payload.username)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict("Username is already registered"));
    }

    let hash = password::hash_password(&payload.password).map_err(ApiError::internal_server_error)?;

    let user = UserStore::insert(
        &pool,
        NewUser {
            username: payload.username,
            auth_type: "local".to_string(),
            password: Some(hash),
            kakao_id: None,
            authorizations: Some(json!({ "role": "user" })),
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, "local account registered");
    Ok(ApiResponse::created(user))
}

/// POST /auth/login - authenticate a local account and issue a token.
/// Every failure mode answers the same 401 so the endpoint does not leak
/// which usernames exist.
pub async fn login(Json(payload): Json<LoginRequest>) -> ApiResult<LoginResponse> {
    let pool = DatabaseManager::pool().await?;

    let user = UserStore::by_username(&pool, &payload.username)
        .await?
        .ok_or_else(|| ApiError::unauthorized(INVALID_CREDENTIALS))?;

    if user.auth_type != "local" || !user.is_active {
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    let hash = user
        .password
        .as_deref()
        .ok_or_else(|| ApiError::unauthorized(INVALID_CREDENTIALS))?;

    if !password::verify_password(&payload.password, hash) {
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    UserStore::touch_last_login(&pool, user.id).await?;

    tracing::info!(user_id = %user.id, "local login");
    Ok(ApiResponse::success(LoginResponse::issue(&user)?))
}
