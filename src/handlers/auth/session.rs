use serde_json::{json, Value};

use crate::database::models::User;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// POST /auth/logout - tokens are stateless, so this only acknowledges;
/// clients drop the token on their side
pub async fn logout() -> ApiResult<Value> {
    Ok(ApiResponse::success(
        json!({ "message": "Successfully logged out" }),
    ))
}

/// GET /auth/me - profile of the token's owner
pub async fn me(AuthUser(user): AuthUser) -> ApiResult<User> {
    Ok(ApiResponse::success(user))
}
