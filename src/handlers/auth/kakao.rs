use axum::response::Redirect;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use super::LoginResponse;
use crate::auth::kakao::KakaoClient;
use crate::config;
use crate::database::manager::DatabaseManager;
use crate::database::store::user::{NewUser, UserStore};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct KakaoLoginRequest {
    pub code: String,
}

/// GET /auth/kakao - redirect the browser into Kakao's code grant
pub async fn authorize() -> Redirect {
    let kakao = &config::config().kakao;
    let url = KakaoClient::from_config().authorize_url(&kakao.client_id, &kakao.redirect_uri);
    Redirect::temporary(&url)
}

/// POST /auth/kakao/login - exchange an authorization code for an access
/// token, resolve the Kakao profile, and sign the user in. First-time
/// visitors get a user row created from their Kakao nickname.
///
/// Expected Input:
/// ```json
/// { "code": "authorization code from the Kakao redirect" }
/// ```
pub async fn login(Json(payload): Json<KakaoLoginRequest>) -> ApiResult<LoginResponse> {
    let kakao = &config::config().kakao;
    let client = KakaoClient::from_config();

    let token = client
        .exchange_code(&kakao.client_id, &kakao.client_secret, &payload.code)
        .await?;
    let profile = client.fetch_profile(&token.access_token).await?;

    let pool = DatabaseManager::pool().await?;
    let kakao_id = profile.kakao_id();

    let user = match UserStore::by_kakao_id(&pool, &kakao_id).await? {
        Some(user) => {
            UserStore::touch_last_login(&pool, user.id).await?;
            user
        }
        None => {
            let nickname = profile
                .nickname()
                .ok_or_else(|| ApiError::bad_request("Failed to get user info"))?;

            UserStore::insert(
                &pool,
                NewUser {
                    username: nickname.to_string(),
                    auth_type: "kakao".to_string(),
                    password: None,
                    kakao_id: Some(kakao_id),
                    authorizations: Some(json!({ "role": "user" })),
                },
            )
            .await?
        }
    };

    tracing::info!(user_id = %user.id, "kakao login");
    Ok(ApiResponse::success(LoginResponse::issue(&user)?))
}
