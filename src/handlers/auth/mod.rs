pub mod kakao;
pub mod local;
pub mod session;

use serde::Serialize;
use uuid::Uuid;

use crate::auth::{self, Claims};
use crate::database::models::User;
use crate::error::ApiError;

/// Body of every successful login, regardless of flow
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub id: Uuid,
    pub nickname: String,
    pub email: Option<String>,
}

impl LoginResponse {
    /// Issue a token for `user` with its current role claim
    pub fn issue(user: &User) -> Result<Self, ApiError> {
        let claims = Claims::new(user.id, user.role());
        let token = auth::generate_token(&claims)?;

        Ok(Self {
            token,
            user: LoginUser {
                id: user.id,
                nickname: user.username.clone(),
                // Kakao does not share an email address with this app
                email: None,
            },
        })
    }
}
