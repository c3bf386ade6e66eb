use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub auth_type: String,
    // Credential material never leaves the API
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
    #[serde(skip_serializing, default)]
    pub kakao_id: Option<String>,
    pub authorizations: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl User {
    /// Role claim from the `authorizations` JSONB; absent means plain user
    pub fn role(&self) -> &str {
        self.authorizations
            .as_ref()
            .and_then(|auth| auth.get("role"))
            .and_then(|role| role.as_str())
            .unwrap_or(ROLE_USER)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == ROLE_ADMIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_with_authorizations(authorizations: Option<serde_json::Value>) -> User {
        User {
            id: Uuid::new_v4(),
            username: "tester".to_string(),
            auth_type: "local".to_string(),
            password: None,
            kakao_id: None,
            authorizations,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login: None,
            is_active: true,
        }
    }

    #[test]
    fn role_defaults_to_user() {
        assert_eq!(user_with_authorizations(None).role(), "user");
        assert_eq!(user_with_authorizations(Some(json!({}))).role(), "user");
        assert_eq!(
            user_with_authorizations(Some(json!({"role": 42}))).role(),
            "user"
        );
    }

    #[test]
    fn admin_role_is_recognized() {
        let admin = user_with_authorizations(Some(json!({"role": "admin"})));
        assert_eq!(admin.role(), "admin");
        assert!(admin.is_admin());
        assert!(!user_with_authorizations(Some(json!({"role": "user"}))).is_admin());
    }

    #[test]
    fn password_is_never_serialized() {
        let mut user = user_with_authorizations(None);
        user.password = Some("$argon2id$...".to_string());
        user.kakao_id = Some("12345".to_string());

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert!(value.get("kakao_id").is_none());
        assert_eq!(value["username"], "tester");
    }
}
