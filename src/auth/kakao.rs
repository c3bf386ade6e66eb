use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the Kakao OAuth endpoints
#[derive(Debug, Error)]
pub enum KakaoError {
    #[error("token endpoint returned status {0}")]
    TokenExchange(u16),

    #[error("profile endpoint returned status {0}")]
    Profile(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Token response from the authorization-code exchange
#[derive(Debug, Deserialize)]
pub struct KakaoToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Subset of the Kakao `/v2/user/me` payload this service reads
#[derive(Debug, Deserialize)]
pub struct KakaoProfile {
    pub id: i64,
    #[serde(default)]
    pub kakao_account: Option<KakaoAccount>,
}

#[derive(Debug, Default, Deserialize)]
pub struct KakaoAccount {
    #[serde(default)]
    pub profile: Option<KakaoAccountProfile>,
}

#[derive(Debug, Default, Deserialize)]
pub struct KakaoAccountProfile {
    #[serde(default)]
    pub nickname: Option<String>,
}

impl KakaoProfile {
    pub fn kakao_id(&self) -> String {
        self.id.to_string()
    }

    pub fn nickname(&self) -> Option<&str> {
        self.kakao_account
            .as_ref()?
            .profile
            .as_ref()?
            .nickname
            .as_deref()
    }
}

/// Client for Kakao's OAuth authorize/token/profile endpoints. Base URLs
/// are injectable so response mapping can be exercised against a local
/// stand-in server.
pub struct KakaoClient {
    http: reqwest::Client,
    auth_base_url: String,
    api_base_url: String,
}

impl KakaoClient {
    pub fn new(auth_base_url: impl Into<String>, api_base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth_base_url: auth_base_url.into(),
            api_base_url: api_base_url.into(),
        }
    }

    pub fn from_config() -> Self {
        let kakao = &config::config().kakao;
        Self::new(kakao.auth_base_url.clone(), kakao.api_base_url.clone())
    }

    /// Browser-facing authorize URL for the code grant
    pub fn authorize_url(&self, client_id: &str, redirect_uri: &str) -> String {
        format!(
            "{}/oauth/authorize?response_type=code&client_id={}&redirect_uri={}",
            self.auth_base_url, client_id, redirect_uri
        )
    }

    /// Exchange an authorization code for an access token
    pub async fn exchange_code(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
    ) -> Result<KakaoToken, KakaoError> {
        let response = self
            .http
            .post(format!("{}/oauth/token", self.auth_base_url))
            .timeout(REQUEST_TIMEOUT)
            .form(&[
                ("grant_type", "authorization_code"),
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("code", code),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(KakaoError::TokenExchange(response.status().as_u16()));
        }

        let token: KakaoToken = response
            .json()
            .await
            .map_err(|e| KakaoError::MalformedResponse(e.to_string()))?;

        if token.access_token.is_empty() {
            return Err(KakaoError::MalformedResponse(
                "empty access_token".to_string(),
            ));
        }

        Ok(token)
    }

    /// Fetch the profile of the token's owner
    pub async fn fetch_profile(&self, access_token: &str) -> Result<KakaoProfile, KakaoError> {
        let response = self
            .http
            .get(format!("{}/v2/user/me", self.api_base_url))
            .timeout(REQUEST_TIMEOUT)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(KakaoError::Profile(response.status().as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| KakaoError::MalformedResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorize_url_carries_client_and_redirect() {
        let client = KakaoClient::new("https://kauth.kakao.com", "https://kapi.kakao.com");
        let url = client.authorize_url("abc123", "http://localhost:8000/auth/kakao/callback");

        assert!(url.starts_with("https://kauth.kakao.com/oauth/authorize?"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("client_id=abc123"));
        assert!(url.contains("redirect_uri=http://localhost:8000/auth/kakao/callback"));
    }

    #[test]
    fn parses_token_response() {
        let token: KakaoToken = serde_json::from_str(
            r#"{"access_token": "tok", "token_type": "bearer", "expires_in": 21599}"#,
        )
        .unwrap();
        assert_eq!(token.access_token, "tok");
        assert_eq!(token.expires_in, Some(21599));
    }

    #[test]
    fn parses_profile_with_nickname() {
        let profile: KakaoProfile = serde_json::from_str(
            r#"{"id": 987654321, "kakao_account": {"profile": {"nickname": "hana"}}}"#,
        )
        .unwrap();
        assert_eq!(profile.kakao_id(), "987654321");
        assert_eq!(profile.nickname(), Some("hana"));
    }

    #[test]
    fn tolerates_profile_without_account_block() {
        let profile: KakaoProfile = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(profile.nickname(), None);
    }
}
