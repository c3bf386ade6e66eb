use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub kakao: KakaoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub secret_key: String,
    pub access_token_expire_minutes: u64,
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KakaoConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_base_url: String,
    pub api_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }

        // Security overrides
        if let Ok(v) = env::var("SECRET_KEY") {
            self.security.secret_key = v;
        }
        if let Ok(v) = env::var("ACCESS_TOKEN_EXPIRE_MINUTES") {
            self.security.access_token_expire_minutes =
                v.parse().unwrap_or(self.security.access_token_expire_minutes);
        }
        if let Ok(v) = env::var("ALLOWED_ORIGINS") {
            self.security.allowed_origins = v.split(',').map(|s| s.trim().to_string()).collect();
        }

        // Kakao overrides
        if let Ok(v) = env::var("KAKAO_CLIENT_ID") {
            self.kakao.client_id = v;
        }
        if let Ok(v) = env::var("KAKAO_CLIENT_SECRET") {
            self.kakao.client_secret = v;
        }
        if let Ok(v) = env::var("KAKAO_REDIRECT_URI") {
            self.kakao.redirect_uri = v;
        }
        if let Ok(v) = env::var("KAKAO_AUTH_BASE_URL") {
            self.kakao.auth_base_url = v;
        }
        if let Ok(v) = env::var("KAKAO_API_BASE_URL") {
            self.kakao.api_base_url = v;
        }

        self
    }

    fn base_kakao() -> KakaoConfig {
        KakaoConfig {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: "http://localhost:8000/auth/kakao/callback".to_string(),
            auth_base_url: "https://kauth.kakao.com".to_string(),
            api_base_url: "https://kapi.kakao.com".to_string(),
        }
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 8000 },
            database: DatabaseConfig {
                max_connections: 10,
                connection_timeout: 30,
            },
            security: SecurityConfig {
                secret_key: "dev-secret-key".to_string(),
                access_token_expire_minutes: 60 * 24, // 1 day
                allowed_origins: vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:5173".to_string(),
                ],
            },
            kakao: Self::base_kakao(),
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig { port: 8000 },
            database: DatabaseConfig {
                max_connections: 20,
                connection_timeout: 10,
            },
            security: SecurityConfig {
                secret_key: String::new(),
                access_token_expire_minutes: 60,
                allowed_origins: vec!["https://staging.example.com".to_string()],
            },
            kakao: Self::base_kakao(),
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 8000 },
            database: DatabaseConfig {
                max_connections: 50,
                connection_timeout: 5,
            },
            security: SecurityConfig {
                secret_key: String::new(),
                access_token_expire_minutes: 30,
                allowed_origins: vec!["https://app.example.com".to_string()],
            },
            kakao: Self::base_kakao(),
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_defaults() {
        let config = AppConfig::development();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.security.access_token_expire_minutes, 60 * 24);
        assert!(!config.security.secret_key.is_empty());
        assert_eq!(config.kakao.auth_base_url, "https://kauth.kakao.com");
    }

    #[test]
    fn production_defaults() {
        let config = AppConfig::production();
        assert_eq!(config.security.access_token_expire_minutes, 30);
        // No baked-in secret outside development
        assert!(config.security.secret_key.is_empty());
        assert_eq!(config.database.max_connections, 50);
    }
}
