use axum::http::HeaderValue;
use axum::{routing::get, routing::post, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use academy_api::config;


#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, SECRET_KEY, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Academy API in {:?} mode", config.environment);

    let app = app();

    // Allow tests or deployments to override port via env
    let port = config.server.port;
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Academy API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Service endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes (token acquisition)
        .merge(auth_routes())
        // Resource routes; authentication is per-handler
        .merge(user_routes())
        .merge(course_routes())
        .merge(session_routes())
        .merge(lecture_routes())
        .merge(attendance_routes())
        .merge(certification_routes())
        .merge(enroll_routes())
        // Global middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn cors_layer() -> CorsLayer {
    let origins = &config::config().security.allowed_origins;

    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

fn auth_routes() -> Router {
    use academy_api::handlers::auth;

    Router::new()
        // Kakao code grant
        .route("/auth/kakao", get(auth::kakao::authorize))
        .route("/auth/kakao/login", post(auth::kakao::login))
        // Local accounts
        .route("/auth/register", post(auth::local::register))
        .route("/auth/login", post(auth::local::login))
        // Session
        .route("/auth/logout", post(auth::session::logout))
        .route("/auth/me", get(auth::session::me))
}

fn user_routes() -> Router {
    use academy_api::handlers::api::users;

    Router::new()
        .route("/api/users", get(users::list))
        .route(
            "/api/users/:user_id",
            get(users::get).put(users::update).delete(users::delete),
        )
}

fn course_routes() -> Router {
    use academy_api::handlers::api::courses;

    Router::new()
        .route("/api/courses", get(courses::list).post(courses::create))
        .route(
            "/api/courses/:course_id",
            get(courses::get).put(courses::update),
        )
}

fn session_routes() -> Router {
    use academy_api::handlers::api::sessions;

    Router::new()
        .route("/api/sessions", get(sessions::list).post(sessions::create))
        .route(
            "/api/sessions/:session_id",
            get(sessions::get)
                .put(sessions::update)
                .delete(sessions::delete),
        )
}

fn lecture_routes() -> Router {
    use academy_api::handlers::api::lectures;

    Router::new()
        .route("/api/lectures", get(lectures::list).post(lectures::create))
        .route(
            "/api/lectures/session/:session_id",
            get(lectures::list_by_session),
        )
        .route(
            "/api/lectures/:lecture_id",
            get(lectures::get)
                .put(lectures::update)
                .delete(lectures::delete),
        )
}

fn attendance_routes() -> Router {
    use academy_api::handlers::api::attendances;

    Router::new()
        .route(
            "/api/attendances/lectures/:lecture_id/attendances",
            get(attendances::list_by_lecture).post(attendances::create),
        )
        .route(
            "/api/attendances/:attendance_id",
            get(attendances::get).put(attendances::update),
        )
}

fn certification_routes() -> Router {
    use academy_api::handlers::api::certifications;

    Router::new()
        .route(
            "/api/certifications",
            get(certifications::list).post(certifications::create),
        )
        .route(
            "/api/certifications/user/:user_id",
            get(certifications::list_by_user),
        )
        .route(
            "/api/certifications/:certification_id",
            get(certifications::get),
        )
}

fn enroll_routes() -> Router {
    use academy_api::handlers::api::enrolls;

    Router::new()
        .route("/api/enrolls", get(enrolls::list).post(enrolls::create))
        .route("/api/enrolls/users/:user_id/enrolls", get(enrolls::list_by_user))
        .route(
            "/api/enrolls/sessions/:session_id/enrolls",
            get(enrolls::list_by_session),
        )
        .route(
            "/api/enrolls/users/:user_id/sessions/:session_id",
            get(enrolls::find),
        )
        .route("/api/enrolls/:enroll_id", axum::routing::put(enrolls::update))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Academy API",
            "version": version,
            "description": "Academy platform backend built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "auth": "/auth/kakao, /auth/kakao/login, /auth/register, /auth/login, /auth/logout, /auth/me",
                "users": "/api/users[/:id]",
                "courses": "/api/courses[/:id]",
                "sessions": "/api/sessions[/:id]",
                "lectures": "/api/lectures[/:id], /api/lectures/session/:session_id",
                "attendances": "/api/attendances/lectures/:lecture_id/attendances, /api/attendances/:id",
                "certifications": "/api/certifications[/:id], /api/certifications/user/:user_id",
                "enrolls": "/api/enrolls[/:id], /api/enrolls/users/:user_id/enrolls, /api/enrolls/sessions/:session_id/enrolls",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match academy_api::database::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
