mod common;

use anyhow::Result;
use reqwest::StatusCode;

// Every mutation on the /api surface requires a bearer token; these run
// before any database access, so they hold with or without a database.

#[tokio::test]
async fn mutations_require_a_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let id = "00000000-0000-0000-0000-000000000000";

    for (method, path) in [
        ("POST", "/api/courses".to_string()),
        ("PUT", format!("/api/courses/{id}")),
        ("POST", "/api/sessions".to_string()),
        ("PUT", format!("/api/sessions/{id}")),
        ("DELETE", format!("/api/sessions/{id}")),
        ("POST", "/api/lectures".to_string()),
        ("PUT", format!("/api/lectures/{id}")),
        ("DELETE", format!("/api/lectures/{id}")),
        ("POST", format!("/api/attendances/lectures/{id}/attendances")),
        ("PUT", format!("/api/attendances/{id}")),
        ("POST", "/api/certifications".to_string()),
        ("POST", "/api/enrolls".to_string()),
        ("PUT", format!("/api/enrolls/{id}")),
        ("PUT", format!("/api/users/{id}")),
        ("DELETE", format!("/api/users/{id}")),
    ] {
        let url = format!("{}{}", server.base_url, path);
        let req = match method {
            "POST" => client.post(&url),
            "PUT" => client.put(&url),
            "DELETE" => client.delete(&url),
            _ => unreachable!(),
        };
        let res = req.send().await?;
        assert_eq!(
            res.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {path} without a token"
        );
    }

    Ok(())
}

#[tokio::test]
async fn admin_listing_requires_a_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/users", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/api/users", server.base_url))
        .header("Authorization", "Bearer bogus")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn public_listings_do_not_require_a_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for path in [
        "/api/courses",
        "/api/sessions",
        "/api/lectures",
        "/api/certifications",
        "/api/enrolls",
    ] {
        let res = client
            .get(format!("{}{}", server.base_url, path))
            .send()
            .await?;
        // 200 with a live database; 500/503 without one - never an auth error
        assert_ne!(
            res.status(),
            StatusCode::UNAUTHORIZED,
            "GET {path} should be public"
        );
        assert!(
            res.status() == StatusCode::OK
                || res.status() == StatusCode::INTERNAL_SERVER_ERROR
                || res.status() == StatusCode::SERVICE_UNAVAILABLE,
            "GET {path}: unexpected status {}",
            res.status()
        );
    }

    Ok(())
}
