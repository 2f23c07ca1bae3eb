//! Shared test harness: router construction, authenticated request
//! helpers, and database fixtures.
//!
//! Each test binary includes this module separately, so not every
//! helper is used everywhere.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use matchday_api::auth::jwt::{generate_access_token, JwtConfig};
use matchday_api::config::ServerConfig;
use matchday_api::router::build_app_router;
use matchday_api::state::AppState;
use matchday_core::types::DbId;
use matchday_db::models::athlete::{Athlete, CreateAthlete};
use matchday_db::models::team::{CreateTeam, Team};
use matchday_db::models::user::{CreateUser, User};
use matchday_db::repositories::{AthleteRepo, TeamRepo, UserRepo};

/// Fixed signing secret for test tokens.
const TEST_JWT_SECRET: &str = "test-secret-not-for-production";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
///
/// Goes through [`build_app_router`] so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Generate a bearer token for the given user.
///
/// `athlete_id` links the token to an athlete's self-service login,
/// which the RSVP handler uses for the own-row check.
pub fn auth_token(user_id: DbId, role: &str, athlete_id: Option<DbId>) -> String {
    let config = test_config();
    generate_access_token(user_id, role, athlete_id, &config.jwt)
        .expect("token generation must succeed in tests")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send an authenticated GET request.
pub async fn get(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send an authenticated POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, token: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send an authenticated DELETE request.
pub async fn delete(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into a JSON value.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user with a derived unique email.
pub async fn seed_user(pool: &PgPool, name: &str, role: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            role: role.to_string(),
        },
    )
    .await
    .unwrap()
}

/// Insert a team, optionally with a coach.
pub async fn seed_team(pool: &PgPool, name: &str, coach_user_id: Option<DbId>) -> Team {
    TeamRepo::create(
        pool,
        &CreateTeam {
            name: name.to_string(),
            age_category: None,
            coach_user_id,
        },
    )
    .await
    .unwrap()
}

/// Insert an active athlete with no birth date or gender on file.
pub async fn seed_athlete(
    pool: &PgPool,
    first_name: &str,
    last_name: &str,
    team_id: Option<DbId>,
) -> Athlete {
    AthleteRepo::create(
        pool,
        &CreateAthlete {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            birth_date: None,
            gender: None,
            team_id,
        },
    )
    .await
    .unwrap()
}

/// Create an event through the API and return the response body's
/// `data` object. Panics on any non-201 response.
pub async fn create_event_via_api(
    pool: &PgPool,
    token: &str,
    body: serde_json::Value,
) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/events", token, body).await;
    assert_eq!(
        response.status(),
        axum::http::StatusCode::CREATED,
        "event creation fixture failed"
    );
    let mut json = body_json(response).await;
    json["data"].take()
}
