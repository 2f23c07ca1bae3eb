//! HTTP-level integration tests for the calendar month view.

mod common;

use axum::http::StatusCode;
use common::{auth_token, body_json, create_event_via_api, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn month_view_returns_a_padded_grid_with_events(pool: PgPool) {
    let user = common::seed_user(&pool, "Admin", "admin").await;
    let token = auth_token(user.id, "admin", None);

    create_event_via_api(
        &pool,
        &token,
        serde_json::json!({"name": "Mid-month game", "event_date": "2030-06-15"}),
    )
    .await;
    create_event_via_api(
        &pool,
        &token,
        serde_json::json!({"name": "Out of month", "event_date": "2030-07-02"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/calendar/2030/6", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["year"], 2030);
    assert_eq!(data["month"], 6);

    // Full weeks of cells: padding nulls around exactly 30 day numbers.
    let cells = data["cells"].as_array().unwrap();
    assert_eq!(cells.len() % 7, 0);
    let days: Vec<u64> = cells.iter().filter_map(|c| c.as_u64()).collect();
    assert_eq!(days.len(), 30);
    assert_eq!(days.first(), Some(&1));
    assert_eq!(days.last(), Some(&30));

    // Only the month's own events appear, keyed by date.
    let by_date = data["events_by_date"].as_object().unwrap();
    assert_eq!(by_date.len(), 1);
    let on_day = by_date["2030-06-15"].as_array().unwrap();
    assert_eq!(on_day.len(), 1);
    assert_eq!(on_day[0]["name"], "Mid-month game");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn month_view_handles_leap_february(pool: PgPool) {
    let user = common::seed_user(&pool, "Admin", "admin").await;
    let token = auth_token(user.id, "admin", None);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/calendar/2032/2", &token).await).await;

    let cells = json["data"]["cells"].as_array().unwrap();
    let days: Vec<u64> = cells.iter().filter_map(|c| c.as_u64()).collect();
    assert_eq!(days.len(), 29);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_month_returns_400(pool: PgPool) {
    let user = common::seed_user(&pool, "Admin", "admin").await;
    let token = auth_token(user.id, "admin", None);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/calendar/2030/13", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
