use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::handlers::non_empty;
use crate::models::relief::{QuickResetRequest, SaveOverwhelmRequest, VentAngerRequest};
use crate::AppState;

pub async fn vent_anger(
    State(state): State<AppState>,
    Json(body): Json<VentAngerRequest>,
) -> AppResult<Json<Value>> {
    let Some(content) = non_empty(&body.content) else {
        return Err(AppError::Validation("Content required".into()));
    };

    let today = Utc::now().date_naive();

    sqlx::query("INSERT INTO anger_logs (content, date) VALUES (?, ?)")
        .bind(content)
        .bind(today)
        .execute(&state.db)
        .await?;

    Ok(Json(json!({
        "message": "Vent released safely 🌶️",
    })))
}

pub async fn save_overwhelm(
    State(state): State<AppState>,
    Json(body): Json<SaveOverwhelmRequest>,
) -> AppResult<Json<Value>> {
    let Some(content) = non_empty(&body.content) else {
        return Err(AppError::Validation("Content required".into()));
    };

    let today = Utc::now().date_naive();

    sqlx::query("INSERT INTO overwhelm_entries (content, date) VALUES (?, ?)")
        .bind(content)
        .bind(today)
        .execute(&state.db)
        .await?;

    Ok(Json(json!({
        "message": "You're not carrying this alone 💜",
    })))
}

pub async fn quick_reset(
    State(state): State<AppState>,
    Json(body): Json<QuickResetRequest>,
) -> AppResult<Json<Value>> {
    let Some(action) = non_empty(&body.action) else {
        return Err(AppError::Validation("Action required".into()));
    };

    let today = Utc::now().date_naive();

    sqlx::query("INSERT INTO quick_resets (action, date) VALUES (?, ?)")
        .bind(action)
        .bind(today)
        .execute(&state.db)
        .await?;

    Ok(Json(json!({
        "message": "Small reset done 🌿",
    })))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_util::{post_json, test_app};

    #[tokio::test]
    async fn vent_anger_requires_content() {
        let (app, _ctx) = test_app().await;

        let (status, body) = post_json(&app, "/vent_anger", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Content required");

        let (status, body) =
            post_json(&app, "/vent_anger", json!({ "content": "long day" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Vent released safely 🌶️");
    }

    #[tokio::test]
    async fn overwhelm_content_is_stored_verbatim() {
        let (app, ctx) = test_app().await;

        let (status, _) = post_json(
            &app,
            "/save_overwhelm",
            json!({ "content": "Too Many Things At Once" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        // Free text keeps its casing, unlike mood labels.
        let content =
            sqlx::query_scalar::<_, String>("SELECT content FROM overwhelm_entries")
                .fetch_one(&ctx.db)
                .await
                .unwrap();
        assert_eq!(content, "Too Many Things At Once");
    }

    #[tokio::test]
    async fn quick_reset_requires_action() {
        let (app, _ctx) = test_app().await;

        let (status, body) = post_json(&app, "/quick_reset", json!({ "action": "" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Action required");

        let (status, body) =
            post_json(&app, "/quick_reset", json!({ "action": "stretch" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Small reset done 🌿");
    }
}
