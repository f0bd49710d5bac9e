use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::handlers::non_empty;
use crate::models::session::{
    BreathingCompleteRequest, FocusCompleteRequest, GroundingCompleteRequest,
};
use crate::AppState;

pub async fn breathing_complete(
    State(state): State<AppState>,
    Json(body): Json<BreathingCompleteRequest>,
) -> AppResult<Json<Value>> {
    let Some(mood) = non_empty(&body.mood) else {
        return Err(AppError::Validation("Mood required".into()));
    };
    let duration = body.duration.unwrap_or(30);

    let today = Utc::now().date_naive();

    sqlx::query("INSERT INTO breathing_sessions (mood, duration, date) VALUES (?, ?, ?)")
        .bind(mood.to_lowercase())
        .bind(duration)
        .bind(today)
        .execute(&state.db)
        .await?;

    Ok(Json(json!({
        "message": "Breathing session logged 🌬️",
    })))
}

pub async fn grounding_complete(
    State(state): State<AppState>,
    Json(body): Json<GroundingCompleteRequest>,
) -> AppResult<Json<Value>> {
    let Some(mood) = non_empty(&body.mood) else {
        return Err(AppError::Validation("Mood required".into()));
    };

    let today = Utc::now().date_naive();

    sqlx::query("INSERT INTO grounding_sessions (mood, date) VALUES (?, ?)")
        .bind(mood.to_lowercase())
        .bind(today)
        .execute(&state.db)
        .await?;

    Ok(Json(json!({
        "message": "Grounding exercise completed 🌿",
    })))
}

/// The client may POST with no body at all; everything is defaulted.
pub async fn focus_complete(
    State(state): State<AppState>,
    body: Option<Json<FocusCompleteRequest>>,
) -> AppResult<Json<Value>> {
    let body = body.map(|Json(b)| b).unwrap_or_default();

    let duration = body.duration.unwrap_or(25);
    let completed: i64 = if body.completed.unwrap_or(true) { 1 } else { 0 };

    let today = Utc::now().date_naive();

    sqlx::query("INSERT INTO focus_sessions (duration, completed, date) VALUES (?, ?, ?)")
        .bind(duration)
        .bind(completed)
        .bind(today)
        .execute(&state.db)
        .await?;

    Ok(Json(json!({
        "message": "Momentum built 🌟",
    })))
}
