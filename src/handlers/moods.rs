use std::collections::BTreeMap;

use axum::{extract::State, Json};
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::handlers::non_empty;
use crate::models::mood::{AddMoodRequest, MoodEntry};
use crate::AppState;

pub async fn add_mood(
    State(state): State<AppState>,
    Json(body): Json<AddMoodRequest>,
) -> AppResult<Json<Value>> {
    let Some(mood) = non_empty(&body.mood) else {
        return Err(AppError::Validation("Mood required".into()));
    };

    let today = Utc::now().date_naive();

    sqlx::query("INSERT INTO moods (mood, date) VALUES (?, ?)")
        .bind(mood.to_lowercase())
        .bind(today)
        .execute(&state.db)
        .await?;

    Ok(Json(json!({
        "message": format!("{} mood saved 💛", capitalize(mood)),
    })))
}

/// Inclusive 7-day window ending today. No upper bound is needed: dates are
/// server-stamped, so none lie in the future.
pub async fn weekly_moods(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, String>>> {
    let window_start = Utc::now().date_naive() - Duration::days(6);

    let rows = sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT mood, date FROM moods
        WHERE date >= ?
        ORDER BY date ASC, id ASC
        "#,
    )
    .bind(window_start)
    .fetch_all(&state.db)
    .await?;

    // Later rows overwrite earlier ones, so the newest entry per day wins.
    let mut moods = BTreeMap::new();
    for entry in rows {
        moods.insert(
            entry.date.format("%Y-%m-%d").to_string(),
            capitalize(&entry.mood),
        );
    }

    Ok(Json(moods))
}

/// First character uppercased, the remainder lowercased.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
