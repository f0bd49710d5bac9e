use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::handlers::non_empty;
use crate::models::journal::{AddJournalRequest, JournalEntry};
use crate::AppState;

pub async fn add_journal(
    State(state): State<AppState>,
    Json(body): Json<AddJournalRequest>,
) -> AppResult<Json<Value>> {
    let (Some(mood), Some(content)) = (non_empty(&body.mood), non_empty(&body.content)) else {
        return Err(AppError::Validation("Mood and content required".into()));
    };

    let today = Utc::now().date_naive();

    sqlx::query("INSERT INTO journals (mood, content, date) VALUES (?, ?, ?)")
        .bind(mood.to_lowercase())
        .bind(content)
        .bind(today)
        .execute(&state.db)
        .await?;

    Ok(Json(json!({
        "message": "Your thoughts are safely saved 💛",
    })))
}

/// Full dump, newest insert first. No pagination.
pub async fn get_journals(State(state): State<AppState>) -> AppResult<Json<Vec<JournalEntry>>> {
    let entries = sqlx::query_as::<_, JournalEntry>(
        "SELECT mood, content, date FROM journals ORDER BY id DESC",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(entries))
}
