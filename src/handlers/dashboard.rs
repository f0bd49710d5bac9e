use axum::{extract::State, Json};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::AppState;

/// Lifetime totals per log, unscoped by user or date.
/// anger_logs is tracked but deliberately absent here.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_moods_logged: i64,
    pub journals_written: i64,
    pub breathing_sessions: i64,
    pub grounding_sessions: i64,
    pub overwhelm_entries: i64,
    pub focus_sessions: i64,
    pub quick_resets: i64,
}

pub async fn dashboard_summary(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    let summary = DashboardSummary {
        total_moods_logged: count(&state.db, "SELECT COUNT(*) FROM moods").await?,
        journals_written: count(&state.db, "SELECT COUNT(*) FROM journals").await?,
        breathing_sessions: count(&state.db, "SELECT COUNT(*) FROM breathing_sessions").await?,
        grounding_sessions: count(&state.db, "SELECT COUNT(*) FROM grounding_sessions").await?,
        overwhelm_entries: count(&state.db, "SELECT COUNT(*) FROM overwhelm_entries").await?,
        focus_sessions: count(&state.db, "SELECT COUNT(*) FROM focus_sessions").await?,
        quick_resets: count(&state.db, "SELECT COUNT(*) FROM quick_resets").await?,
    };

    Ok(Json(summary))
}

async fn count(db: &SqlitePool, query: &str) -> AppResult<i64> {
    Ok(sqlx::query_scalar::<_, i64>(query).fetch_one(db).await?)
}
