use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row shape used by the weekly summary; the row id stays internal.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MoodEntry {
    pub mood: String,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct AddMoodRequest {
    pub mood: Option<String>,
}
