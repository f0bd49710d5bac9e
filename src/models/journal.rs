use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JournalEntry {
    pub mood: String,
    pub content: String,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct AddJournalRequest {
    pub mood: Option<String>,
    pub content: Option<String>,
}
