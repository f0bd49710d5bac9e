//! Request shapes for the guided-exercise completion logs.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BreathingCompleteRequest {
    pub mood: Option<String>,
    /// Seconds. Defaults to 30 when absent.
    pub duration: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct GroundingCompleteRequest {
    pub mood: Option<String>,
}

/// Every field is optional; a missing body entirely is also accepted.
#[derive(Debug, Default, Deserialize)]
pub struct FocusCompleteRequest {
    /// Minutes. Defaults to 25 when absent.
    pub duration: Option<i64>,
    /// Defaults to true; stored as 0/1.
    pub completed: Option<bool>,
}
