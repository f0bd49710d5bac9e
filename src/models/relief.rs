//! Request shapes for the free-text relief logs.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VentAngerRequest {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveOverwhelmRequest {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuickResetRequest {
    pub action: Option<String>,
}
