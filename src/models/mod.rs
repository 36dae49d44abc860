use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One apartment recognized in an assistant reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub title: String,
    /// Kept verbatim, currency and period included
    pub price: String,
    pub bedroom_count: u32,
    pub bathroom_count: u32,
    pub location: String,
    /// Empty when the entry carries no photo
    pub image_url: String,
}

/// Structured view of an assistant reply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub introduction: String,
    pub listings: Vec<Listing>,
}

impl ExtractionResult {
    /// No listing was recognized; callers show the original text instead
    pub fn is_prose(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Text returned by a chat backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    pub text: String,
    pub received_at: DateTime<Utc>,
}
