use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment posted to an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub content: String,
}

impl Comment {
    pub fn new(id: u64, created_at: DateTime<Utc>, content: impl Into<String>) -> Self {
        Self {
            id,
            created_at,
            content: content.into(),
        }
    }
}
