use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a blog post as stored in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub category: String,
    pub featured_image: String,
    pub published_date: DateTime<Utc>,
    pub is_published: bool,
    pub user_id: i64,
    pub slug: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The mass-assignment boundary for posts.
///
/// External payloads (forms, JSON bodies, seed data) are bound to this type,
/// never to [`Post`] itself. Its fields are exactly the columns that may be
/// written through bulk input; any other key in a payload has no field to
/// land in and is silently dropped during deserialization. `id`, `created_at`
/// and `updated_at` are owned by the storage layer and cannot appear here.
///
/// Every field is optional: a draft used for an update may carry only the
/// columns being changed, and a draft missing required columns on insert
/// surfaces as a storage constraint error rather than being validated here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostDraft {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub featured_image: Option<String>,
    pub published_date: Option<DateTime<Utc>>,
    pub is_published: Option<bool>,
    pub user_id: Option<i64>,
    pub slug: Option<String>,
}

impl PostDraft {
    /// Bind an external JSON payload, keeping only writable fields.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// True when no writable field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
