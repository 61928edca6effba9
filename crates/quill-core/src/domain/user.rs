use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity - the owner of posts.
///
/// Users are provisioned outside this system; quill only reads them to
/// resolve post authors and to authenticate dashboard access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// A non-persisted stand-in for a missing author.
    ///
    /// Repositories report an absent user as `None`; callers that need
    /// something to display (the post view) collapse it to this value.
    /// `id` 0 never corresponds to a stored row.
    pub fn placeholder() -> Self {
        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        Self {
            id: 0,
            name: "Guest".to_string(),
            email: String::new(),
            password_hash: String::new(),
            email_verified_at: None,
            created_at: epoch,
            updated_at: epoch,
        }
    }

    /// Whether the account has completed verification.
    pub fn is_verified(&self) -> bool {
        self.email_verified_at.is_some()
    }
}
