use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A participant, identified by the username the reverse proxy hands us.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct User {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub username: String,
}

impl User {
    pub fn new(username: &str) -> Self {
        let now = Utc::now();
        User {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            username: username.to_string(),
        }
    }
}
