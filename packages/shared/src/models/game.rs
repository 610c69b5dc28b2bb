use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::name::Gender;
use crate::models::user::User;

/// A voting session. `gender`, when set, restricts the candidate pool.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Game {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub description: Option<String>,
    pub gender: Option<Gender>,
    pub owner: User,
}

impl Game {
    pub fn new(owner: &User, description: Option<String>, gender: Option<Gender>) -> Self {
        let now = Utc::now();
        Game {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            description,
            gender,
            owner: owner.clone(),
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner.id == user_id
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GameCreate {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GameUpdate {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameGuestCreate {
    pub user_id: String,
}
