use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum Gender {
    M,
    F,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Gender::M => write!(f, "M"),
            Gender::F => write!(f, "F"),
        }
    }
}

/// A candidate name that games vote on.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Name {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub value: String,
    pub gender: Gender,
}

impl Name {
    pub fn new(value: &str, gender: Gender) -> Self {
        let now = Utc::now();
        Name {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            value: value.to_string(),
            gender,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NameCreate {
    pub value: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NameFilter {
    pub gender: Option<Gender>,
}
