use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::game::Game;
use crate::models::name::Name;
use crate::models::user::User;

/// Body of `POST /games/{id}/stage-1`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FirstStageVote {
    pub name_id: String,
    pub choice: bool,
}

impl FirstStageVote {
    pub fn new(name: &Name, choice: VoteChoice) -> Self {
        FirstStageVote {
            name_id: name.id.clone(),
            choice: choice.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteChoice {
    Like,
    Dislike,
}

impl From<VoteChoice> for bool {
    fn from(choice: VoteChoice) -> Self {
        matches!(choice, VoteChoice::Like)
    }
}

impl From<bool> for VoteChoice {
    fn from(choice: bool) -> Self {
        if choice {
            VoteChoice::Like
        } else {
            VoteChoice::Dislike
        }
    }
}

/// A recorded first stage choice, as returned once a vote is accepted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FirstStageChoice {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub game: Game,
    pub user: User,
    pub name: Name,
    pub choice: bool,
}
