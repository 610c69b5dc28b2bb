//! Fixtures shared by the unit tests.

use chrono::{TimeZone, Utc};
use shared::models::game::Game;
use shared::models::name::{Gender, Name};
use shared::models::user::User;

pub fn user(username: &str) -> User {
    let at = Utc.with_ymd_and_hms(2021, 3, 1, 10, 0, 0).unwrap();
    User {
        id: format!("user-{}", username),
        created_at: at,
        updated_at: at,
        username: username.to_string(),
    }
}

pub fn game(id: &str) -> Game {
    let at = Utc.with_ymd_and_hms(2021, 3, 1, 10, 0, 0).unwrap();
    Game {
        id: id.to_string(),
        created_at: at,
        updated_at: at,
        description: Some(format!("Game {}", id)),
        gender: None,
        owner: user("alice"),
    }
}

pub fn name(id: &str, value: &str) -> Name {
    let at = Utc.with_ymd_and_hms(2021, 3, 1, 10, 0, 0).unwrap();
    Name {
        id: id.to_string(),
        created_at: at,
        updated_at: at,
        value: value.to_string(),
        gender: Gender::F,
    }
}
