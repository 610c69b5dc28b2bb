use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::models::game::Game;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::repositories::errors::RepositoryError;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Clone, PartialEq)]
pub struct GameGuest {
    pub game_id: String,
    pub user_id: String,
}

/// One user's like/dislike on one name within one game.
#[derive(Debug, Clone, PartialEq)]
pub struct FirstStageRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub game_id: String,
    pub user_id: String,
    pub name_id: String,
    pub choice: bool,
}

impl FirstStageRecord {
    pub fn new(game_id: &str, user_id: &str, name_id: &str, choice: bool) -> Self {
        let now = Utc::now();
        FirstStageRecord {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            game_id: game_id.to_string(),
            user_id: user_id.to_string(),
            name_id: name_id.to_string(),
            choice,
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn create_game(&self, game: &Game) -> Result<(), RepositoryError>;
    async fn get_game(&self, game_id: &str) -> Result<Game, RepositoryError>;
    /// Games in creation order.
    async fn list_games(&self) -> Result<Vec<Game>, RepositoryError>;
    async fn update_game(&self, game: &Game) -> Result<(), RepositoryError>;
    /// Removes the game together with its guests and recorded choices.
    async fn delete_game(&self, game_id: &str) -> Result<(), RepositoryError>;

    async fn list_guest_ids(&self, game_id: &str) -> Result<Vec<String>, RepositoryError>;
    async fn add_guest(&self, game_id: &str, user_id: &str) -> Result<(), RepositoryError>;
    async fn remove_guest(&self, game_id: &str, user_id: &str) -> Result<(), RepositoryError>;

    async fn create_choice(&self, record: &FirstStageRecord) -> Result<(), RepositoryError>;
    async fn list_choices(&self, game_id: &str) -> Result<Vec<FirstStageRecord>, RepositoryError>;
}

#[derive(Clone, Default)]
pub struct InMemoryGameRepository {
    games: Arc<RwLock<Vec<Game>>>,
    guests: Arc<RwLock<Vec<GameGuest>>>,
    choices: Arc<RwLock<Vec<FirstStageRecord>>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn create_game(&self, game: &Game) -> Result<(), RepositoryError> {
        let mut games = self.games.write().await;
        if games.iter().any(|g| g.id == game.id) {
            return Err(RepositoryError::AlreadyExists);
        }
        games.push(game.clone());
        Ok(())
    }

    async fn get_game(&self, game_id: &str) -> Result<Game, RepositoryError> {
        let games = self.games.read().await;
        games
            .iter()
            .find(|g| g.id == game_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn list_games(&self) -> Result<Vec<Game>, RepositoryError> {
        let games = self.games.read().await;
        Ok(games.clone())
    }

    async fn update_game(&self, game: &Game) -> Result<(), RepositoryError> {
        let mut games = self.games.write().await;
        let stored = games
            .iter_mut()
            .find(|g| g.id == game.id)
            .ok_or(RepositoryError::NotFound)?;
        *stored = game.clone();
        Ok(())
    }

    async fn delete_game(&self, game_id: &str) -> Result<(), RepositoryError> {
        let mut games = self.games.write().await;
        let before = games.len();
        games.retain(|g| g.id != game_id);
        if games.len() == before {
            return Err(RepositoryError::NotFound);
        }
        drop(games);

        self.guests.write().await.retain(|g| g.game_id != game_id);
        self.choices.write().await.retain(|c| c.game_id != game_id);
        Ok(())
    }

    async fn list_guest_ids(&self, game_id: &str) -> Result<Vec<String>, RepositoryError> {
        let guests = self.guests.read().await;
        Ok(guests
            .iter()
            .filter(|g| g.game_id == game_id)
            .map(|g| g.user_id.clone())
            .collect())
    }

    async fn add_guest(&self, game_id: &str, user_id: &str) -> Result<(), RepositoryError> {
        let mut guests = self.guests.write().await;
        if guests
            .iter()
            .any(|g| g.game_id == game_id && g.user_id == user_id)
        {
            return Err(RepositoryError::AlreadyExists);
        }
        guests.push(GameGuest {
            game_id: game_id.to_string(),
            user_id: user_id.to_string(),
        });
        Ok(())
    }

    async fn remove_guest(&self, game_id: &str, user_id: &str) -> Result<(), RepositoryError> {
        let mut guests = self.guests.write().await;
        guests.retain(|g| !(g.game_id == game_id && g.user_id == user_id));
        Ok(())
    }

    async fn create_choice(&self, record: &FirstStageRecord) -> Result<(), RepositoryError> {
        let mut choices = self.choices.write().await;
        if choices.iter().any(|c| {
            c.game_id == record.game_id && c.user_id == record.user_id && c.name_id == record.name_id
        }) {
            return Err(RepositoryError::AlreadyExists);
        }
        choices.push(record.clone());
        Ok(())
    }

    async fn list_choices(&self, game_id: &str) -> Result<Vec<FirstStageRecord>, RepositoryError> {
        let choices = self.choices.read().await;
        Ok(choices
            .iter()
            .filter(|c| c.game_id == game_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::user::User;

    #[tokio::test]
    async fn test_update_missing_game() {
        let repository = InMemoryGameRepository::new();
        let game = Game::new(&User::new("alice"), None, None);

        let result = repository.update_game(&game).await;

        assert_eq!(result, Err(RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_duplicate_guest_is_rejected() {
        let repository = InMemoryGameRepository::new();

        repository.add_guest("g1", "u1").await.unwrap();
        let result = repository.add_guest("g1", "u1").await;

        assert_eq!(result, Err(RepositoryError::AlreadyExists));
        assert_eq!(repository.list_guest_ids("g1").await.unwrap(), vec!["u1"]);
    }

    #[tokio::test]
    async fn test_duplicate_choice_is_rejected() {
        let repository = InMemoryGameRepository::new();

        repository
            .create_choice(&FirstStageRecord::new("g1", "u1", "n1", true))
            .await
            .unwrap();
        let result = repository
            .create_choice(&FirstStageRecord::new("g1", "u1", "n1", false))
            .await;

        assert_eq!(result, Err(RepositoryError::AlreadyExists));
    }

    #[tokio::test]
    async fn test_delete_game_cascades() {
        let repository = InMemoryGameRepository::new();
        let game = Game::new(&User::new("alice"), None, None);
        repository.create_game(&game).await.unwrap();
        repository.add_guest(&game.id, "u2").await.unwrap();
        repository
            .create_choice(&FirstStageRecord::new(&game.id, "u2", "n1", true))
            .await
            .unwrap();

        repository.delete_game(&game.id).await.unwrap();

        assert!(repository.list_games().await.unwrap().is_empty());
        assert!(repository.list_guest_ids(&game.id).await.unwrap().is_empty());
        assert!(repository.list_choices(&game.id).await.unwrap().is_empty());
    }
}
