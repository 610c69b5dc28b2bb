use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use shared::models::game::{Game, GameCreate, GameUpdate};
use shared::models::name::Name;
use shared::models::stage::{FirstStageChoice, FirstStageVote};
use shared::models::user::User;
use tracing::debug;

use crate::repositories::errors::RepositoryError;
use crate::repositories::game_repository::{FirstStageRecord, GameRepository};
use crate::repositories::name_repository::NameRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::errors::game_service_errors::GameServiceError;

/// Games, their guests and the first stage of voting.
///
/// Every operation is scoped to the calling user: a game is only visible to
/// its owner and to its guests, anyone else gets `GameNotFound`.
#[derive(Clone)]
pub struct GameService {
    games: Arc<dyn GameRepository + Send + Sync>,
    names: Arc<dyn NameRepository + Send + Sync>,
    users: Arc<dyn UserRepository + Send + Sync>,
}

impl GameService {
    pub fn new(
        games: Arc<dyn GameRepository + Send + Sync>,
        names: Arc<dyn NameRepository + Send + Sync>,
        users: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        GameService {
            games,
            names,
            users,
        }
    }

    async fn is_member(&self, game: &Game, user: &User) -> Result<bool, GameServiceError> {
        if game.is_owned_by(&user.id) {
            return Ok(true);
        }
        let guests = self.games.list_guest_ids(&game.id).await?;
        Ok(guests.iter().any(|id| id == &user.id))
    }

    /// Games the user owns or is invited to, oldest first.
    pub async fn get_games(&self, user: &User) -> Result<Vec<Game>, GameServiceError> {
        let mut visible = Vec::new();
        for game in self.games.list_games().await? {
            if self.is_member(&game, user).await? {
                visible.push(game);
            }
        }
        visible.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(visible)
    }

    pub async fn get_game(&self, game_id: &str, user: &User) -> Result<Game, GameServiceError> {
        let game = self.games.get_game(game_id).await.map_err(|e| match e {
            RepositoryError::NotFound => GameServiceError::GameNotFound,
            _ => GameServiceError::from(e),
        })?;

        if !self.is_member(&game, user).await? {
            return Err(GameServiceError::GameNotFound);
        }
        Ok(game)
    }

    pub async fn create_game(
        &self,
        payload: &GameCreate,
        user: &User,
    ) -> Result<Game, GameServiceError> {
        let game = Game::new(user, payload.description.clone(), payload.gender);
        self.games.create_game(&game).await?;
        debug!("Game {} created by {}", game.id, user.username);
        Ok(game)
    }

    pub async fn update_game(
        &self,
        game_id: &str,
        payload: &GameUpdate,
        user: &User,
    ) -> Result<Game, GameServiceError> {
        let mut game = self.get_game(game_id, user).await?;
        game.description = payload.description.clone();
        game.gender = payload.gender;
        game.updated_at = Utc::now();
        self.games.update_game(&game).await?;
        Ok(game)
    }

    pub async fn delete_game(&self, game_id: &str, user: &User) -> Result<(), GameServiceError> {
        let game = self.get_game(game_id, user).await?;
        self.games.delete_game(&game.id).await?;
        Ok(())
    }

    /// Guests of a game, ordered by username. Guests whose account is gone are skipped.
    pub async fn get_game_guests(
        &self,
        game_id: &str,
        user: &User,
    ) -> Result<Vec<User>, GameServiceError> {
        let game = self.get_game(game_id, user).await?;
        let mut guests = self.existing_guests(&game.id).await?;
        guests.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(guests)
    }

    /// Guest rows whose user account still exists.
    async fn existing_guests(&self, game_id: &str) -> Result<Vec<User>, GameServiceError> {
        let mut guests = Vec::new();
        for guest_id in self.games.list_guest_ids(game_id).await? {
            match self.users.get_user_by_id(&guest_id).await {
                Ok(guest) => guests.push(guest),
                Err(RepositoryError::NotFound) => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(guests)
    }

    pub async fn create_game_guest(
        &self,
        game_id: &str,
        guest_id: &str,
        user: &User,
    ) -> Result<Vec<User>, GameServiceError> {
        let game = self.get_game(game_id, user).await?;

        self.users
            .get_user_by_id(guest_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => GameServiceError::UserNotFound,
                _ => GameServiceError::from(e),
            })?;

        self.games
            .add_guest(&game.id, guest_id)
            .await
            .map_err(|e| match e {
                RepositoryError::AlreadyExists => GameServiceError::GuestAlreadyExists,
                _ => GameServiceError::from(e),
            })?;

        self.get_game_guests(&game.id, user).await
    }

    pub async fn delete_game_guest(
        &self,
        game_id: &str,
        guest_id: &str,
        user: &User,
    ) -> Result<Vec<User>, GameServiceError> {
        let game = self.get_game(game_id, user).await?;
        self.games.remove_guest(&game.id, guest_id).await?;
        self.get_game_guests(&game.id, user).await
    }

    /// Records the user's like/dislike for one name. A name can only be voted once per user.
    pub async fn create_first_stage(
        &self,
        game_id: &str,
        payload: &FirstStageVote,
        user: &User,
    ) -> Result<FirstStageChoice, GameServiceError> {
        let game = self.get_game(game_id, user).await?;
        let name = self
            .names
            .get_name(&payload.name_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => GameServiceError::NameNotFound,
                _ => GameServiceError::from(e),
            })?;

        let record = FirstStageRecord::new(&game.id, &user.id, &name.id, payload.choice);
        self.games
            .create_choice(&record)
            .await
            .map_err(|e| match e {
                RepositoryError::AlreadyExists => GameServiceError::ChoiceAlreadyExists,
                _ => GameServiceError::from(e),
            })?;

        debug!(
            "{} voted {} on {} in game {}",
            user.username, payload.choice, name.value, game.id
        );

        Ok(FirstStageChoice {
            id: record.id,
            created_at: record.created_at,
            updated_at: record.updated_at,
            game,
            user: user.clone(),
            name,
            choice: record.choice,
        })
    }

    /// First name of the game's gender the user has not voted on yet.
    pub async fn get_first_stage_next(
        &self,
        game_id: &str,
        user: &User,
    ) -> Result<Option<Name>, GameServiceError> {
        let game = self.get_game(game_id, user).await?;

        let voted: HashSet<String> = self
            .games
            .list_choices(&game.id)
            .await?
            .into_iter()
            .filter(|c| c.user_id == user.id)
            .map(|c| c.name_id)
            .collect();

        Ok(self
            .names
            .list_names(game.gender)
            .await?
            .into_iter()
            .find(|n| !voted.contains(&n.id)))
    }

    /// Names every member of the game (owner and guests with an account) liked, ordered by value.
    pub async fn get_first_stage_result(
        &self,
        game_id: &str,
        user: &User,
    ) -> Result<Vec<Name>, GameServiceError> {
        let game = self.get_game(game_id, user).await?;

        let mut members: HashSet<String> = self
            .existing_guests(&game.id)
            .await?
            .into_iter()
            .map(|guest| guest.id)
            .collect();
        members.insert(game.owner.id.clone());

        let choices = self.games.list_choices(&game.id).await?;

        // Every name counts, whatever the game's current gender.
        let mut result: Vec<Name> = self
            .names
            .list_names(None)
            .await?
            .into_iter()
            .filter(|name| {
                members.iter().all(|member| {
                    choices
                        .iter()
                        .any(|c| c.choice && &c.user_id == member && c.name_id == name.id)
                })
            })
            .collect();
        result.sort_by(|a, b| a.value.cmp(&b.value));
        Ok(result)
    }
}
