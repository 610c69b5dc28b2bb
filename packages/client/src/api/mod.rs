use async_trait::async_trait;
use shared::models::game::Game;
use shared::models::name::Name;

pub mod errors;
pub mod http;

use errors::ApiClientError;

#[cfg(test)]
use mockall::automock;

/// The four calls the pages make against the Prenoms API.
///
/// Nothing is retried or cached; a failure is handed back as-is.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NamesApi: Send + Sync {
    /// `GET /api/games`
    async fn get_games(&self) -> Result<Vec<Game>, ApiClientError>;

    /// `GET /api/games/{game_id}/stage-1/next`, `None` once every name has been voted on.
    async fn get_first_stage_next(&self, game_id: &str) -> Result<Option<Name>, ApiClientError>;

    /// `GET /api/games/{game_id}/stage-1/result`
    async fn get_first_stage_result(&self, game_id: &str) -> Result<Vec<Name>, ApiClientError>;

    /// `POST /api/games/{game_id}/stage-1` with `{ name_id, choice }`.
    async fn first_stage_vote(
        &self,
        game_id: &str,
        name: &Name,
        choice: bool,
    ) -> Result<(), ApiClientError>;
}
