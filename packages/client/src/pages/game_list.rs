use std::sync::Arc;

use shared::models::game::Game;
use tracing::{debug, error};

use crate::api::NamesApi;
use crate::store::Store;

/// `/games`: every game the user can take part in.
pub struct GameListPage {
    api: Arc<dyn NamesApi>,
    games: Store<Vec<Game>>,
}

impl GameListPage {
    pub fn new(api: Arc<dyn NamesApi>) -> Self {
        Self {
            api,
            games: Store::default(),
        }
    }

    pub fn games(&self) -> &Store<Vec<Game>> {
        &self.games
    }

    pub async fn activate(&self) {
        self.refresh().await;
    }

    /// Replaces the list with a fresh copy from the API. On failure the previous list stays.
    pub async fn refresh(&self) {
        match self.api.get_games().await {
            Ok(games) => {
                debug!("Fetched {} games", games.len());
                self.games.publish(games);
            }
            Err(e) => error!("Failed to fetch games: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::errors::ApiClientError;
    use crate::api::MockNamesApi;
    use crate::test_support::game;

    #[tokio::test]
    async fn test_publishes_games_in_received_order() {
        let mut api = MockNamesApi::new();
        api.expect_get_games()
            .times(1)
            .returning(|| Ok(vec![game("g2"), game("g1"), game("g3")]));

        let page = GameListPage::new(Arc::new(api));
        page.activate().await;

        let ids: Vec<String> = page.games().get().into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["g2", "g1", "g3"]);
    }

    #[tokio::test]
    async fn test_single_game() {
        let mut api = MockNamesApi::new();
        api.expect_get_games()
            .times(1)
            .returning(|| Ok(vec![game("g1")]));

        let page = GameListPage::new(Arc::new(api));
        page.activate().await;

        let games = page.games().get();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, "g1");
    }

    #[tokio::test]
    async fn test_refresh_replaces_list_wholesale() {
        let mut api = MockNamesApi::new();
        let mut calls = 0;
        api.expect_get_games().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![game("g1"), game("g2")])
            } else {
                Ok(vec![game("g3")])
            }
        });

        let page = GameListPage::new(Arc::new(api));
        page.activate().await;
        page.refresh().await;

        let ids: Vec<String> = page.games().get().into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["g3"]);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_list() {
        let mut api = MockNamesApi::new();
        let mut calls = 0;
        api.expect_get_games().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![game("g1")])
            } else {
                Err(ApiClientError::Transport("connection refused".to_string()))
            }
        });

        let page = GameListPage::new(Arc::new(api));
        page.activate().await;
        page.refresh().await;

        assert_eq!(page.games().get().len(), 1);
    }
}
