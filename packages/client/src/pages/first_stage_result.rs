use std::sync::Arc;

use shared::models::name::Name;
use tracing::{debug, error};

use crate::api::NamesApi;
use crate::store::Store;

/// `/games/:id/results`: the names every member liked.
pub struct FirstStageResultPage {
    api: Arc<dyn NamesApi>,
    game_id: Store<Option<String>>,
    names: Store<Vec<Name>>,
}

impl FirstStageResultPage {
    pub fn new(api: Arc<dyn NamesApi>) -> Self {
        Self {
            api,
            game_id: Store::default(),
            names: Store::default(),
        }
    }

    pub fn game_id(&self) -> Option<String> {
        self.game_id.get()
    }

    pub fn names(&self) -> &Store<Vec<Name>> {
        &self.names
    }

    /// Route parameter changed (or first mount): refresh once for the new game.
    pub async fn set_game_id(&self, game_id: &str) {
        self.game_id.publish(Some(game_id.to_string()));
        self.refresh().await;
    }

    pub async fn refresh(&self) {
        let Some(game_id) = self.game_id.get() else {
            error!("Cannot fetch results: no game selected");
            return;
        };

        match self.api.get_first_stage_result(&game_id).await {
            Ok(names) => {
                debug!("Fetched {} result names for game {}", names.len(), game_id);
                self.names.publish(names);
            }
            Err(e) => error!("Failed to fetch results for game {}: {}", game_id, e),
        }
    }
}
