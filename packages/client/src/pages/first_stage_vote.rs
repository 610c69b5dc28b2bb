use std::sync::Arc;

use shared::models::name::Name;
use shared::models::stage::VoteChoice;
use tracing::{debug, error};

use crate::api::NamesApi;
use crate::components::vote_card::VoteEvent;
use crate::store::Store;

/// `/games/:id`: like or dislike candidates one at a time.
///
/// `current` is the candidate on screen, `None` before the first fetch and
/// once every name has been voted on. It only changes when a "next" fetch
/// succeeds; votes are not applied optimistically.
///
/// Nothing cancels an in-flight request. If the game id changes, or the user
/// votes again, before a response arrives, whichever response lands last
/// wins, even if it belongs to the previous game.
pub struct FirstStageVotePage {
    api: Arc<dyn NamesApi>,
    game_id: Store<Option<String>>,
    loading: Store<bool>,
    current: Store<Option<Name>>,
}

impl FirstStageVotePage {
    pub fn new(api: Arc<dyn NamesApi>) -> Self {
        Self {
            api,
            game_id: Store::default(),
            loading: Store::new(false),
            current: Store::default(),
        }
    }

    pub fn game_id(&self) -> Option<String> {
        self.game_id.get()
    }

    pub fn loading(&self) -> &Store<bool> {
        &self.loading
    }

    pub fn current(&self) -> &Store<Option<Name>> {
        &self.current
    }

    /// Route parameter changed (or first mount): fetch the first candidate of that game.
    pub async fn set_game_id(&self, game_id: &str) {
        self.game_id.publish(Some(game_id.to_string()));
        self.next().await;
    }

    pub async fn next(&self) {
        let Some(game_id) = self.game_id.get() else {
            error!("Cannot fetch next candidate: no game selected");
            return;
        };

        self.loading.publish(true);
        match self.api.get_first_stage_next(&game_id).await {
            Ok(name) => {
                debug!(
                    "Next candidate for game {}: {:?}",
                    game_id,
                    name.as_ref().map(|n| &n.value)
                );
                self.current.publish(name);
            }
            Err(e) => error!("Failed to fetch next candidate for game {}: {}", game_id, e),
        }
        self.loading.publish(false);
    }

    pub async fn like(&self, name: &Name) {
        self.vote(name, VoteChoice::Like).await;
    }

    pub async fn dislike(&self, name: &Name) {
        self.vote(name, VoteChoice::Dislike).await;
    }

    /// Runs the side effect a [`VoteCard`](crate::components::vote_card::VoteCard) asked for.
    pub async fn handle(&self, event: VoteEvent) {
        match event {
            VoteEvent::Like(name) => self.like(&name).await,
            VoteEvent::Dislike(name) => self.dislike(&name).await,
        }
    }

    async fn vote(&self, name: &Name, choice: VoteChoice) {
        let Some(game_id) = self.game_id.get() else {
            error!("Cannot vote on {}: no game selected", name.value);
            return;
        };

        self.loading.publish(true);
        match self
            .api
            .first_stage_vote(&game_id, name, choice.into())
            .await
        {
            Ok(()) => self.next().await,
            Err(e) => error!(
                "Failed to vote {:?} on {} in game {}: {}",
                choice, name.id, game_id, e
            ),
        }
        self.loading.publish(false);
    }
}
