use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use shared::models::game::Game;
use shared::models::name::Name;
use shared::models::stage::{FirstStageVote, VoteChoice};
use tracing::debug;

use crate::api::errors::ApiClientError;
use crate::api::NamesApi;
use crate::config::ClientConfig;

/// [`NamesApi`] over HTTP with `reqwest`.
pub struct HttpNamesApi {
    client: Client,
    base_url: String,
    auth_header: String,
    user: Option<String>,
}

impl HttpNamesApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiClientError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            auth_header: config.auth_header.clone(),
            user: config.user.clone(),
        }
    }

    /// `<base>/api/<segments...>`, each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url, ApiClientError> {
        let invalid = || ApiClientError::Transport(format!("Invalid API URL: {}", self.base_url));
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiClientError> {
        let url = self.url(segments)?;
        debug!("{} {}", method, url);
        let request = self.client.request(method, url);
        Ok(match &self.user {
            Some(user) => request.header(self.auth_header.as_str(), user.as_str()),
            None => request,
        })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiClientError> {
        Ok(request.send().await?.error_for_status()?)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiClientError> {
        let response = self.send(self.request(Method::GET, segments)?).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl NamesApi for HttpNamesApi {
    async fn get_games(&self) -> Result<Vec<Game>, ApiClientError> {
        self.get_json(&["games"]).await
    }

    async fn get_first_stage_next(&self, game_id: &str) -> Result<Option<Name>, ApiClientError> {
        let segments = ["games", game_id, "stage-1", "next"];
        let response = self.send(self.request(Method::GET, &segments)?).await?;
        let body = response.bytes().await?;

        // Both `null` and an empty body mean there is nothing left to vote on.
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get_first_stage_result(&self, game_id: &str) -> Result<Vec<Name>, ApiClientError> {
        self.get_json(&["games", game_id, "stage-1", "result"])
            .await
    }

    async fn first_stage_vote(
        &self,
        game_id: &str,
        name: &Name,
        choice: bool,
    ) -> Result<(), ApiClientError> {
        let body = FirstStageVote::new(name, VoteChoice::from(choice));
        let segments = ["games", game_id, "stage-1"];
        self.send(self.request(Method::POST, &segments)?.json(&body))
            .await?;
        Ok(())
    }
}
