use std::net::SocketAddr;
use std::sync::Arc;

use api::state::AppState;
use client::api::http::HttpNamesApi;
use client::api::NamesApi;
use client::config::ClientConfig;
use reqwest::{Client, Response};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const AUTH_HEADER: &str = "X-Remote-User";

/// A reference API server bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    client: Client,
}

impl TestServer {
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let app = api::app(AppState::in_memory(AUTH_HEADER), "/api");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server stopped unexpectedly");
        });

        Self {
            addr,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Client-side API acting as `user`.
    pub fn names_api(&self, user: &str) -> Arc<dyn NamesApi> {
        let config = ClientConfig {
            api_url: self.base_url(),
            user: Some(user.to_string()),
            auth_header: AUTH_HEADER.to_string(),
        };
        Arc::new(HttpNamesApi::new(&config).expect("Failed to build API client"))
    }

    async fn send(&self, user: &str, request: reqwest::RequestBuilder) -> Response {
        request
            .header(AUTH_HEADER, user)
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn get(&self, user: &str, path: &str) -> Response {
        let url = format!("{}/api{}", self.base_url(), path);
        self.send(user, self.client.get(url)).await
    }

    pub async fn post(&self, user: &str, path: &str, body: Value) -> Response {
        let url = format!("{}/api{}", self.base_url(), path);
        self.send(user, self.client.post(url).json(&body)).await
    }

    pub async fn create_name(&self, value: &str, gender: &str) -> String {
        let resp = self
            .post("alice", "/names", json!({ "value": value, "gender": gender }))
            .await;
        assert_eq!(resp.status(), 201);
        id_of(resp).await
    }

    pub async fn create_game(&self, owner: &str, description: &str, gender: &str) -> String {
        let resp = self
            .post(
                owner,
                "/games",
                json!({ "description": description, "gender": gender }),
            )
            .await;
        assert_eq!(resp.status(), 201);
        id_of(resp).await
    }

    /// Signs `user` in and returns their id.
    pub async fn user_id(&self, user: &str) -> String {
        let resp = self.get(user, "/me").await;
        assert_eq!(resp.status(), 200);
        id_of(resp).await
    }

    pub async fn invite(&self, owner: &str, game_id: &str, guest: &str) {
        let user_id = self.user_id(guest).await;
        let resp = self
            .post(
                owner,
                &format!("/games/{}/guests", game_id),
                json!({ "user_id": user_id }),
            )
            .await;
        assert!(resp.status().is_success(), "invite failed: {}", resp.status());
    }
}

async fn id_of(resp: Response) -> String {
    let body: Value = resp.json().await.expect("Response is not JSON");
    body["id"]
        .as_str()
        .expect("Response has no id")
        .to_string()
}
