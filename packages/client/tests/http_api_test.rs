//! `HttpNamesApi` against a mock HTTP server.

use std::sync::Arc;

use client::api::errors::ApiClientError;
use client::api::http::HttpNamesApi;
use client::api::NamesApi;
use client::config::ClientConfig;
use client::pages::first_stage_vote::FirstStageVotePage;
use client::pages::game_list::GameListPage;
use serde_json::{json, Value};
use shared::models::name::Name;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AT: &str = "2021-03-01T10:00:00Z";

fn name_json(id: &str, value: &str) -> Value {
    json!({
        "id": id,
        "created_at": AT,
        "updated_at": AT,
        "value": value,
        "gender": "F",
    })
}

fn game_json(id: &str) -> Value {
    json!({
        "id": id,
        "created_at": AT,
        "updated_at": AT,
        "description": "Second baby",
        "gender": null,
        "owner": {
            "id": "u1",
            "created_at": AT,
            "updated_at": AT,
            "username": "alice",
        },
    })
}

fn api_for(server: &MockServer, user: Option<&str>) -> HttpNamesApi {
    let config = ClientConfig {
        api_url: server.uri(),
        user: user.map(str::to_string),
        ..ClientConfig::default()
    };
    HttpNamesApi::new(&config).unwrap()
}

fn name(id: &str, value: &str) -> Name {
    serde_json::from_value(name_json(id, value)).unwrap()
}

#[tokio::test]
async fn test_get_games_sends_user_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/games"))
        .and(header("X-Remote-User", "alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([game_json("g1")])))
        .expect(1)
        .mount(&server)
        .await;

    let games = api_for(&server, Some("alice")).get_games().await.unwrap();

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, "g1");
    assert_eq!(games[0].owner.username, "alice");
}

#[tokio::test]
async fn test_game_list_page_publishes_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([game_json("g1")])))
        .expect(1)
        .mount(&server)
        .await;

    let page = GameListPage::new(Arc::new(api_for(&server, None)));
    page.activate().await;

    let games = page.games().get();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, "g1");
}

#[tokio::test]
async fn test_next_null_and_empty_mean_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/games/g1/stage-1/next"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/games/g2/stage-1/next"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let api = api_for(&server, None);

    assert!(api.get_first_stage_next("g1").await.unwrap().is_none());
    assert!(api.get_first_stage_next("g2").await.unwrap().is_none());
}

#[tokio::test]
async fn test_game_id_is_sent_as_one_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/games/g1%3Fx/stage-1/next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(name_json("A", "Alice")))
        .expect(1)
        .mount(&server)
        .await;

    let next = api_for(&server, None)
        .get_first_stage_next("g1?x")
        .await
        .unwrap();

    assert_eq!(next.map(|n| n.id), Some("A".to_string()));
}

#[tokio::test]
async fn test_next_returns_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/games/g1/stage-1/next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(name_json("A", "Alice")))
        .mount(&server)
        .await;

    let next = api_for(&server, None)
        .get_first_stage_next("g1")
        .await
        .unwrap();

    assert_eq!(next.map(|n| n.value), Some("Alice".to_string()));
}

#[tokio::test]
async fn test_vote_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/games/g1/stage-1"))
        .and(body_json(json!({ "name_id": "A", "choice": false })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "ignored": true })))
        .expect(1)
        .mount(&server)
        .await;

    api_for(&server, None)
        .first_stage_vote("g1", &name("A", "Alice"), false)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_result_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/games/g1/stage-1/result"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([name_json("A", "Alice"), name_json("B", "Berthe")])),
        )
        .mount(&server)
        .await;

    let names = api_for(&server, None)
        .get_first_stage_result("g1")
        .await
        .unwrap();

    let values: Vec<&str> = names.iter().map(|n| n.value.as_str()).collect();
    assert_eq!(values, vec!["Alice", "Berthe"]);
}

#[tokio::test]
async fn test_error_status_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/games"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = api_for(&server, None).get_games().await;

    assert!(matches!(
        result,
        Err(ApiClientError::Status { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_malformed_body_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/games/g1/stage-1/result"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let result = api_for(&server, None).get_first_stage_result("g1").await;

    assert!(matches!(result, Err(ApiClientError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_a_failure() {
    let config = ClientConfig {
        api_url: "http://127.0.0.1:1".to_string(),
        ..ClientConfig::default()
    };

    let result = HttpNamesApi::new(&config).unwrap().get_games().await;

    assert!(matches!(result, Err(ApiClientError::Transport(_))));
}

#[tokio::test]
async fn test_vote_page_scenario() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/games/g1/stage-1"))
        .and(body_json(json!({ "name_id": "A", "choice": true })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/games/g1/stage-1"))
        .and(body_json(json!({ "name_id": "B", "choice": false })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    // Each "next" mock serves exactly one request, in mount order.
    for body in [name_json("A", "Alice"), name_json("B", "Bruno"), Value::Null] {
        Mock::given(method("GET"))
            .and(path("/api/games/g1/stage-1/next"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
    }

    let page = FirstStageVotePage::new(Arc::new(api_for(&server, Some("alice"))));

    page.set_game_id("g1").await;
    let a = page.current().get().unwrap();
    assert_eq!(a.id, "A");

    page.like(&a).await;
    let b = page.current().get().unwrap();
    assert_eq!(b.id, "B");

    page.dislike(&b).await;
    assert!(page.current().get().is_none());
    assert!(!page.loading().get());
}
