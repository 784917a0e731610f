//! End-to-end tests driving the HTTP router against an in-memory SQLite store.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use lfg_back::{
    dao::{
        models::NewGameEntity,
        store::sqlite::{SqliteCatalogStore, SqliteConfig},
    },
    routes,
    services::query_service,
    state::AppState,
};

async fn test_app() -> Router {
    let store = SqliteCatalogStore::connect(SqliteConfig::in_memory())
        .await
        .unwrap();
    let catalog = [
        ("League of Legends", Some("https://example.com/lol.jpg")),
        ("Dota 2", None),
    ]
    .into_iter()
    .map(|(name, banner_url)| NewGameEntity {
        name: name.into(),
        banner_url: banner_url.map(Into::into),
    })
    .collect::<Vec<_>>();
    query_service::seed_catalog(&store, &catalog).await.unwrap();

    routes::router(AppState::new(Arc::new(store)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn game_id(app: &Router, name: &str) -> String {
    let (_, games) = send(app, Method::GET, "/games", None).await;
    games
        .as_array()
        .unwrap()
        .iter()
        .find(|game| game["name"] == name)
        .map(|game| game["id"].as_str().unwrap().to_owned())
        .unwrap()
}

fn ad_body(name: &str) -> Value {
    json!({
        "name": name,
        "yearsPlaying": 3,
        "discord": format!("{name}#1234"),
        "weekDays": [1, 3, 5],
        "hourStart": "08:00",
        "hourEnd": "10:30",
        "useVoiceChannel": true,
    })
}

#[tokio::test]
async fn lists_games_with_ad_counts() {
    let app = test_app().await;
    let dota = game_id(&app, "Dota 2").await;
    send(&app, Method::POST, &format!("/games/{dota}/ads"), Some(ad_body("alice"))).await;

    let (status, games) = send(&app, Method::GET, "/games", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(games[0]["name"], "Dota 2");
    assert_eq!(games[0]["_count"]["ads"], 1);
    assert_eq!(games[0]["bannerUrl"], Value::Null);
    assert_eq!(games[1]["name"], "League of Legends");
    assert_eq!(games[1]["_count"]["ads"], 0);
    assert_eq!(games[1]["bannerUrl"], "https://example.com/lol.jpg");
}

#[tokio::test]
async fn created_ad_is_stored_raw_and_listed_for_display() {
    let app = test_app().await;
    let lol = game_id(&app, "League of Legends").await;
    let uri = format!("/games/{lol}/ads");

    let (status, created) = send(&app, Method::POST, &uri, Some(ad_body("alice"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["gameId"], lol.as_str());
    assert_eq!(created["weekDays"], "1,3,5");
    assert_eq!(created["hourStart"], 480);
    assert_eq!(created["hourEnd"], 630);
    assert_eq!(created["discord"], "alice#1234");
    assert!(created["createdAt"].is_string());

    let (status, ads) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        ads,
        json!([{
            "id": created["id"],
            "name": "alice",
            "weekDays": [1, 3, 5],
            "useVoiceChannel": true,
            "yearsPlaying": 3,
            "hourStart": "08:00",
            "hourEnd": "10:30",
        }])
    );
}

#[tokio::test]
async fn ads_are_listed_newest_first() {
    let app = test_app().await;
    let lol = game_id(&app, "League of Legends").await;
    let uri = format!("/games/{lol}/ads");
    for name in ["first", "second", "third"] {
        send(&app, Method::POST, &uri, Some(ad_body(name))).await;
    }

    let (_, ads) = send(&app, Method::GET, &uri, None).await;
    let names: Vec<_> = ads
        .as_array()
        .unwrap()
        .iter()
        .map(|ad| ad["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, ["third", "second", "first"]);
}

#[tokio::test]
async fn game_without_ads_lists_empty() {
    let app = test_app().await;
    let dota = game_id(&app, "Dota 2").await;

    let (status, ads) = send(&app, Method::GET, &format!("/games/{dota}/ads"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ads, json!([]));
}

#[tokio::test]
async fn missing_body_field_is_rejected_without_writing() {
    let app = test_app().await;
    let lol = game_id(&app, "League of Legends").await;
    let uri = format!("/games/{lol}/ads");
    let mut body = ad_body("alice");
    body.as_object_mut().unwrap().remove("discord");

    let (status, error) = send(&app, Method::POST, &uri, Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], true);
    assert_eq!(error["msg"], "Invalid request body");
    assert_eq!(error["fields"][0]["location"], "body");

    let (_, ads) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(ads, json!([]));
}

#[tokio::test]
async fn malformed_hour_is_a_body_error() {
    let app = test_app().await;
    let lol = game_id(&app, "League of Legends").await;
    let mut body = ad_body("alice");
    body["hourEnd"] = json!("25:00");

    let (status, error) =
        send(&app, Method::POST, &format!("/games/{lol}/ads"), Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["msg"], "Invalid request body");
    assert_eq!(error["fields"][0]["field"], "hourEnd");
    assert_eq!(error["fields"][0]["code"], "hour_format");
}

#[tokio::test]
async fn params_and_body_are_reported_independently() {
    let app = test_app().await;
    let blank = "/games/%20/ads";

    let (status, error) = send(&app, Method::POST, blank, Some(ad_body("alice"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["msg"], "Invalid request parameter(s)");

    let (status, error) = send(&app, Method::POST, blank, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["msg"], "Invalid request body and parameter(s)");
    assert_eq!(error["fields"][0]["location"], "params");
    assert_eq!(error["fields"][1]["location"], "body");
}

#[tokio::test]
async fn non_json_body_is_a_body_error() {
    let app = test_app().await;
    let lol = game_id(&app, "League of Legends").await;
    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/games/{lol}/ads"))
        .body(Body::from("name=alice"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error["msg"], "Invalid request body");
}

#[tokio::test]
async fn ad_for_unknown_game_is_a_generic_failure() {
    let app = test_app().await;

    let (status, error) = send(
        &app,
        Method::POST,
        "/games/no-such-game/ads",
        Some(ad_body("alice")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error,
        json!({"error": true, "msg": "Failed to create an ad for the given game"})
    );
}

#[tokio::test]
async fn discord_is_returned_for_an_existing_ad() {
    let app = test_app().await;
    let dota = game_id(&app, "Dota 2").await;
    let (_, created) = send(
        &app,
        Method::POST,
        &format!("/games/{dota}/ads"),
        Some(ad_body("bob")),
    )
    .await;
    let ad_id = created["id"].as_str().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/ads/{ad_id}/discord"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"discord": "bob#1234"}));
}

#[tokio::test]
async fn discord_of_unknown_ad_is_not_found() {
    let app = test_app().await;

    let (status, error) = send(&app, Method::GET, "/ads/missing/discord", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        error,
        json!({"error": true, "msg": "Failed to fetch the discord of the given ad"})
    );
}

#[tokio::test]
async fn healthcheck_reports_ok() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/healthcheck", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn openapi_document_lists_every_route() {
    let app = test_app().await;

    let (status, doc) = send(&app, Method::GET, "/api-doc/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    for path in ["/games", "/games/{id}/ads", "/ads/{id}/discord", "/healthcheck"] {
        assert!(doc["paths"].get(path).is_some(), "{path} missing");
    }
}
