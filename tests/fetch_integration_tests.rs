//! Integration Tests for the cache-first API client and the REPL
//!
//! Runs a fake PokeAPI on a loopback port and drives the client and
//! commands through it over real HTTP.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use pokedex_cli::{models::Pokemon, repl, Cache, PokeApiClient, PokedexError, Session};
use serde_json::{json, Value};

// == Fake API ==

#[derive(Clone)]
struct FakeApi {
    base: String,
    hits: Arc<AtomicUsize>,
}

impl FakeApi {
    fn hit(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }
}

async fn location_areas(
    State(api): State<FakeApi>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    api.hit();
    let first = format!("{}/location-area", api.base);
    let second = format!("{}/location-area?offset=20", api.base);

    let body = match params.get("offset").map(String::as_str) {
        Some("20") => json!({
            "count": 2,
            "next": null,
            "previous": first,
            "results": [{"name": "eterna-city-area", "url": format!("{}/location-area/2/", api.base)}]
        }),
        _ => json!({
            "count": 2,
            "next": second,
            "previous": null,
            "results": [{"name": "canalave-city-area", "url": format!("{}/location-area/1/", api.base)}]
        }),
    };
    Json(body)
}

async fn location_area(
    State(api): State<FakeApi>,
    Path(name): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    api.hit();
    if name != "canalave-city-area" {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({
        "id": 1,
        "name": name,
        "pokemon_encounters": [
            {"pokemon": {"name": "tentacool", "url": "u"}, "version_details": []},
            {"pokemon": {"name": "pidgey", "url": "u"}, "version_details": []}
        ]
    })))
}

async fn pokemon(
    State(api): State<FakeApi>,
    Path(name): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    api.hit();
    let base_experience = match name.as_str() {
        "pidgey" => 50,
        "tentacool" => 67,
        _ => return Err(StatusCode::NOT_FOUND),
    };
    Ok(Json(json!({
        "id": 16,
        "name": name,
        "base_experience": base_experience,
        "height": 3,
        "weight": 18,
        "is_default": true,
        "stats": [
            {"base_stat": 40, "effort": 0, "stat": {"name": "hp", "url": "u"}}
        ],
        "types": [
            {"slot": 1, "type": {"name": "normal", "url": "u"}},
            {"slot": 2, "type": {"name": "flying", "url": "u"}}
        ]
    })))
}

/// Starts the fake API and returns its base URL and request counter.
async fn spawn_fake_api() -> (String, Arc<AtomicUsize>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base = format!("http://{}/api/v2", addr);
    let hits = Arc::new(AtomicUsize::new(0));

    let state = FakeApi {
        base: base.clone(),
        hits: hits.clone(),
    };
    let app = Router::new()
        .route("/api/v2/location-area", get(location_areas))
        .route("/api/v2/location-area/:name", get(location_area))
        .route("/api/v2/pokemon/:name", get(pokemon))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (base, hits)
}

async fn client_with_ttl(ttl: Duration) -> (PokeApiClient, Arc<AtomicUsize>) {
    let (base, hits) = spawn_fake_api().await;
    let cache = Arc::new(Cache::new(ttl));
    (PokeApiClient::new(cache, base), hits)
}

// == Client Tests ==

#[tokio::test]
async fn test_second_fetch_is_served_from_cache() {
    let (client, hits) = client_with_ttl(Duration::from_secs(300)).await;

    let first = client.pokemon("pidgey").await.unwrap();
    let second = client.pokemon("pidgey").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.base_experience(), 50);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(client.cache().len().await, 1);
}

#[tokio::test]
async fn test_cache_stores_canonical_encoding() {
    let (client, _) = client_with_ttl(Duration::from_secs(300)).await;

    let fetched = client.pokemon("pidgey").await.unwrap();

    let bytes = client
        .cache()
        .get(&client.pokemon_url("pidgey"))
        .await
        .expect("fetched response should be cached");
    let cached: Pokemon = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(cached, fetched);
    // Fields outside the model are dropped on re-encoding
    let text = String::from_utf8(bytes).unwrap();
    assert!(!text.contains("is_default"));
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let (client, hits) = client_with_ttl(Duration::from_secs(300)).await;

    let result = client.pokemon("missingno").await;

    assert!(matches!(result, Err(PokedexError::Status(404))));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(client.cache().is_empty().await);
}

#[tokio::test]
async fn test_expired_response_is_fetched_again() {
    let (client, hits) = client_with_ttl(Duration::from_millis(100)).await;

    let url = client.first_page_url();
    client.location_areas(&url).await.unwrap();
    client.location_areas(&url).await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    tokio::time::sleep(Duration::from_millis(300)).await;

    assert!(client.cache().get(&url).await.is_none());
    client.location_areas(&url).await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_concurrent_fetches_share_one_cache() {
    let (client, _) = client_with_ttl(Duration::from_secs(300)).await;

    let handles: Vec<_> = ["pidgey", "tentacool"]
        .into_iter()
        .map(|name| {
            let client = client.clone();
            tokio::spawn(async move { client.pokemon(name).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(client.cache().len().await, 2);
    let pidgey = client.pokemon("pidgey").await.unwrap();
    assert_eq!(pidgey.name, "pidgey");
    let tentacool = client.pokemon("tentacool").await.unwrap();
    assert_eq!(tentacool.base_experience(), 67);
}

// == REPL Tests ==

#[tokio::test]
async fn test_repl_session_against_fake_api() {
    let (client, hits) = client_with_ttl(Duration::from_secs(300)).await;
    let mut session = Session::new(client);
    let mut out = Vec::new();

    let input: &[u8] = b"map\nmap\nmap\nmapb\nexplore canalave-city-area\ncatch pidgey\ncatch pidgey\ninspect pidgey\npokedex\nexit\n";
    repl::run(&mut session, input, &mut out).await.unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("canalave-city-area\n"));
    assert!(output.contains("eterna-city-area\n"));
    assert!(output.contains("no next page available"));
    assert!(output.contains("Exploring canalave-city-area...\nFound Pokemon:\n - tentacool\n - pidgey\n"));
    assert!(output.contains("Gotcha! pidgey was caught successfully!"));
    assert!(output.contains("pidgey is already caught"));
    assert!(output.contains("Name: pidgey\nHeight: 3\nWeight: 18\n"));
    assert!(output.contains("  - flying\n"));
    assert!(output.contains("Your Pokedex:\n - pidgey\n"));
    assert!(output.ends_with("Closing the Pokedex... Goodbye!\n"));

    // Two listing pages, one area, one pokemon; mapb is a cache hit
    assert_eq!(hits.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_repl_reports_remote_errors_and_continues() {
    let (client, _) = client_with_ttl(Duration::from_secs(300)).await;
    let mut session = Session::new(client);
    let mut out = Vec::new();

    let input: &[u8] = b"catch missingno\nexplore nowhere\npokedex\n";
    repl::run(&mut session, input, &mut out).await.unwrap();

    let output = String::from_utf8(out).unwrap();
    assert_eq!(
        output.matches("response failed with status code 404").count(),
        2
    );
    assert!(output.contains("you have not caught any pokemon"));
    assert!(session.pokedex.is_empty());
}
