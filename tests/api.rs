//! HTTP endpoint tests, driving the router directly.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use deckrs::{Deck, Store, api};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt; // For oneshot
use uuid::Uuid;

fn test_router() -> (Arc<Store>, Router) {
    let store = Arc::new(Store::new());
    let router = api::router(Arc::clone(&store));
    (store, router)
}

async fn send(router: Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

#[tokio::test]
async fn create_standard_deck() {
    let (store, router) = test_router();

    let (status, body) = send(router, "POST", "/deck/new").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shuffled"], false);
    assert_eq!(body["remaining"], 52);

    let deck_id: Uuid = body["deck_id"].as_str().unwrap().parse().unwrap();
    assert_eq!(store.get(deck_id).unwrap().lock().remaining(), 52);
}

#[tokio::test]
async fn create_partial_deck() {
    let (store, router) = test_router();

    let (status, body) = send(router, "POST", "/deck/new?cards=AS,KD,QH").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shuffled"], false);
    assert_eq!(body["remaining"], 3);

    let deck_id: Uuid = body["deck_id"].as_str().unwrap().parse().unwrap();
    let deck = store.get(deck_id).unwrap();
    let codes: Vec<String> = deck.lock().cards().iter().map(|c| c.code()).collect();
    assert_eq!(codes, ["AS", "KD", "QH"]);
}

#[tokio::test]
async fn create_shuffled_deck() {
    let (_store, router) = test_router();

    let (status, body) = send(router, "POST", "/deck/new?shuffled=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shuffled"], true);
    assert_eq!(body["remaining"], 52);
}

#[tokio::test]
async fn create_rejects_bad_card_lists() {
    let (store, router) = test_router();

    let (status, body) = send(router.clone(), "POST", "/deck/new?cards=AS,ZZ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("invalid card code 'ZZ'"), "{message}");

    let (status, body) = send(router.clone(), "POST", "/deck/new?cards=AS,AS").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("repeated card code"));

    // An empty cards parameter is a single empty code, not a standard deck.
    let (status, _body) = send(router, "POST", "/deck/new?cards=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(store.is_empty());
}

#[tokio::test]
async fn open_returns_deck_state() {
    let (store, router) = test_router();

    let deck = Deck::partial(&["QH", "4D", "AC"]).unwrap();
    let id = deck.id();
    store.add(deck).unwrap();

    let (status, body) = send(router, "GET", &format!("/deck/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deck_id"], id.to_string());
    assert_eq!(body["shuffled"], false);
    assert_eq!(body["remaining"], 3);

    let cards = body["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(
        cards[0],
        serde_json::json!({"value": "QUEEN", "suit": "HEARTS", "code": "QH"})
    );
    assert_eq!(cards[1]["code"], "4D");
    assert_eq!(cards[2]["code"], "AC");
}

#[tokio::test]
async fn open_rejects_bad_and_unknown_ids() {
    let (_store, router) = test_router();

    let (status, body) = send(router.clone(), "GET", "/deck/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "deck id is not valid");

    let (status, body) = send(router, "GET", &format!("/deck/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("deck not found"));
}

#[tokio::test]
async fn draw_removes_cards_from_the_front() {
    let (store, router) = test_router();

    let deck = Deck::partial(&["QH", "4D", "AC", "2C", "KH"]).unwrap();
    let id = deck.id();
    store.add(deck).unwrap();

    let (status, body) = send(router.clone(), "GET", &format!("/deck/{id}/draw?count=2")).await;
    assert_eq!(status, StatusCode::OK);
    let cards = body["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["code"], "QH");
    assert_eq!(cards[1]["code"], "4D");

    // The store observes the mutation.
    let (status, body) = send(router, "GET", &format!("/deck/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["remaining"], 3);
    assert_eq!(body["cards"][0]["code"], "AC");
}

#[tokio::test]
async fn draw_validates_count() {
    let (store, router) = test_router();

    let deck = Deck::partial(&["QH", "4D", "AC"]).unwrap();
    let id = deck.id();
    store.add(deck).unwrap();

    let (status, body) = send(router.clone(), "GET", &format!("/deck/{id}/draw")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "count parameter must be provided");

    let (status, body) = send(router.clone(), "GET", &format!("/deck/{id}/draw?count=abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "count parameter must be an integer");

    let (status, body) = send(router.clone(), "GET", &format!("/deck/{id}/draw?count=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "draw count must be positive");

    let (status, body) = send(router.clone(), "GET", &format!("/deck/{id}/draw?count=-1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "draw count must be positive");

    let (status, body) = send(router.clone(), "GET", &format!("/deck/{id}/draw?count=100")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "not enough cards remaining in the deck");

    // Failed draws removed nothing.
    assert_eq!(store.get(id).unwrap().lock().remaining(), 3);

    let (status, body) = send(
        router,
        "GET",
        &format!("/deck/{}/draw?count=1", Uuid::new_v4()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("deck not found"));
}
