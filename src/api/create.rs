//! Deck creation endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::deck::Deck;
use crate::store::Store;

use super::ApiError;

/// Query parameters accepted by [`create_deck`].
#[derive(Debug, Default, Deserialize)]
pub(super) struct CreateDeckQuery {
    /// Comma-separated card codes for a partial deck; absent for a
    /// standard deck.
    cards: Option<String>,
    /// Shuffle the deck after creation when `"true"`.
    shuffled: Option<String>,
}

/// Response body for deck creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDeckResponse {
    /// Identifier of the created deck.
    pub deck_id: Uuid,
    /// Whether the deck was shuffled.
    pub shuffled: bool,
    /// Number of cards in the deck.
    pub remaining: usize,
}

/// Creates a standard or partial deck, optionally shuffled.
///
/// `POST /deck/new?cards=AS,KD,QH&shuffled=true`
pub(super) async fn create_deck(
    State(store): State<Arc<Store>>,
    Query(query): Query<CreateDeckQuery>,
) -> Result<Json<CreateDeckResponse>, ApiError> {
    let mut deck = match query.cards {
        Some(ref cards) => {
            let codes: Vec<&str> = cards.split(',').collect();
            Deck::partial(&codes)?
        }
        None => Deck::standard(),
    };

    if query.shuffled.as_deref() == Some("true") {
        deck.shuffle();
    }

    let response = CreateDeckResponse {
        deck_id: deck.id(),
        shuffled: deck.is_shuffled(),
        remaining: deck.remaining(),
    };

    store.add(deck)?;

    tracing::info!(
        deck_id = %response.deck_id,
        shuffled = response.shuffled,
        remaining = response.remaining,
        "created deck"
    );

    Ok(Json(response))
}
