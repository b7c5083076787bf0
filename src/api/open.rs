//! Deck inspection endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use uuid::Uuid;

use crate::card::Card;
use crate::store::Store;

use super::{ApiError, parse_deck_id};

/// Response body for opening a deck.
#[derive(Debug, Clone, Serialize)]
pub struct OpenDeckResponse {
    /// Deck identifier.
    pub deck_id: Uuid,
    /// Whether the deck has been shuffled.
    pub shuffled: bool,
    /// Number of undrawn cards.
    pub remaining: usize,
    /// The undrawn cards, in draw order.
    pub cards: Vec<Card>,
}

/// Returns the current state of an existing deck.
///
/// `GET /deck/{deck_id}`
pub(super) async fn open_deck(
    State(store): State<Arc<Store>>,
    Path(deck_id): Path<String>,
) -> Result<Json<OpenDeckResponse>, ApiError> {
    let deck_id = parse_deck_id(&deck_id)?;

    let deck = store.get(deck_id)?;
    let deck = deck.lock();

    Ok(Json(OpenDeckResponse {
        deck_id: deck.id(),
        shuffled: deck.is_shuffled(),
        remaining: deck.remaining(),
        cards: deck.cards().to_vec(),
    }))
}
