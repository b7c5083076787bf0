//! Card drawing endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::DrawError;
use crate::store::Store;

use super::{ApiError, parse_deck_id};

/// Query parameters accepted by [`draw_cards`].
///
/// `count` is kept as a raw string so a missing, non-numeric, and
/// non-positive value each produce their own message.
#[derive(Debug, Default, Deserialize)]
pub(super) struct DrawQuery {
    count: Option<String>,
}

/// Response body for drawing cards.
#[derive(Debug, Clone, Serialize)]
pub struct DrawCardsResponse {
    /// The drawn cards, in draw order.
    pub cards: Vec<Card>,
}

/// Draws `count` cards from the front of an existing deck.
///
/// `GET /deck/{deck_id}/draw?count=2`
pub(super) async fn draw_cards(
    State(store): State<Arc<Store>>,
    Path(deck_id): Path<String>,
    Query(query): Query<DrawQuery>,
) -> Result<Json<DrawCardsResponse>, ApiError> {
    let deck_id = parse_deck_id(&deck_id)?;

    let Some(raw_count) = query.count else {
        return Err(ApiError::bad_request("count parameter must be provided"));
    };
    let count: i64 = raw_count
        .parse()
        .map_err(|_| ApiError::bad_request("count parameter must be an integer"))?;
    if count <= 0 {
        return Err(DrawError::InvalidCount.into());
    }

    let deck = store.get(deck_id)?;
    let mut deck = deck.lock();
    let cards = deck.draw(count as usize)?;

    tracing::info!(
        deck_id = %deck_id,
        count,
        remaining = deck.remaining(),
        "drew cards"
    );

    Ok(Json(DrawCardsResponse { cards }))
}
