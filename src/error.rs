//! Error types for card, deck, and store operations.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Code is too short to hold a rank and a suit.
    #[error("card code must have at least two characters")]
    InvalidFormat,
    /// Rank code or name is not in the rank enumeration.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit code or name is not in the suit enumeration.
    #[error("invalid suit")]
    InvalidSuit,
}

/// Errors that can occur while building a partial deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewDeckError {
    /// No card codes were provided.
    #[error("a deck must have at least one card")]
    Empty,
    /// A card code could not be parsed.
    #[error("invalid card code '{code}': {source}")]
    InvalidCode {
        /// The offending code.
        code: String,
        /// The underlying parse error.
        source: ParseCardError,
    },
    /// The same card code was provided more than once.
    #[error("repeated card code '{0}'")]
    DuplicateCode(String),
}

/// Errors that can occur while drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Draw count must be positive.
    #[error("draw count must be positive")]
    InvalidCount,
    /// More cards were requested than remain in the deck.
    #[error("not enough cards remaining in the deck")]
    InsufficientCards,
}

/// Errors that can occur on store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A deck with this id is already in the store.
    #[error("deck {0} already exists in the store")]
    DuplicateId(Uuid),
    /// No deck with this id is in the store.
    #[error("deck {0} not found")]
    NotFound(Uuid),
}
