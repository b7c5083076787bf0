//! A deck of cards engine with a concurrency-safe store and REST API.
//!
//! The crate provides [`Deck`] (creation, shuffling, drawing) and
//! [`Store`] (a thread-safe registry of decks), plus the [`api`] module
//! exposing both over HTTP.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, Store};
//!
//! let store = Store::new();
//!
//! let mut deck = Deck::standard();
//! deck.shuffle();
//! let id = deck.id();
//! store.add(deck).unwrap();
//!
//! let deck = store.get(id).unwrap();
//! let drawn = deck.lock().draw(5).unwrap();
//! assert_eq!(drawn.len(), 5);
//! assert_eq!(deck.lock().remaining(), 47);
//! ```

pub mod api;
pub mod card;
pub mod deck;
pub mod error;
pub mod store;
pub mod sync;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use deck::{DECK_SIZE, Deck};
pub use error::{DrawError, NewDeckError, ParseCardError, StoreError};
pub use store::{SharedDeck, Store};
