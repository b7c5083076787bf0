//! Concurrency-safe deck registry.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::deck::Deck;
use crate::error::StoreError;
use crate::sync::{Mutex, RwLock};

/// A live handle to a deck owned by a [`Store`].
///
/// Mutations through this handle (draws) are visible to every other
/// holder and to later [`Store::get`] calls. The per-deck mutex
/// serializes concurrent draws against the same deck, so they return
/// disjoint card sets.
pub type SharedDeck = Arc<Mutex<Deck>>;

/// A thread-safe registry of decks keyed by their id.
///
/// The map sits behind a reader/writer lock: any number of [`Store::get`]
/// calls proceed in parallel, while [`Store::add`] and [`Store::remove`]
/// take exclusive access. The lock guards only the mapping; each deck
/// carries its own mutex.
#[derive(Debug, Default)]
pub struct Store {
    decks: RwLock<HashMap<Uuid, SharedDeck>>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            decks: RwLock::new(HashMap::new()),
        }
    }

    /// Adds a deck to the store, taking ownership of it.
    ///
    /// Refusing to overwrite keeps a caller from silently replacing
    /// another caller's in-flight deck.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if a deck with the same id is
    /// already present.
    pub fn add(&self, deck: Deck) -> Result<(), StoreError> {
        let id = deck.id();
        let mut decks = self.decks.write();

        if decks.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }

        decks.insert(id, Arc::new(Mutex::new(deck)));
        Ok(())
    }

    /// Retrieves a live handle to the deck with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no deck has this id.
    pub fn get(&self, id: Uuid) -> Result<SharedDeck, StoreError> {
        self.decks
            .read()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Removes the deck with the given id from the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no deck has this id.
    pub fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        self.decks
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    /// Returns the number of decks in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.read().len()
    }

    /// Returns whether the store holds no decks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.read().is_empty()
    }
}
