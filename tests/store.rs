//! Store registration, lookup, and concurrency tests.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use deckrs::{Card, Deck, Store, StoreError};
use uuid::Uuid;

#[test]
fn add_then_get_returns_live_handle() {
    let store = Store::new();
    let deck = Deck::standard();
    let id = deck.id();
    store.add(deck).unwrap();

    let handle = store.get(id).unwrap();
    handle.lock().draw(2).unwrap();

    // A later lookup observes the same mutated instance.
    let again = store.get(id).unwrap();
    assert_eq!(again.lock().remaining(), 50);
}

#[test]
fn add_rejects_duplicate_ids() {
    let store = Store::new();
    let deck = Deck::standard();
    let id = deck.id();
    let copy = deck.clone();

    store.add(deck).unwrap();
    assert_eq!(store.add(copy).unwrap_err(), StoreError::DuplicateId(id));
    assert_eq!(store.len(), 1);
}

#[test]
fn get_and_remove_unknown_ids_fail() {
    let store = Store::new();
    let id = Uuid::new_v4();

    assert_eq!(store.get(id).unwrap_err(), StoreError::NotFound(id));
    assert_eq!(store.remove(id).unwrap_err(), StoreError::NotFound(id));
}

#[test]
fn remove_then_get_fails() {
    let store = Store::new();
    let deck = Deck::standard();
    let id = deck.id();
    store.add(deck).unwrap();

    store.remove(id).unwrap();
    assert_eq!(store.get(id).unwrap_err(), StoreError::NotFound(id));
    assert!(store.is_empty());
}

#[test]
fn concurrent_gets_all_succeed() {
    let store = Arc::new(Store::new());
    let deck = Deck::standard();
    let id = deck.id();
    store.add(deck).unwrap();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.get(id).map(|deck| deck.lock().remaining()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 52);
    }
}

#[test]
fn concurrent_adds_of_distinct_decks_all_land() {
    let store = Arc::new(Store::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.add(Deck::standard()))
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }
    assert_eq!(store.len(), 8);
}

#[test]
fn concurrent_draws_on_one_deck_are_disjoint() {
    let store = Arc::new(Store::new());
    let deck = Deck::standard();
    let id = deck.id();
    store.add(deck).unwrap();

    // 13 threads draw 4 cards each; the per-deck mutex must keep the
    // draws from overlapping.
    let handles: Vec<_> = (0..13)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.get(id).unwrap().lock().draw(4).unwrap())
        })
        .collect();

    let mut drawn = Vec::new();
    for handle in handles {
        drawn.extend(handle.join().unwrap());
    }

    let unique: HashSet<Card> = drawn.iter().copied().collect();
    assert_eq!(drawn.len(), 52);
    assert_eq!(unique.len(), 52);
    assert_eq!(store.get(id).unwrap().lock().remaining(), 0);
}
