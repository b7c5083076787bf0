//! Deck entity: creation, shuffling, and drawing.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::card::{Card, Rank, Suit};
use crate::error::{DrawError, NewDeckError};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// An ordered deck of playing cards.
///
/// Cards are kept in draw order: the card at index 0 is drawn first.
/// Drawing shrinks the deck from the front; shuffling permutes it in
/// place. The id is assigned at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    id: Uuid,
    shuffled: bool,
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a standard 52-card deck, one card per rank and suit pair.
    ///
    /// The order is deterministic and stable across calls: suits in
    /// [`Suit::ALL`] order, ranks in [`Rank::ALL`] order within each suit.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self {
            id: Uuid::new_v4(),
            shuffled: false,
            cards,
        }
    }

    /// Creates a deck from the given card codes, in input order.
    ///
    /// # Errors
    ///
    /// Returns [`NewDeckError::Empty`] when no codes are given,
    /// [`NewDeckError::InvalidCode`] on the first code that does not
    /// parse, and [`NewDeckError::DuplicateCode`] when a code repeats.
    pub fn partial(codes: &[&str]) -> Result<Self, NewDeckError> {
        if codes.is_empty() {
            return Err(NewDeckError::Empty);
        }

        let mut cards = Vec::with_capacity(codes.len());
        for code in codes {
            let card = code
                .parse::<Card>()
                .map_err(|source| NewDeckError::InvalidCode {
                    code: (*code).to_string(),
                    source,
                })?;
            cards.push(card);
        }

        // Duplicates are detected on the raw input strings, not the parsed
        // cards: "TH" and "10H" are the same card but distinct codes.
        let mut seen = HashSet::with_capacity(codes.len());
        for code in codes {
            if !seen.insert(*code) {
                return Err(NewDeckError::DuplicateCode((*code).to_string()));
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            shuffled: false,
            cards,
        })
    }

    /// Returns the deck identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns whether the deck has been shuffled.
    #[must_use]
    pub const fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Returns the undrawn cards, in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Shuffles the deck in place with the OS-seeded thread RNG.
    ///
    /// The RNG state is not derivable from the deck id or its creation
    /// time, so callers cannot predict the resulting order.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffles the deck in place with the provided RNG.
    ///
    /// Card identities and the remaining count are unchanged, only the
    /// order. Sets the shuffled flag; it is never reset.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.shuffled = true;
    }

    /// Draws `count` cards from the front of the deck.
    ///
    /// The drawn cards are returned in their current order as an owned
    /// vector and removed from the deck. A failed draw removes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidCount`] when `count` is zero and
    /// [`DrawError::InsufficientCards`] when `count` exceeds the number
    /// of undrawn cards.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        if count == 0 {
            return Err(DrawError::InvalidCount);
        }
        if count > self.cards.len() {
            return Err(DrawError::InsufficientCards);
        }

        Ok(self.cards.drain(..count).collect())
    }
}
