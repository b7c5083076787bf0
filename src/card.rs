//! Card types: ranks, suits, and their textual forms.
//!
//! A card has two textual representations: a short code (`"AS"`, `"TH"`,
//! `"4D"`) used in requests, and a long form (`{"value": "ACE", "suit":
//! "SPADES", "code": "AS"}`) used in responses. Both directions are
//! validated against the closed rank and suit enumerations.

use core::fmt;
use core::str::FromStr;

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::ParseCardError;

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks, in standard deck order (Ace first).
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the short code (`"A"`, `"2"` … `"9"`, `"T"`, `"J"`, `"Q"`, `"K"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "T",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Returns the long name (`"ACE"`, `"TWO"` … `"KING"`).
    #[must_use]
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::Ace => "ACE",
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Four => "FOUR",
            Self::Five => "FIVE",
            Self::Six => "SIX",
            Self::Seven => "SEVEN",
            Self::Eight => "EIGHT",
            Self::Nine => "NINE",
            Self::Ten => "TEN",
            Self::Jack => "JACK",
            Self::Queen => "QUEEN",
            Self::King => "KING",
        }
    }

    /// Parses a short rank code.
    ///
    /// `"T"` is the canonical code for Ten; `"10"` is accepted as well,
    /// since some clients send it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCardError::InvalidRank`] if the code is not a valid
    /// rank.
    pub fn from_code(code: &str) -> Result<Self, ParseCardError> {
        match code {
            "A" => Ok(Self::Ace),
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "4" => Ok(Self::Four),
            "5" => Ok(Self::Five),
            "6" => Ok(Self::Six),
            "7" => Ok(Self::Seven),
            "8" => Ok(Self::Eight),
            "9" => Ok(Self::Nine),
            "T" | "10" => Ok(Self::Ten),
            "J" => Ok(Self::Jack),
            "Q" => Ok(Self::Queen),
            "K" => Ok(Self::King),
            _ => Err(ParseCardError::InvalidRank),
        }
    }

    /// Parses a long rank name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCardError::InvalidRank`] if the name is not a valid
    /// rank.
    pub fn from_long_name(name: &str) -> Result<Self, ParseCardError> {
        match name.to_ascii_uppercase().as_str() {
            "ACE" => Ok(Self::Ace),
            "TWO" => Ok(Self::Two),
            "THREE" => Ok(Self::Three),
            "FOUR" => Ok(Self::Four),
            "FIVE" => Ok(Self::Five),
            "SIX" => Ok(Self::Six),
            "SEVEN" => Ok(Self::Seven),
            "EIGHT" => Ok(Self::Eight),
            "NINE" => Ok(Self::Nine),
            "TEN" => Ok(Self::Ten),
            "JACK" => Ok(Self::Jack),
            "QUEEN" => Ok(Self::Queen),
            "KING" => Ok(Self::King),
            _ => Err(ParseCardError::InvalidRank),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// All suits, in standard deck order (Spades first).
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Clubs, Self::Hearts];

    /// Returns the short code (`"S"`, `"D"`, `"C"`, `"H"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Spades => "S",
            Self::Diamonds => "D",
            Self::Clubs => "C",
            Self::Hearts => "H",
        }
    }

    /// Returns the long name (`"SPADES"`, `"DIAMONDS"`, `"CLUBS"`, `"HEARTS"`).
    #[must_use]
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::Spades => "SPADES",
            Self::Diamonds => "DIAMONDS",
            Self::Clubs => "CLUBS",
            Self::Hearts => "HEARTS",
        }
    }

    /// Parses a short suit code.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCardError::InvalidSuit`] if the code is not a valid
    /// suit.
    pub fn from_code(code: &str) -> Result<Self, ParseCardError> {
        match code {
            "S" => Ok(Self::Spades),
            "D" => Ok(Self::Diamonds),
            "C" => Ok(Self::Clubs),
            "H" => Ok(Self::Hearts),
            _ => Err(ParseCardError::InvalidSuit),
        }
    }

    /// Parses a long suit name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCardError::InvalidSuit`] if the name is not a valid
    /// suit.
    pub fn from_long_name(name: &str) -> Result<Self, ParseCardError> {
        match name.to_ascii_uppercase().as_str() {
            "SPADES" => Ok(Self::Spades),
            "DIAMONDS" => Ok(Self::Diamonds),
            "CLUBS" => Ok(Self::Clubs),
            "HEARTS" => Ok(Self::Hearts),
            _ => Err(ParseCardError::InvalidSuit),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the short code of the card, rank code followed by suit code
    /// (e.g. `"AS"` for the Ace of Spades).
    #[must_use]
    pub fn code(self) -> String {
        format!("{}{}", self.rank.code(), self.suit.code())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.code(), self.suit.code())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a short card code such as `"AS"` or `"10H"`.
    ///
    /// The final character is the suit code; everything before it is the
    /// rank code, which may be one or two characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(suit_char) = s.chars().next_back() else {
            return Err(ParseCardError::InvalidFormat);
        };

        let (rank_code, suit_code) = s.split_at(s.len() - suit_char.len_utf8());
        if rank_code.is_empty() {
            return Err(ParseCardError::InvalidFormat);
        }

        let rank = Rank::from_code(rank_code)?;
        let suit = Suit::from_code(suit_code)?;

        Ok(Self { rank, suit })
    }
}

impl Serialize for Card {
    /// Serializes to the wire form
    /// `{"value": "ACE", "suit": "SPADES", "code": "AS"}`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Card", 3)?;
        state.serialize_field("value", self.rank.long_name())?;
        state.serialize_field("suit", self.suit.long_name())?;
        state.serialize_field("code", &self.code())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Card {
    /// Deserializes from the wire form, reading the `value` and `suit`
    /// long names case-insensitively. A `code` field, if present, is
    /// ignored.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Wire {
            value: String,
            suit: String,
        }

        let wire = Wire::deserialize(deserializer)?;
        let rank = Rank::from_long_name(&wire.value).map_err(D::Error::custom)?;
        let suit = Suit::from_long_name(&wire.suit).map_err(D::Error::custom)?;

        Ok(Self { rank, suit })
    }
}
