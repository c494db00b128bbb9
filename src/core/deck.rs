//! Decks: a player's starting characters and action cards.
//!
//! Ids are opaque definition ids. A standard deck has 3 characters and
//! 30 action cards, but nothing here enforces that; deck legality belongs
//! to whoever starts the match.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Definition id of a character or action card.
///
/// The builder never interprets these; they are looked up by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefinitionId(pub u32);

impl DefinitionId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for DefinitionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DefinitionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Def({})", self.0)
    }
}

/// Which half of a deck a list of ids belongs to.
///
/// The discriminants are the slot codes used at the store boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckSlot {
    /// Character cards.
    Characters = 1,
    /// Action cards.
    Cards = 2,
}

impl DeckSlot {
    /// Both slots in write order.
    pub const BOTH: [DeckSlot; 2] = [DeckSlot::Characters, DeckSlot::Cards];

    /// Boundary code of this slot.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }
}

/// A player's starting characters and action cards.
///
/// ## Example
///
/// ```
/// use gitcg::core::Deck;
///
/// let deck = Deck::new([1411u32, 1510, 2103], vec![311503u32; 30]);
/// assert_eq!(deck.characters.len(), 3);
/// assert_eq!(deck.cards.len(), 30);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    /// Character definition ids, in lineup order.
    pub characters: SmallVec<[DefinitionId; 3]>,

    /// Action card definition ids, in deck order.
    pub cards: Vec<DefinitionId>,
}

impl Deck {
    /// Create a deck from character and card ids.
    pub fn new<C, D>(characters: C, cards: D) -> Self
    where
        C: IntoIterator,
        C::Item: Into<DefinitionId>,
        D: IntoIterator,
        D::Item: Into<DefinitionId>,
    {
        Self {
            characters: characters.into_iter().map(Into::into).collect(),
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }

    /// Ids stored in the given slot.
    #[must_use]
    pub fn slot(&self, slot: DeckSlot) -> &[DefinitionId] {
        match slot {
            DeckSlot::Characters => &self.characters,
            DeckSlot::Cards => &self.cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_id() {
        let id = DefinitionId(1411);
        assert_eq!(id.raw(), 1411);
        assert_eq!(format!("{}", id), "Def(1411)");
        assert_eq!(DefinitionId::from(7), DefinitionId(7));
    }

    #[test]
    fn test_deck_slot_codes() {
        assert_eq!(DeckSlot::Characters.code(), 1);
        assert_eq!(DeckSlot::Cards.code(), 2);
        assert_eq!(DeckSlot::BOTH, [DeckSlot::Characters, DeckSlot::Cards]);
    }

    #[test]
    fn test_deck_preserves_order() {
        let deck = Deck::new([3u32, 1, 2], [202u32, 101, 202]);
        assert_eq!(deck.slot(DeckSlot::Characters), &[DefinitionId(3), DefinitionId(1), DefinitionId(2)]);
        assert_eq!(deck.slot(DeckSlot::Cards), &[DefinitionId(202), DefinitionId(101), DefinitionId(202)]);
    }

    #[test]
    fn test_deck_size_not_enforced() {
        let deck = Deck::new([1u32], Vec::<u32>::new());
        assert_eq!(deck.characters.len(), 1);
        assert!(deck.cards.is_empty());
    }

    #[test]
    fn test_deck_serialization() {
        let deck = Deck::new([1u32, 2, 3], [101u32, 102]);
        let json = serde_json::to_string(&deck).unwrap();
        assert_eq!(json, r#"{"characters":[1,2,3],"cards":[101,102]}"#);
        let deserialized: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(deck, deserialized);
    }
}
