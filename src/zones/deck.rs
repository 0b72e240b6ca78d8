//! Ordered card piles.
//!
//! A [`Deck`] stores cards bottom-first: the last element is the top card
//! and the next one drawn. The same type backs draw piles, discard piles and
//! any other ordered pile of a single card variant.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardBase, CardId};
use crate::core::GameRng;
use crate::error::{EngineResult, GameError};

/// Position for inserting a card into a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Becomes the next card drawn.
    Top,
    /// Drawn last.
    Bottom,
    /// Insert at a specific index (0 = bottom).
    Index(usize),
}

/// Cards found by [`Deck::scan`], with their positions.
#[derive(Debug)]
pub struct Scan<'a, C> {
    pub cards: SmallVec<[&'a C; 4]>,
    pub positions: FxHashMap<CardId, usize>,
}

/// An ordered pile of one card variant.
///
/// ```
/// use four_souls::cards::{CardId, LootCard};
/// use four_souls::zones::Deck;
///
/// let mut deck = Deck::from_cards(vec![
///     LootCard::new(CardId(1), "A Penny"),
///     LootCard::new(CardId(2), "2 Cents!"),
/// ]);
///
/// // Last in, first out.
/// assert_eq!(deck.pop().unwrap().info.id, CardId(2));
/// assert_eq!(deck.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck<C> {
    cards: Vec<C>,
}

impl<C> Default for Deck<C> {
    fn default() -> Self {
        Self { cards: Vec::new() }
    }
}

impl<C: CardBase> Deck<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from cards listed bottom to top.
    #[must_use]
    pub fn from_cards(cards: Vec<C>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[C] {
        &self.cards
    }

    /// The next card to be drawn.
    #[must_use]
    pub fn peek(&self) -> Option<&C> {
        self.cards.last()
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> EngineResult<C> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    /// Remove the card at `index`, keeping the rest in order.
    pub fn pop_by_index(&mut self, index: usize) -> EngineResult<C> {
        if index >= self.cards.len() {
            return Err(GameError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    /// Remove the first card with this id.
    pub fn pop_by_id(&mut self, id: CardId) -> EngineResult<C> {
        let (index, _) = self.search(id)?;
        self.pop_by_index(index)
    }

    /// Find the first card with this id.
    pub fn search(&self, id: CardId) -> EngineResult<(usize, &C)> {
        self.cards
            .iter()
            .enumerate()
            .find(|(_, c)| c.id() == id)
            .ok_or(GameError::CardNotFound { card: id })
    }

    /// Find every card whose id is in `ids`.
    ///
    /// Returns matching cards in deck order and, for each id found, the
    /// position of its first match.
    #[must_use]
    pub fn scan(&self, ids: &[CardId]) -> Scan<'_, C> {
        let mut cards = SmallVec::new();
        let mut positions = FxHashMap::default();
        for (index, card) in self.cards.iter().enumerate() {
            if ids.contains(&card.id()) {
                cards.push(card);
                positions.entry(card.id()).or_insert(index);
            }
        }
        Scan { cards, positions }
    }

    /// Uniform random permutation.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Put a card on top.
    pub fn append(&mut self, card: C) {
        self.cards.push(card);
    }

    /// Put a card on the bottom.
    pub fn prepend(&mut self, card: C) {
        self.cards.insert(0, card);
    }

    /// Insert a card at a position.
    pub fn insert(&mut self, card: C, position: ZonePosition) {
        match position {
            ZonePosition::Top => self.append(card),
            ZonePosition::Bottom => self.prepend(card),
            ZonePosition::Index(i) => {
                let index = i.min(self.cards.len());
                self.cards.insert(index, card);
            }
        }
    }

    /// Combine `other` into this deck.
    ///
    /// With `on_top` the other deck's cards sit above this deck's, otherwise
    /// beneath. Passing an rng shuffles the result.
    pub fn merge(&mut self, mut other: Deck<C>, on_top: bool, shuffle: Option<&mut GameRng>) {
        if on_top {
            self.cards.append(&mut other.cards);
        } else {
            other.cards.append(&mut self.cards);
            self.cards = other.cards;
        }
        if let Some(rng) = shuffle {
            self.shuffle(rng);
        }
    }

    /// Remove every card, bottom to top.
    pub fn take_all(&mut self) -> Vec<C> {
        std::mem::take(&mut self.cards)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::LootCard;

    fn deck(ids: &[u16]) -> Deck<LootCard> {
        Deck::from_cards(
            ids.iter()
                .map(|&id| LootCard::new(CardId(id), format!("card {id}")))
                .collect(),
        )
    }

    fn ids(deck: &Deck<LootCard>) -> Vec<u16> {
        deck.iter().map(|c| c.info.id.raw()).collect()
    }

    #[test]
    fn test_pop_empty_is_error() {
        let mut d = deck(&[]);
        assert_eq!(d.pop(), Err(GameError::EmptyDeck));
        assert!(d.peek().is_none());
    }

    #[test]
    fn test_pop_by_index_preserves_order() {
        let mut d = deck(&[1, 2, 3, 4]);
        let card = d.pop_by_index(1).unwrap();
        assert_eq!(card.info.id, CardId(2));
        assert_eq!(ids(&d), vec![1, 3, 4]);
        assert_eq!(
            d.pop_by_index(3),
            Err(GameError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_pop_by_id_takes_first_match() {
        let mut d = deck(&[5, 7, 5]);
        d.pop_by_id(CardId(5)).unwrap();
        assert_eq!(ids(&d), vec![7, 5]);
        assert_eq!(
            d.pop_by_id(CardId(9)),
            Err(GameError::CardNotFound { card: CardId(9) })
        );
    }

    #[test]
    fn test_search_is_read_only() {
        let d = deck(&[1, 2, 3]);
        let (index, card) = d.search(CardId(3)).unwrap();
        assert_eq!(index, 2);
        assert_eq!(card.info.id, CardId(3));
        assert_eq!(d.len(), 3);
    }

    #[test]
    fn test_scan() {
        let d = deck(&[1, 4, 2, 4, 8]);
        let scan = d.scan(&[4, 8, 9].map(CardId));
        assert_eq!(scan.cards.len(), 3);
        assert_eq!(scan.positions[&CardId(4)], 1);
        assert_eq!(scan.positions[&CardId(8)], 4);
        assert!(!scan.positions.contains_key(&CardId(9)));
    }

    #[test]
    fn test_append_and_prepend() {
        let mut d = deck(&[2]);
        d.append(LootCard::new(CardId(3), "top"));
        d.prepend(LootCard::new(CardId(1), "bottom"));
        d.insert(LootCard::new(CardId(9), "middle"), ZonePosition::Index(1));
        assert_eq!(ids(&d), vec![1, 9, 2, 3]);
        assert_eq!(d.peek().map(|c| c.info.id), Some(CardId(3)));
    }

    #[test]
    fn test_merge_order() {
        let mut a = deck(&[1, 2]);
        a.merge(deck(&[3, 4]), true, None);
        assert_eq!(ids(&a), vec![1, 2, 3, 4]);

        let mut b = deck(&[1, 2]);
        b.merge(deck(&[3, 4]), false, None);
        assert_eq!(ids(&b), vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_merge_with_shuffle_keeps_cards() {
        let mut rng = GameRng::new(11);
        let mut a = deck(&[1, 2, 3]);
        a.merge(deck(&[4, 5, 6]), true, Some(&mut rng));
        let mut got = ids(&a);
        got.sort_unstable();
        assert_eq!(got, vec![1, 2, 3, 4, 5, 6]);
    }
}
