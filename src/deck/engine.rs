//! Policy deck state machine.
//!
//! Three pieces of state move in lockstep:
//! - **Draw pile**: ordered card ids, index 0 is the next card drawn.
//! - **Discard pile**: ids out of play until the next reshuffle.
//! - **Mapping**: card id → policy value, covering exactly draw ∪ discard.
//!
//! Card ids are position identities. A reshuffle deals the remaining value
//! multiset freshly over the ids, so the same id can hold a different value
//! afterwards. Enacted ids leave all three structures forever, shrinking
//! the 17-card universe until nothing is left.
//!
//! The top 3 of the draw pile is the only window any read may touch —
//! players can only ever inspect the cards they would legitimately be
//! handed.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{CardId, DeckRng, EngineError, EngineResult, Policy};

/// The cards a single legislative session consumes.
pub type Window = SmallVec<[CardId; 3]>;

/// Draw pile, discard pile, and the id → value mapping.
#[derive(Clone, Debug)]
pub struct PolicyDeck {
    /// Ordered draw pile, front (index 0) drawn first.
    draw: Vec<CardId>,
    /// Ids awaiting the next reshuffle. Order only matters transiently,
    /// between a reshuffle's permutation and its FIFO drain.
    discard: Vec<CardId>,
    /// Value held by each in-play id.
    mapping: FxHashMap<CardId, Policy>,
}

impl PolicyDeck {
    /// A deck with the full id universe in the discard pile and no values
    /// dealt yet. The engine's initial [`reshuffle`](Self::reshuffle) turns
    /// this into a playable draw pile.
    #[must_use]
    pub fn new() -> Self {
        Self {
            draw: Vec::with_capacity(crate::core::DECK_SIZE),
            discard: CardId::all().collect(),
            mapping: FxHashMap::default(),
        }
    }

    /// Rebuild the draw pile from everything still in play.
    ///
    /// Remaining draw cards go back through the discard pile; the remaining
    /// value multiset (`liberals` + `fascists`) is shuffled, the discard
    /// order is shuffled, values are zipped over the permuted ids, and the
    /// discard pile drains FIFO into the draw pile. Two shuffles, always in
    /// that order — the cross-process RNG contract.
    ///
    /// On exit the draw pile holds every non-enacted id, the discard pile
    /// is empty, and the mapping covers exactly the draw pile.
    pub fn reshuffle(&mut self, liberals: usize, fascists: usize, rng: &mut DeckRng) {
        debug_assert_eq!(
            liberals + fascists,
            self.draw.len() + self.discard.len(),
            "value multiset must match the in-play id count"
        );

        self.discard.append(&mut self.draw);

        let mut values: Vec<Policy> = Vec::with_capacity(liberals + fascists);
        values.extend(std::iter::repeat(Policy::Liberal).take(liberals));
        values.extend(std::iter::repeat(Policy::Fascist).take(fascists));
        rng.shuffle(&mut values);
        rng.shuffle(&mut self.discard);

        self.mapping.clear();
        for (&card, &value) in self.discard.iter().zip(values.iter()) {
            self.mapping.insert(card, value);
        }

        self.draw.extend(self.discard.drain(..));
    }

    /// Number of cards left in the draw pile.
    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    /// Number of cards in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Cards still in play (draw + discard); 17 minus the enacted.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    /// The draw pile in draw order.
    #[must_use]
    pub fn draw_pile(&self) -> &[CardId] {
        &self.draw
    }

    /// The discard pile contents.
    #[must_use]
    pub fn discard_pile(&self) -> &[CardId] {
        &self.discard
    }

    /// The value currently held by `card`, if it is still in play.
    #[must_use]
    pub fn value_of(&self, card: CardId) -> Option<Policy> {
        self.mapping.get(&card).copied()
    }

    /// The top-3 window of the draw pile (shorter near exhaustion).
    #[must_use]
    pub fn top_window(&self) -> Window {
        self.draw.iter().take(3).copied().collect()
    }

    /// The `(id, value)` pairs of the top-3 window, without removing them.
    #[must_use]
    pub fn top3(&self) -> Vec<(CardId, Policy)> {
        self.draw
            .iter()
            .take(3)
            .filter_map(|&card| self.mapping.get(&card).map(|&value| (card, value)))
            .collect()
    }

    /// Look up the values of specific cards.
    ///
    /// Validated against the top-3 window *at call time*: a card outside
    /// the current window is an invalid operation even if it was drawable
    /// a moment ago, before a reshuffle.
    pub fn peek(&self, cards: &[CardId]) -> EngineResult<Vec<Policy>> {
        let window = self.top_window();
        let mut values = Vec::with_capacity(cards.len());
        for &card in cards {
            if !window.contains(&card) {
                return Err(EngineError::invalid_operation(format!(
                    "card {card} is not among the top 3 of the draw pile"
                )));
            }
            match self.mapping.get(&card) {
                Some(&value) => values.push(value),
                None => {
                    return Err(EngineError::invalid_operation(format!(
                        "card {card} holds no value"
                    )))
                }
            }
        }
        Ok(values)
    }

    /// Pop up to `n` cards off the front of the draw pile.
    pub fn take_top(&mut self, n: usize) -> Window {
        let n = n.min(self.draw.len());
        self.draw.drain(..n).collect()
    }

    /// Move a consumed card to the discard pile, its value unrevealed and
    /// its mapping entry intact.
    pub fn discard_card(&mut self, card: CardId) {
        self.discard.push(card);
    }

    /// Remove an enacted card from play forever.
    ///
    /// The id never returns to the discard pile and its mapping entry is
    /// deleted; returns the value it held.
    pub fn enact_card(&mut self, card: CardId) -> Option<Policy> {
        self.mapping.remove(&card)
    }

    /// Count the liberal and fascist values currently mapped.
    #[must_use]
    pub fn remaining_values(&self) -> (usize, usize) {
        let liberals = self
            .mapping
            .values()
            .filter(|&&value| value == Policy::Liberal)
            .count();
        (liberals, self.mapping.len() - liberals)
    }
}

impl Default for PolicyDeck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DECK_SIZE, FASCIST_POLICIES, LIBERAL_POLICIES};

    fn dealt_deck(seed: u64) -> PolicyDeck {
        let mut rng = DeckRng::new(seed);
        let mut deck = PolicyDeck::new();
        deck.reshuffle(LIBERAL_POLICIES, FASCIST_POLICIES, &mut rng);
        deck
    }

    #[test]
    fn test_new_deck_is_undealt() {
        let deck = PolicyDeck::new();
        assert_eq!(deck.draw_len(), 0);
        assert_eq!(deck.discard_len(), DECK_SIZE);
        assert_eq!(deck.remaining_values(), (0, 0));
    }

    #[test]
    fn test_initial_reshuffle_invariants() {
        let deck = dealt_deck(42);

        assert_eq!(deck.draw_len(), DECK_SIZE);
        assert_eq!(deck.discard_len(), 0);
        assert_eq!(
            deck.remaining_values(),
            (LIBERAL_POLICIES, FASCIST_POLICIES)
        );

        // Every draw card has a value; ids are the full universe.
        let mut ids: Vec<CardId> = deck.draw_pile().to_vec();
        for &card in &ids {
            assert!(deck.value_of(card).is_some());
        }
        ids.sort();
        assert_eq!(ids, CardId::all().collect::<Vec<_>>());
    }

    #[test]
    fn test_reshuffle_is_deterministic() {
        let a = dealt_deck(42);
        let b = dealt_deck(42);
        assert_eq!(a.draw_pile(), b.draw_pile());
        for card in CardId::all() {
            assert_eq!(a.value_of(card), b.value_of(card));
        }
    }

    #[test]
    fn test_take_top_pops_the_front() {
        let mut deck = dealt_deck(42);
        let expected: Vec<CardId> = deck.draw_pile()[..3].to_vec();

        let taken = deck.take_top(3);
        assert_eq!(taken.as_slice(), expected.as_slice());
        assert_eq!(deck.draw_len(), DECK_SIZE - 3);
    }

    #[test]
    fn test_take_top_short_pile() {
        let mut deck = dealt_deck(42);
        let _ = deck.take_top(16);
        let last = deck.take_top(3);
        assert_eq!(last.len(), 1);
        assert_eq!(deck.draw_len(), 0);
    }

    #[test]
    fn test_peek_requires_window_membership() {
        let deck = dealt_deck(42);
        let window = deck.top_window();
        let outside = CardId::all().find(|c| !window.contains(c)).unwrap();

        assert!(deck.peek(&window).is_ok());
        let err = deck.peek(&[outside]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidOperation(_)));
    }

    #[test]
    fn test_peek_matches_top3() {
        let deck = dealt_deck(7);
        let pairs = deck.top3();
        let ids: Vec<CardId> = pairs.iter().map(|&(card, _)| card).collect();
        let values: Vec<Policy> = pairs.iter().map(|&(_, value)| value).collect();

        assert_eq!(deck.peek(&ids).unwrap(), values);
    }

    #[test]
    fn test_enacted_card_leaves_play_forever() {
        let mut deck = dealt_deck(42);
        let consumed = deck.take_top(1);
        let card = consumed[0];

        let value = deck.enact_card(card).unwrap();
        let (liberals, fascists) = deck.remaining_values();
        match value {
            Policy::Liberal => assert_eq!(liberals, LIBERAL_POLICIES - 1),
            Policy::Fascist => assert_eq!(fascists, FASCIST_POLICIES - 1),
        }
        assert_eq!(deck.cards_in_play(), DECK_SIZE - 1);
        assert!(deck.value_of(card).is_none());
        assert!(!deck.discard_pile().contains(&card));
    }

    #[test]
    fn test_discarded_card_keeps_its_value() {
        let mut deck = dealt_deck(42);
        let consumed = deck.take_top(1);
        let card = consumed[0];
        let value = deck.value_of(card).unwrap();

        deck.discard_card(card);
        assert_eq!(deck.value_of(card), Some(value));
        assert!(deck.discard_pile().contains(&card));
        assert_eq!(deck.cards_in_play(), DECK_SIZE);
    }

    #[test]
    fn test_reshuffle_after_enactment_deals_remaining_multiset() {
        let mut rng = DeckRng::new(42);
        let mut deck = PolicyDeck::new();
        deck.reshuffle(LIBERAL_POLICIES, FASCIST_POLICIES, &mut rng);

        // Enact one card and discard two, as a legislative session would.
        let consumed = deck.take_top(3);
        let enacted_value = deck.enact_card(consumed[0]).unwrap();
        deck.discard_card(consumed[1]);
        deck.discard_card(consumed[2]);

        let (mut liberals, mut fascists) = (LIBERAL_POLICIES, FASCIST_POLICIES);
        match enacted_value {
            Policy::Liberal => liberals -= 1,
            Policy::Fascist => fascists -= 1,
        }

        deck.reshuffle(liberals, fascists, &mut rng);
        assert_eq!(deck.draw_len(), DECK_SIZE - 1);
        assert_eq!(deck.discard_len(), 0);
        assert_eq!(deck.remaining_values(), (liberals, fascists));
        assert!(deck.value_of(consumed[0]).is_none());
    }

    #[test]
    fn test_reshuffle_of_nothing_is_harmless() {
        let mut rng = DeckRng::new(42);
        let mut deck = PolicyDeck::new();
        deck.reshuffle(LIBERAL_POLICIES, FASCIST_POLICIES, &mut rng);

        // Enact the entire universe.
        for _ in 0..DECK_SIZE {
            let consumed = deck.take_top(1);
            deck.enact_card(consumed[0]);
        }

        deck.reshuffle(0, 0, &mut rng);
        assert_eq!(deck.draw_len(), 0);
        assert_eq!(deck.discard_len(), 0);
        assert_eq!(deck.remaining_values(), (0, 0));
    }
}
