//! The per-player game engine.
//!
//! One instance lives in each player's process. All instances at a table
//! are constructed from the same shared seed, and as long as the players
//! feed them the same mutating commands in the same order, every instance
//! holds bit-for-bit identical state — verified out of band by reading the
//! checksum word aloud.
//!
//! ## Replay lifecycle
//!
//! The engine never rolls state back incrementally. `undo` (and
//! construction with a history) rebuilds everything from scratch: reseed
//! the RNG, re-deal roles, re-deal the deck, replay the transcript. That
//! guarantees the result is byte-identical to a fresh process that applied
//! the same commands, which is the property the whole design rests on.
//! Transcripts are bounded by the card count, so the O(history) rebuild is
//! never felt.

use tracing::debug;

use crate::checksum;
use crate::core::{
    CardId, DeckRng, EngineError, EngineResult, Policy, Seat, FASCIST_POLICIES, LIBERAL_POLICIES,
};
use crate::deck::engine::Window;
use crate::deck::PolicyDeck;
use crate::roles::{Party, Role, RoleAssignment};
use crate::transcript::{LoggedAction, Transcript};

/// A single player's deterministic view of the shared game.
///
/// ## Usage
///
/// ```
/// use policy_deck::game::GameEngine;
///
/// // Two players at the same table, different seats, same seed.
/// let mut one = GameEngine::new(42, 5, 1).unwrap();
/// let mut three = GameEngine::new(42, 5, 3).unwrap();
/// assert_eq!(one.checksum_word(), three.checksum_word());
///
/// // Both apply the same command; their states stay in lockstep.
/// one.veto().unwrap();
/// three.veto().unwrap();
/// assert_eq!(one.checksum_word(), three.checksum_word());
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    seed: u64,
    num_players: u8,
    seat: Seat,
    rng: DeckRng,
    roles: RoleAssignment,
    deck: PolicyDeck,
    liberals_enacted: u32,
    fascists_enacted: u32,
    transcript: Transcript,
}

impl GameEngine {
    /// Start a fresh game.
    ///
    /// `player_index` is this player's 1-based seat. Fails with a
    /// configuration error when `num_players` is outside `[5, 10]` or the
    /// seat is outside `[1, num_players]`.
    pub fn new(seed: u64, num_players: u8, player_index: u8) -> EngineResult<Self> {
        Self::with_history(seed, num_players, player_index, Transcript::new())
    }

    /// Reconstruct a game by replaying `history` over a fresh start.
    ///
    /// Seeding, role assignment, and the initial deal happen exactly as in
    /// [`GameEngine::new`]; each recorded action is then re-executed in
    /// order through the same public operations, which re-append it, so
    /// the rebuilt engine carries the transcript it was built from.
    pub fn with_history(
        seed: u64,
        num_players: u8,
        player_index: u8,
        history: Transcript,
    ) -> EngineResult<Self> {
        let seat = Seat::new(player_index, num_players).ok_or_else(|| {
            EngineError::configuration(format!(
                "player index must be between 1 and {num_players}, got {player_index}"
            ))
        })?;

        let mut rng = DeckRng::new(seed);
        let roles = RoleAssignment::assign(num_players, &mut rng)?;

        let mut deck = PolicyDeck::new();
        deck.reshuffle(LIBERAL_POLICIES, FASCIST_POLICIES, &mut rng);

        let mut engine = Self {
            seed,
            num_players,
            seat,
            rng,
            roles,
            deck,
            liberals_enacted: 0,
            fascists_enacted: 0,
            transcript: Transcript::new(),
        };
        engine.replay(&history)?;
        Ok(engine)
    }

    fn replay(&mut self, history: &Transcript) -> EngineResult<()> {
        if history.is_empty() {
            return Ok(());
        }
        debug!(actions = history.len(), "replaying transcript");
        for &action in history.entries() {
            match action {
                LoggedAction::Enact(policy) => self.enact(policy)?,
                LoggedAction::Reveal => self.reveal()?,
                LoggedAction::Veto => self.veto()?,
            };
        }
        Ok(())
    }

    // === State transitions ===

    /// Enact the first card in the top-3 window holding `policy`; the rest
    /// of the window is discarded unrevealed.
    ///
    /// Fails with an invalid operation when no window card holds `policy`,
    /// before anything is mutated. Ties break toward the lowest draw
    /// position.
    pub fn enact(&mut self, policy: Policy) -> EngineResult<String> {
        let window = self.deck.top_window();
        let chosen = window
            .iter()
            .copied()
            .find(|&card| self.deck.value_of(card) == Some(policy))
            .ok_or_else(|| {
                EngineError::invalid_operation(format!(
                    "cannot enact a {policy} policy that is not in the top 3 cards; try `undo`?"
                ))
            })?;

        let consumed = self.deck.take_top(3);
        self.advance(&consumed, Some(chosen));
        self.transcript.push(LoggedAction::Enact(policy));
        Ok(self.report())
    }

    /// Enact the single frontmost card, sight unseen.
    ///
    /// Positions 1 and 2 are never touched. Once the card universe is
    /// exhausted this is a graceful no-op: the report is returned, nothing
    /// mutates, nothing is logged.
    pub fn reveal(&mut self) -> EngineResult<String> {
        let consumed = self.deck.take_top(1);
        let Some(&top) = consumed.first() else {
            return Ok(self.report());
        };

        self.advance(&consumed, Some(top));
        self.transcript.push(LoggedAction::Reveal);
        Ok(self.report())
    }

    /// Discard the whole top-3 window without enacting anything.
    ///
    /// Counters are untouched. No-op on an exhausted universe, like
    /// [`reveal`](Self::reveal).
    pub fn veto(&mut self) -> EngineResult<String> {
        let consumed = self.deck.take_top(3);
        if consumed.is_empty() {
            return Ok(self.report());
        }

        self.advance(&consumed, None);
        self.transcript.push(LoggedAction::Veto);
        Ok(self.report())
    }

    /// Shared tail of every transition: settle the consumed cards, then
    /// keep the draw pile legal.
    ///
    /// The enacted card (if any) bumps its counter and leaves play forever;
    /// every other consumed card moves to the discard pile with its value
    /// unrevealed. A draw pile below 3 cards triggers a reshuffle — unless
    /// nothing is left in play at all, the structural endgame.
    fn advance(&mut self, consumed: &Window, enacted: Option<CardId>) {
        for &card in consumed {
            if Some(card) == enacted {
                match self.deck.enact_card(card) {
                    Some(Policy::Liberal) => self.liberals_enacted += 1,
                    Some(Policy::Fascist) => self.fascists_enacted += 1,
                    // Unreachable while the mapping covers the draw pile.
                    None => debug_assert!(false, "enacted card held no value"),
                }
            } else {
                self.deck.discard_card(card);
            }
        }

        if self.deck.draw_len() < 3 && self.deck.cards_in_play() > 0 {
            debug!(
                in_play = self.deck.cards_in_play(),
                "draw pile below 3 cards, reshuffling"
            );
            self.deck.reshuffle(
                LIBERAL_POLICIES - self.liberals_enacted as usize,
                FASCIST_POLICIES - self.fascists_enacted as usize,
                &mut self.rng,
            );
        }
    }

    /// Drop the last transcript entry and rebuild from the seed.
    ///
    /// Fails with an invalid operation when nothing has been played.
    /// Returns the checksum line of the reconstructed state.
    pub fn undo(&mut self) -> EngineResult<String> {
        let truncated = self
            .transcript
            .truncated()
            .ok_or_else(|| EngineError::invalid_operation("no actions to undo"))?;

        self.reset()?;
        self.replay(&truncated)?;
        Ok(self.checksum_line())
    }

    /// Return to the state of a fresh construction: reseed the RNG,
    /// re-deal roles and deck, zero the counters, clear the transcript.
    ///
    /// Consumes entropy in the fixed construction order, so a reset engine
    /// is indistinguishable from a newly built one.
    fn reset(&mut self) -> EngineResult<()> {
        self.rng.reseed(self.seed);
        self.roles = RoleAssignment::assign(self.num_players, &mut self.rng)?;
        self.deck = PolicyDeck::new();
        self.deck
            .reshuffle(LIBERAL_POLICIES, FASCIST_POLICIES, &mut self.rng);
        self.liberals_enacted = 0;
        self.fascists_enacted = 0;
        self.transcript = Transcript::new();
        Ok(())
    }

    // === Read-only operations ===

    /// This player's own role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.roles.get(self.seat)
    }

    /// The role dealt to any seat, 1-indexed.
    pub fn role_at(&self, player_index: u8) -> EngineResult<Role> {
        let seat = Seat::new(player_index, self.num_players).ok_or_else(|| {
            EngineError::invalid_operation(format!(
                "seat {player_index} does not exist at a table of {}",
                self.num_players
            ))
        })?;
        Ok(self.roles.get(seat))
    }

    /// Reveal the party affiliation of another seat.
    pub fn investigate(&self, target: u8) -> EngineResult<Party> {
        let target = Seat::new(target, self.num_players).ok_or_else(|| {
            EngineError::invalid_operation(format!(
                "seat {target} does not exist at a table of {}",
                self.num_players
            ))
        })?;
        self.roles.investigate(self.seat, target)
    }

    /// The values of specific cards, valid only inside the current top-3
    /// window.
    pub fn look(&self, cards: &[CardId]) -> EngineResult<Vec<Policy>> {
        self.deck.peek(cards)
    }

    /// The `(id, value)` pairs a president would draw right now.
    #[must_use]
    pub fn draw(&self) -> Vec<(CardId, Policy)> {
        self.deck.top3()
    }

    /// `(liberal, fascist)` policies enacted so far.
    #[must_use]
    pub fn enacted_policies(&self) -> (u32, u32) {
        (self.liberals_enacted, self.fascists_enacted)
    }

    /// The transcript of every mutating operation so far.
    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The deck state (draw pile, discard pile, mapping reads).
    #[must_use]
    pub fn deck(&self) -> &PolicyDeck {
        &self.deck
    }

    /// The shared seed this engine was constructed with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Table size.
    #[must_use]
    pub fn num_players(&self) -> u8 {
        self.num_players
    }

    /// This player's seat.
    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// The current display word for out-of-band comparison.
    #[must_use]
    pub fn checksum_word(&self) -> &'static str {
        checksum::state_word(self.seed, &self.deck)
    }

    /// `"Checksum: <word>"`.
    #[must_use]
    pub fn checksum_line(&self) -> String {
        format!("Checksum: {}", self.checksum_word())
    }

    /// `"Liberal policies: L, Fascist policies: F"`.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!(
            "Liberal policies: {}, Fascist policies: {}",
            self.liberals_enacted, self.fascists_enacted
        )
    }

    /// The two-line report every transition returns.
    #[must_use]
    pub fn report(&self) -> String {
        format!("{}\n{}", self.status_line(), self.checksum_line())
    }
}
