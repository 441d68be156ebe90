//! Policy values and card identity.
//!
//! The deck holds 17 cards: 6 liberal and 11 fascist policies. A card is
//! identified by a stable [`CardId`] in `[0, 16]` — a *position* identity.
//! Which policy a card currently holds is decided by the active shuffle's
//! mapping, never by the id itself, so the same id can carry a different
//! value after a reshuffle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::EngineError;

/// Number of liberal policy cards in the full deck.
pub const LIBERAL_POLICIES: usize = 6;

/// Number of fascist policy cards in the full deck.
pub const FASCIST_POLICIES: usize = 11;

/// Total number of policy cards.
pub const DECK_SIZE: usize = LIBERAL_POLICIES + FASCIST_POLICIES;

/// A policy value held by a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    Liberal,
    Fascist,
}

impl Policy {
    /// The lowercase token used in commands, reports, and checksums.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Policy::Liberal => "liberal",
            Policy::Fascist => "fascist",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "liberal" => Ok(Policy::Liberal),
            "fascist" => Ok(Policy::Fascist),
            other => Err(EngineError::argument(format!(
                "expected `liberal` or `fascist`, got `{other}`"
            ))),
        }
    }
}

/// Stable identity of a policy card, in `[0, 16]`.
///
/// Ids are what players speak aloud ("look 8 10"), so `Display` renders the
/// bare number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a card id.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Iterate over the full 17-card id universe in ascending order.
    pub fn all() -> impl Iterator<Item = CardId> {
        (0..DECK_SIZE as u8).map(CardId)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
