//! Role assignment: one seeded shuffle, fixed for the life of the game.
//!
//! The role multiset is sized from the player count: exactly one Hitler, a
//! table-driven number of ordinary fascists, liberals for the rest. The
//! shuffle that deals the multiset across seats is the *first* entropy the
//! engine consumes, so every process at the table computes the same
//! assignment from the shared seed.
//!
//! Every process holds the full assignment; secrecy is social, not
//! cryptographic. The API only hands out what the table rules allow:
//! [`RoleAssignment::investigate`] reveals a target's party affiliation and
//! nothing more.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{DeckRng, EngineError, EngineResult, Seat};

/// Smallest supported table.
pub const MIN_PLAYERS: u8 = 5;

/// Largest supported table.
pub const MAX_PLAYERS: u8 = 10;

/// Ordinary fascists (Hitler excluded) at a table of `num_players`.
///
/// The extended rule set's table; `None` outside `[5, 10]`.
#[must_use]
pub fn fascist_count(num_players: u8) -> Option<usize> {
    match num_players {
        5 | 6 => Some(1),
        7 | 8 => Some(2),
        9 | 10 => Some(3),
        _ => None,
    }
}

/// Party affiliation — what an investigation reveals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    Liberal,
    Fascist,
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Party::Liberal => "liberal",
            Party::Fascist => "fascist",
        })
    }
}

/// A seat's full identity.
///
/// Hitler is fascist-aligned but a distinct identity: investigations report
/// only the party, so Hitler investigates as a plain fascist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Liberal,
    Fascist,
    Hitler,
}

impl Role {
    /// The party this role is aligned with.
    #[must_use]
    pub const fn party(self) -> Party {
        match self {
            Role::Liberal => Party::Liberal,
            Role::Fascist | Role::Hitler => Party::Fascist,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Liberal => "liberal",
            Role::Fascist => "fascist",
            Role::Hitler => "hitler",
        })
    }
}

/// The ordered assignment of roles to seats, dealt once at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    roles: Vec<Role>,
}

impl RoleAssignment {
    /// Deal roles for a table of `num_players` with the engine's RNG.
    ///
    /// Builds `[Liberal × (N − fascists − 1), Fascist × fascists, Hitler]`
    /// and shuffles it in place. Fails with a configuration error for an
    /// unsupported table size.
    pub fn assign(num_players: u8, rng: &mut DeckRng) -> EngineResult<Self> {
        let fascists = fascist_count(num_players).ok_or_else(|| {
            EngineError::configuration(format!(
                "number of players must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {num_players}"
            ))
        })?;
        let liberals = num_players as usize - fascists - 1;

        let mut roles = Vec::with_capacity(num_players as usize);
        roles.extend(std::iter::repeat(Role::Liberal).take(liberals));
        roles.extend(std::iter::repeat(Role::Fascist).take(fascists));
        roles.push(Role::Hitler);
        rng.shuffle(&mut roles);

        Ok(Self { roles })
    }

    /// Number of seats covered by this assignment.
    #[must_use]
    pub fn num_players(&self) -> u8 {
        self.roles.len() as u8
    }

    /// The role dealt to `seat`.
    ///
    /// The seat was bounds-checked against the same table size at
    /// construction, so the lookup is infallible.
    #[must_use]
    pub fn get(&self, seat: Seat) -> Role {
        self.roles[seat.index()]
    }

    /// Reveal only the party affiliation of `target`.
    ///
    /// A player may never investigate themself.
    pub fn investigate(&self, own: Seat, target: Seat) -> EngineResult<Party> {
        if own == target {
            return Err(EngineError::invalid_operation(
                "you cannot investigate yourself",
            ));
        }
        Ok(self.get(target).party())
    }
}
