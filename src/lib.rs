//! # policy-deck
//!
//! A deterministic policy-deck engine for seed-synchronized social
//! deduction play. Every player runs their own process; a shared integer
//! seed is the only thing the processes have in common, and it is enough.
//!
//! ## Design Principles
//!
//! 1. **Nothing is trusted but the seed**: There is no networking and no
//!    message passing. Each process independently reconstructs the same
//!    shuffled deck and role assignment from the seed, and players keep
//!    their engines in lockstep by issuing the same commands in the same
//!    order.
//!
//! 2. **The transcript is the state**: Every mutating operation appends to
//!    an ordered log. Undo truncates the log and rebuilds the engine from
//!    the seed by replaying it — full reconstruction, never incremental
//!    rollback, so a rebuilt state is byte-identical to a fresh one.
//!
//! 3. **Divergence is audible**: A blake3 checksum of the seed and full
//!    deck state reduces to one speakable word. Players read it aloud; if
//!    the words differ, someone missed a command.
//!
//! ## Modules
//!
//! - `core`: Card ids, policy values, seats, RNG, error taxonomy
//! - `roles`: Seeded role assignment and investigation
//! - `deck`: Draw pile, discard pile, and the id → value mapping
//! - `transcript`: The append-only action log
//! - `checksum`: State fingerprints and the display-word table
//! - `game`: The engine — transitions, replay, undo
//! - `commands`: Thin textual command dispatch for the binary

pub mod checksum;
pub mod commands;
pub mod core;
pub mod deck;
pub mod game;
pub mod roles;
pub mod transcript;

// Re-export commonly used types
pub use crate::core::{
    CardId, DeckRng, EngineError, EngineResult, Policy, Seat, DECK_SIZE, FASCIST_POLICIES,
    LIBERAL_POLICIES,
};

pub use crate::checksum::{state_word, WORDS};
pub use crate::commands::Command;
pub use crate::deck::PolicyDeck;
pub use crate::game::GameEngine;
pub use crate::roles::{fascist_count, Party, Role, RoleAssignment, MAX_PLAYERS, MIN_PLAYERS};
pub use crate::transcript::{LoggedAction, Transcript};
