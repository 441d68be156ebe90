//! Core engine types: cards, policies, seats, RNG, errors.
//!
//! This module contains the fundamental building blocks every other
//! component is assembled from. Nothing here knows about piles, roles, or
//! transcripts.

pub mod error;
pub mod policy;
pub mod rng;
pub mod seat;

pub use error::{EngineError, EngineResult};
pub use policy::{CardId, Policy, DECK_SIZE, FASCIST_POLICIES, LIBERAL_POLICIES};
pub use rng::DeckRng;
pub use seat::Seat;
