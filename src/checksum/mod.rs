//! Human-speakable state fingerprints.
//!
//! Two processes that agree on the seed and have applied the same
//! transcript hold identical deck state, so they compute identical
//! checksums; any divergence in draw order, value mapping, or discard
//! contents changes the word with overwhelming probability. Players read
//! the word aloud between rounds to catch a missed or misordered command.
//!
//! This is an advisory consistency check, not a security control — every
//! process can compute every other process's state anyway.

pub mod words;

pub use words::WORDS;

use crate::deck::PolicyDeck;

/// Reduce the seed and full deck state to one display word.
///
/// The digest absorbs, in order: the seed, each draw-pile id with its
/// mapped value (draw order), then each discard-pile id (discard order).
/// The first eight digest bytes index the word table modulo its length.
#[must_use]
pub fn state_word(seed: u64, deck: &PolicyDeck) -> &'static str {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&seed.to_le_bytes());
    for &card in deck.draw_pile() {
        hasher.update(&[card.raw()]);
        if let Some(value) = deck.value_of(card) {
            hasher.update(value.as_str().as_bytes());
        }
    }
    for &card in deck.discard_pile() {
        hasher.update(&[card.raw()]);
    }

    let digest = hasher.finalize();
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest.as_bytes()[..8]);
    let index = u64::from_le_bytes(head) as usize % WORDS.len();
    WORDS[index]
}
