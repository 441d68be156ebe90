//! The append-only action log that makes every state reconstructible.
//!
//! Only the three mutating operations are recorded; reads never appear.
//! The transcript plus the shared seed is the *entire* identity of a game
//! state: undo is implemented by truncating the log and replaying from
//! scratch, and two processes agree if and only if they hold the same
//! transcript.
//!
//! Actions are a closed enum with typed payloads, dispatched through an
//! exhaustive `match` during replay — adding an operation without teaching
//! the replayer about it is a compile error.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Policy;

/// A recorded mutating operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoggedAction {
    /// A chosen policy value was enacted from the top-3 window.
    Enact(Policy),
    /// The top card was enacted sight unseen.
    Reveal,
    /// The whole top-3 window was discarded.
    Veto,
}

impl fmt::Display for LoggedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggedAction::Enact(policy) => write!(f, "enact {policy}"),
            LoggedAction::Reveal => f.write_str("reveal"),
            LoggedAction::Veto => f.write_str("veto"),
        }
    }
}

/// Ordered log of every mutating operation executed so far.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<LoggedAction>,
}

impl Transcript {
    /// An empty transcript (a fresh game).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a successfully executed action.
    pub fn push(&mut self, action: LoggedAction) {
        self.entries.push(action);
    }

    /// Number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether anything has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The recorded actions in execution order.
    #[must_use]
    pub fn entries(&self) -> &[LoggedAction] {
        &self.entries
    }

    /// A copy with the last action dropped, or `None` if empty.
    ///
    /// This is the undo input: the engine rebuilds itself from the seed by
    /// replaying the truncated copy.
    #[must_use]
    pub fn truncated(&self) -> Option<Self> {
        if self.entries.is_empty() {
            return None;
        }
        Some(Self {
            entries: self.entries[..self.entries.len() - 1].to_vec(),
        })
    }
}

impl From<Vec<LoggedAction>> for Transcript {
    fn from(entries: Vec<LoggedAction>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.push(LoggedAction::Enact(Policy::Liberal));
        transcript.push(LoggedAction::Veto);
        transcript.push(LoggedAction::Reveal);

        assert_eq!(transcript.len(), 3);
        assert_eq!(
            transcript.entries(),
            &[
                LoggedAction::Enact(Policy::Liberal),
                LoggedAction::Veto,
                LoggedAction::Reveal,
            ]
        );
    }

    #[test]
    fn test_truncated_drops_only_the_last() {
        let transcript = Transcript::from(vec![
            LoggedAction::Enact(Policy::Fascist),
            LoggedAction::Reveal,
        ]);

        let truncated = transcript.truncated().unwrap();
        assert_eq!(truncated.entries(), &[LoggedAction::Enact(Policy::Fascist)]);

        // The original is untouched.
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn test_truncated_empty_is_none() {
        assert!(Transcript::new().truncated().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(LoggedAction::Enact(Policy::Liberal).to_string(), "enact liberal");
        assert_eq!(LoggedAction::Reveal.to_string(), "reveal");
        assert_eq!(LoggedAction::Veto.to_string(), "veto");
    }

    #[test]
    fn test_serialization_round_trip() {
        let transcript = Transcript::from(vec![
            LoggedAction::Enact(Policy::Liberal),
            LoggedAction::Veto,
        ]);

        let json = serde_json::to_string(&transcript).unwrap();
        let back: Transcript = serde_json::from_str(&json).unwrap();
        assert_eq!(transcript, back);
    }
}
